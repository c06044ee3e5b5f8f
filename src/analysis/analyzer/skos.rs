//! Analyzer presets for thesaurus expansion.
//!
//! - URI expansion: whitespace tokenizer, then [`UriExpansionFilter`].
//! - Label expansion: Unicode word tokenizer, lowercasing, then
//!   [`LabelExpansionFilter`].
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use skos_analysis::analysis::analyzer::analyzer::Analyzer;
//! use skos_analysis::analysis::analyzer::skos::SkosAnalyzer;
//! use skos_analysis::analysis::config::ExpansionConfig;
//! use skos_analysis::analysis::thesaurus::InMemoryThesaurus;
//!
//! let mut thesaurus = InMemoryThesaurus::new();
//! thesaurus.add_pref_label("c:felid", "big cat");
//!
//! let analyzer = SkosAnalyzer::new(Arc::new(thesaurus), &ExpansionConfig::label(2)).unwrap();
//! let texts: Vec<String> = analyzer
//!     .analyze("A Big Cat!")
//!     .unwrap()
//!     .map(|token| token.unwrap().text)
//!     .collect();
//!
//! assert_eq!(texts, vec!["c:felid"]);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::config::{ExpansionConfig, ExpansionType};
use crate::analysis::thesaurus::ThesaurusEngine;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::label_expansion::LabelExpansionFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::uri_expansion::UriExpansionFilter;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::Result;

/// An analyzer expanding text against a thesaurus.
pub struct SkosAnalyzer {
    inner: PipelineAnalyzer,
    expansion_type: ExpansionType,
}

impl SkosAnalyzer {
    /// Build the pipeline described by `config`.
    pub fn new(engine: Arc<dyn ThesaurusEngine>, config: &ExpansionConfig) -> Result<Self> {
        config.validate()?;

        let inner = match config.expansion_type {
            ExpansionType::Uri => PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
                .add_filter(Arc::new(UriExpansionFilter::new(engine, config.relations())))
                .with_name("skos_uri"),
            ExpansionType::Label => PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
                .add_filter(Arc::new(LowercaseFilter::new()))
                .add_filter(Arc::new(LabelExpansionFilter::new(
                    engine,
                    config.max_label_length,
                )?))
                .with_name("skos_label"),
        };

        Ok(SkosAnalyzer {
            inner,
            expansion_type: config.expansion_type,
        })
    }

    /// Whether this analyzer expands URIs or labels.
    pub fn expansion_type(&self) -> ExpansionType {
        self.expansion_type
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Analyzer for SkosAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "skos"
    }
}

impl std::fmt::Debug for SkosAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkosAnalyzer")
            .field("expansion_type", &self.expansion_type)
            .field("inner", &self.inner)
            .finish()
    }
}
