//! # skos-analysis
//!
//! Thesaurus-driven token expansion for full-text analysis.
//!
//! ## Features
//!
//! - URI expansion: concept URIs are followed by their related labels
//! - Label expansion: runs of words are matched against preferred labels
//! - Relation tags carried in each expansion's payload
//! - Pluggable thesaurus backends through [`analysis::thesaurus::ThesaurusEngine`]
//! - An in-memory thesaurus for small vocabularies and tests

pub mod analysis;
pub mod error;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer, SkosAnalyzer};
    pub use crate::analysis::config::{ExpansionConfig, ExpansionType};
    pub use crate::analysis::thesaurus::{InMemoryThesaurus, RelationKind, ThesaurusEngine};
    pub use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
    pub use crate::analysis::token_filter::{Filter, LabelExpansionFilter, UriExpansionFilter};
    pub use crate::error::{Result, SkosError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
