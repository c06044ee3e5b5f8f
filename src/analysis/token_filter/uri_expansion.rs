//! URI-based term expansion.
//!
//! Every incoming token is taken to be a concept URI. The token itself is
//! passed through unchanged and is followed, at the same position, by the
//! labels the thesaurus relates to that concept.
//!
//! ```text
//! Input:  "weapons-uri"         next
//! Output: "weapons-uri" "weapons" "armaments" "arms"  next
//!          pos_inc=1     pos_inc=0 (Pref)  (Alt)  (Alt)
//! ```
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use skos_analysis::analysis::thesaurus::{InMemoryThesaurus, RelationKind};
//! use skos_analysis::analysis::token::{IntoTokenStream, Token};
//! use skos_analysis::analysis::token_filter::Filter;
//! use skos_analysis::analysis::token_filter::uri_expansion::UriExpansionFilter;
//!
//! let mut thesaurus = InMemoryThesaurus::new();
//! thesaurus
//!     .add_pref_label("c:weapons", "weapons")
//!     .add_alt_label("c:weapons", "arms");
//!
//! let filter = UriExpansionFilter::new(
//!     Arc::new(thesaurus),
//!     [RelationKind::Pref, RelationKind::Alt],
//! );
//! let texts: Vec<String> = filter
//!     .filter(vec![Token::new("c:weapons", 0)].into_token_stream())
//!     .unwrap()
//!     .map(|token| token.unwrap().text)
//!     .collect();
//!
//! assert_eq!(texts, vec!["c:weapons", "weapons", "arms"]);
//! ```

use std::collections::BTreeSet;
use std::rc::Rc;
use std::sync::Arc;

use log::debug;

use super::Filter;
use super::expansion::{ExpansionBase, ExpansionPhase};

use crate::analysis::thesaurus::{RelationKind, ThesaurusEngine};
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A filter expanding concept URIs to their related labels.
///
/// Relations are consulted in [`RelationKind::URI_EXPANSION_ORDER`]; kinds
/// outside the configured set are skipped without a lookup.
#[derive(Clone)]
pub struct UriExpansionFilter {
    engine: Arc<dyn ThesaurusEngine>,
    relations: BTreeSet<RelationKind>,
}

impl UriExpansionFilter {
    /// Create a filter expanding to `relations` (the default set if empty).
    pub fn new<I>(engine: Arc<dyn ThesaurusEngine>, relations: I) -> Self
    where
        I: IntoIterator<Item = RelationKind>,
    {
        UriExpansionFilter {
            engine,
            relations: RelationKind::resolve_set(relations),
        }
    }

    /// Create a filter expanding to the default relation set.
    pub fn with_default_relations(engine: Arc<dyn ThesaurusEngine>) -> Self {
        Self::new(engine, RelationKind::DEFAULT_EXPANSION)
    }

    /// The relations this filter expands to.
    pub fn relations(&self) -> &BTreeSet<RelationKind> {
        &self.relations
    }
}

impl Filter for UriExpansionFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(UriExpansionStream {
            input: tokens,
            base: ExpansionBase::new(Arc::clone(&self.engine), self.relations.clone()),
            phase: ExpansionPhase::Filling,
        }))
    }

    fn name(&self) -> &'static str {
        "uri_expansion"
    }
}

/// The stream produced by [`UriExpansionFilter`].
pub struct UriExpansionStream {
    input: TokenStream,
    base: ExpansionBase,
    phase: ExpansionPhase,
}

impl UriExpansionStream {
    /// Queue the labels related to the concept named by `token`.
    ///
    /// Lookups for one token either all succeed or queue nothing.
    fn expand(&mut self, token: &Token) -> Result<()> {
        let origin = Rc::new(token.clone());
        let mut batches = Vec::new();
        for relation in RelationKind::URI_EXPANSION_ORDER {
            if self.base.expands_to(relation) {
                batches.push((relation, relation.labels(self.base.engine(), &token.text)?));
            }
        }
        for (relation, labels) in batches {
            self.base.enqueue_labels(labels, relation, &origin, None);
        }
        Ok(())
    }

    fn abort(&mut self) {
        self.base.discard();
        self.phase = ExpansionPhase::Exhausted;
    }
}

impl Iterator for UriExpansionStream {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.phase {
            ExpansionPhase::Exhausted => return None,
            ExpansionPhase::Draining if self.base.has_pending() => {
                return Some(self.base.emit_from_queue());
            }
            _ => {}
        }

        self.phase = ExpansionPhase::Filling;
        let token = match self.input.next() {
            Some(Ok(token)) => token,
            Some(Err(e)) => {
                debug!("uri expansion aborted by upstream error: {e}");
                self.abort();
                return Some(Err(e));
            }
            None => {
                debug!("uri expansion reached end of stream");
                self.phase = ExpansionPhase::Exhausted;
                return None;
            }
        };

        if let Err(e) = self.expand(&token) {
            debug!("uri expansion of '{}' failed: {e}", token.text);
            self.abort();
            return Some(Err(e));
        }
        self.phase = ExpansionPhase::Draining;
        Some(Ok(token))
    }
}
