//! Label-based term expansion.
//!
//! Runs of up to `max_label_length` consecutive tokens are joined with single
//! spaces and looked up as preferred labels. Every matching concept is
//! emitted as a new token holding its URI, followed by its broader and
//! transitively broader concepts at the same position.
//!
//! ```text
//! Input:  "big" "cat"              (max_label_length = 2)
//! Windows: "big cat", "big", "cat"
//! Output: "felid-uri" (Pref, pos_inc=1)  "mammal-uri" (Broader, pos_inc=0)
//! ```
//!
//! The input tokens themselves are never emitted; index them through a
//! separate field or analyzer when the raw text is needed too.
//!
//! Windows anchored at the same token are all evaluated, longest first, so
//! overlapping matches ("big cat" and "cat") both produce expansions.
//!
//! The whole upstream is consumed on the first pull. A failure anywhere in
//! the input therefore surfaces before any expansion has been emitted.

use std::collections::{BTreeSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use log::{debug, trace};

use super::Filter;
use super::expansion::{ExpansionBase, ExpansionPhase};

use crate::analysis::thesaurus::{RelationKind, ThesaurusEngine};
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, SkosError};

/// Window size used when none is configured.
pub const DEFAULT_MAX_LABEL_LENGTH: usize = 1;

/// The relations label expansion emits, whatever the analyzer configures.
pub const LABEL_EXPANSION_RELATIONS: [RelationKind; 3] = [
    RelationKind::Pref,
    RelationKind::Broader,
    RelationKind::BroaderTransitive,
];

/// A filter expanding label text to matching concepts.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use skos_analysis::analysis::thesaurus::{InMemoryThesaurus, RelationKind};
/// use skos_analysis::analysis::token::{IntoTokenStream, Token};
/// use skos_analysis::analysis::token_filter::Filter;
/// use skos_analysis::analysis::token_filter::label_expansion::LabelExpansionFilter;
///
/// let mut thesaurus = InMemoryThesaurus::new();
/// thesaurus
///     .add_pref_label("c:felid", "big cat")
///     .add_broader("c:felid", "c:mammal");
///
/// let filter = LabelExpansionFilter::new(Arc::new(thesaurus), 2).unwrap();
/// let tokens = vec![Token::with_offsets("big", 0, 0, 3), Token::with_offsets("cat", 1, 4, 7)];
/// let output: Vec<Token> = filter
///     .filter(tokens.into_token_stream())
///     .unwrap()
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// assert_eq!(output[0].text, "c:felid");
/// assert_eq!(output[0].relation, Some(RelationKind::Pref));
/// assert_eq!((output[0].start_offset, output[0].end_offset), (0, 7));
/// assert_eq!(output[1].text, "c:mammal");
/// assert_eq!(output[1].relation, Some(RelationKind::Broader));
/// ```
#[derive(Clone)]
pub struct LabelExpansionFilter {
    engine: Arc<dyn ThesaurusEngine>,
    max_label_length: usize,
}

impl LabelExpansionFilter {
    /// Create a filter matching labels of up to `max_label_length` tokens.
    pub fn new(engine: Arc<dyn ThesaurusEngine>, max_label_length: usize) -> Result<Self> {
        if max_label_length == 0 {
            return Err(SkosError::invalid_config(
                "max_label_length must be at least 1",
            ));
        }
        Ok(LabelExpansionFilter {
            engine,
            max_label_length,
        })
    }

    /// Create a filter matching single-token labels only.
    pub fn with_default_length(engine: Arc<dyn ThesaurusEngine>) -> Self {
        LabelExpansionFilter {
            engine,
            max_label_length: DEFAULT_MAX_LABEL_LENGTH,
        }
    }

    /// The longest label, in tokens, this filter can match.
    pub fn max_label_length(&self) -> usize {
        self.max_label_length
    }
}

impl Filter for LabelExpansionFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let relations: BTreeSet<_> = LABEL_EXPANSION_RELATIONS.into_iter().collect();
        Ok(Box::new(LabelExpansionStream {
            input: tokens,
            upstream_done: false,
            base: ExpansionBase::new(Arc::clone(&self.engine), relations),
            buffer: VecDeque::with_capacity(self.max_label_length),
            max_label_length: self.max_label_length,
            phase: ExpansionPhase::Filling,
        }))
    }

    fn name(&self) -> &'static str {
        "label_expansion"
    }
}

/// The stream produced by [`LabelExpansionFilter`].
pub struct LabelExpansionStream {
    input: TokenStream,
    upstream_done: bool,
    base: ExpansionBase,
    /// Lookahead; never longer than `max_label_length`.
    buffer: VecDeque<Token>,
    max_label_length: usize,
    phase: ExpansionPhase,
}

impl LabelExpansionStream {
    fn pull(&mut self) -> Result<Option<Token>> {
        if self.upstream_done {
            return Ok(None);
        }
        match self.input.next() {
            Some(token) => token.map(Some),
            None => {
                self.upstream_done = true;
                Ok(None)
            }
        }
    }

    /// Slide the window over the whole input, queueing every match.
    fn fill(&mut self) -> Result<()> {
        loop {
            let next = self.pull()?;
            if next.is_none() && self.buffer.is_empty() {
                return Ok(());
            }
            if next.is_none() || self.buffer.len() == self.max_label_length {
                self.match_windows()?;
                self.buffer.pop_front();
            }
            if let Some(token) = next {
                self.buffer.push_back(token);
            }
        }
    }

    /// Label text of the first `len` buffered tokens and the end offset of
    /// the last of them, if it differs from the head's.
    fn window(&self, len: usize) -> (String, Option<usize>) {
        let mut text = String::new();
        for (i, token) in self.buffer.iter().take(len).enumerate() {
            if i > 0 {
                text.push(' ');
            }
            text.push_str(&token.text);
        }
        let end_offset = if len > 1 {
            self.buffer.get(len - 1).map(|token| token.end_offset)
        } else {
            None
        };
        (text, end_offset)
    }

    /// Evaluate every window anchored at the head of the buffer, longest first.
    fn match_windows(&mut self) -> Result<()> {
        let Some(head) = self.buffer.front() else {
            return Ok(());
        };
        let origin = Rc::new(head.clone());

        for len in (1..=self.buffer.len()).rev() {
            let (text, end_offset) = self.window(len);
            let concepts = self.base.engine().find_concepts(&text)?;
            trace!("window '{}' matched {} concept(s)", text, concepts.len());

            for uri in concepts {
                let broader = self.base.engine().broader_concepts(&uri)?;
                let transitive = self.base.engine().broader_transitive_concepts(&uri)?;
                self.base
                    .enqueue_label(uri, RelationKind::Pref, &origin, end_offset, 1);
                self.base
                    .enqueue_labels(broader, RelationKind::Broader, &origin, end_offset);
                self.base.enqueue_labels(
                    transitive,
                    RelationKind::BroaderTransitive,
                    &origin,
                    end_offset,
                );
            }
        }
        Ok(())
    }

    fn abort(&mut self) {
        self.base.discard();
        self.buffer.clear();
        self.phase = ExpansionPhase::Exhausted;
    }
}

impl Iterator for LabelExpansionStream {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.phase {
                ExpansionPhase::Exhausted => return None,
                ExpansionPhase::Filling => {
                    if let Err(e) = self.fill() {
                        debug!("label expansion aborted: {e}");
                        self.abort();
                        return Some(Err(e));
                    }
                    debug!(
                        "label expansion queued {} token(s)",
                        self.base.queue().len()
                    );
                    self.phase = ExpansionPhase::Draining;
                }
                ExpansionPhase::Draining => {
                    if self.base.has_pending() {
                        return Some(self.base.emit_from_queue());
                    }
                    self.phase = ExpansionPhase::Exhausted;
                }
            }
        }
    }
}
