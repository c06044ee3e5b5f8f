//! Shared machinery of the thesaurus expansion filters.
//!
//! Both expansion filters work the same way: while processing input they
//! queue [`PendingExpansion`]s, and every pull from downstream is answered
//! from that queue before more input is read. Each pending expansion holds a
//! copy of the token it was derived from, and the emitted token is rebuilt
//! from that copy so it reports the origin's offsets and position.
//!
//! ```text
//! upstream ──pull──> [ lookups ] ──enqueue──> ExpansionQueue ──emit──> downstream
//!                                              (FIFO, one per pull)
//! ```

use std::collections::{BTreeSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use log::trace;

use crate::analysis::thesaurus::{RelationKind, ThesaurusEngine};
use crate::analysis::token::Token;
use crate::error::{Result, SkosError};

/// Lifecycle of an expansion stream.
///
/// `Filling` reads input and runs lookups, `Draining` hands out queued
/// expansions one per pull. `Exhausted` is terminal: it is entered at the end
/// of input or after the first error, and every later pull yields `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpansionPhase {
    Filling,
    Draining,
    Exhausted,
}

/// A token waiting to be emitted.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingExpansion {
    label: String,
    relation: RelationKind,
    origin: Rc<Token>,
    end_offset: Option<usize>,
    position_increment: usize,
}

impl PendingExpansion {
    /// Create a pending expansion.
    ///
    /// `end_offset` replaces the origin's end offset when it is present and
    /// non-zero.
    pub fn new<S: Into<String>>(
        label: S,
        relation: RelationKind,
        origin: Rc<Token>,
        end_offset: Option<usize>,
        position_increment: usize,
    ) -> Self {
        PendingExpansion {
            label: label.into(),
            relation,
            origin,
            end_offset,
            position_increment,
        }
    }

    /// The text the emitted token will carry.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The relation the emitted token will be tagged with.
    pub fn relation(&self) -> RelationKind {
        self.relation
    }

    /// The token this expansion restores its context from.
    pub fn origin(&self) -> &Token {
        &self.origin
    }

    /// The end offset override, if any.
    pub fn end_offset(&self) -> Option<usize> {
        self.end_offset
    }

    /// The position increment of the emitted token.
    pub fn position_increment(&self) -> usize {
        self.position_increment
    }

    /// Rebuild a token from the origin and overwrite the expansion fields.
    pub fn into_token(self) -> Token {
        let mut token = Rc::unwrap_or_clone(self.origin);
        token.text = self.label;
        if let Some(end_offset) = self.end_offset.filter(|&end| end > 0) {
            token.end_offset = end_offset;
        }
        token.position_increment = self.position_increment;
        token.with_relation(self.relation)
    }
}

/// First-in-first-out queue of pending expansions.
///
/// Insertion order is emission order.
#[derive(Clone, Debug, Default)]
pub struct ExpansionQueue {
    items: VecDeque<PendingExpansion>,
}

impl ExpansionQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued expansions.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an expansion at the back.
    pub fn push(&mut self, expansion: PendingExpansion) {
        self.items.push_back(expansion);
    }

    /// Remove the oldest expansion.
    pub fn pop(&mut self) -> Option<PendingExpansion> {
        self.items.pop_front()
    }

    /// Drop everything queued.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &PendingExpansion> {
        self.items.iter()
    }
}

impl Extend<PendingExpansion> for ExpansionQueue {
    fn extend<T: IntoIterator<Item = PendingExpansion>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}

/// State and emission protocol shared by the expansion streams.
///
/// Owns the thesaurus handle, the configured relation set and the queue.
pub struct ExpansionBase {
    engine: Arc<dyn ThesaurusEngine>,
    relations: BTreeSet<RelationKind>,
    queue: ExpansionQueue,
}

impl ExpansionBase {
    /// Create the shared state; an empty relation set means the default set.
    pub fn new(engine: Arc<dyn ThesaurusEngine>, relations: BTreeSet<RelationKind>) -> Self {
        ExpansionBase {
            engine,
            relations: RelationKind::resolve_set(relations),
            queue: ExpansionQueue::new(),
        }
    }

    /// The thesaurus consulted by this stream.
    pub fn engine(&self) -> &dyn ThesaurusEngine {
        self.engine.as_ref()
    }

    /// The relations this stream may expand to.
    pub fn relations(&self) -> &BTreeSet<RelationKind> {
        &self.relations
    }

    /// Whether `relation` is in the configured set.
    pub fn expands_to(&self, relation: RelationKind) -> bool {
        self.relations.contains(&relation)
    }

    /// Whether any expansion is waiting to be emitted.
    pub fn has_pending(&self) -> bool {
        !self.queue.is_empty()
    }

    /// The pending expansions, oldest first.
    pub fn queue(&self) -> &ExpansionQueue {
        &self.queue
    }

    /// Emit the oldest pending expansion as a token.
    ///
    /// Callers must check [`has_pending`](Self::has_pending) first; an empty
    /// queue is reported as an invalid operation.
    pub fn emit_from_queue(&mut self) -> Result<Token> {
        self.queue
            .pop()
            .map(PendingExpansion::into_token)
            .ok_or_else(|| SkosError::invalid_operation("expansion queue is empty"))
    }

    /// Queue one expansion per label, in order, at the origin's position.
    pub fn enqueue_labels(
        &mut self,
        labels: Vec<String>,
        relation: RelationKind,
        origin: &Rc<Token>,
        end_offset: Option<usize>,
    ) {
        if !labels.is_empty() {
            trace!(
                "queueing {} {} expansion(s) for '{}'",
                labels.len(),
                relation,
                origin.text
            );
        }
        for label in labels {
            self.enqueue_label(label, relation, origin, end_offset, 0);
        }
    }

    /// Queue a single expansion.
    pub fn enqueue_label<S: Into<String>>(
        &mut self,
        label: S,
        relation: RelationKind,
        origin: &Rc<Token>,
        end_offset: Option<usize>,
        position_increment: usize,
    ) {
        self.queue.push(PendingExpansion::new(
            label,
            relation,
            Rc::clone(origin),
            end_offset,
            position_increment,
        ));
    }

    /// Drop all pending expansions.
    pub fn discard(&mut self) {
        self.queue.clear();
    }
}
