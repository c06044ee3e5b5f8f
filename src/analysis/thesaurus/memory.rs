//! In-memory thesaurus.
//!
//! A [`ThesaurusEngine`] over concepts held in hash maps. Embedders that keep
//! their vocabulary in memory can populate it directly; the expansion filters
//! only ever see the trait.

use std::collections::VecDeque;

use ahash::{AHashMap, AHashSet};

use crate::analysis::thesaurus::engine::ThesaurusEngine;
use crate::error::Result;

#[derive(Debug, Clone, Default)]
struct ConceptEntry {
    pref_labels: Vec<String>,
    alt_labels: Vec<String>,
    hidden_labels: Vec<String>,
    broader: Vec<String>,
    narrower: Vec<String>,
}

/// Thesaurus backed by in-memory maps.
///
/// Narrower links are maintained as the inverse of broader links, so a
/// hierarchy only needs to be described in one direction.
///
/// # Examples
///
/// ```
/// use skos_analysis::analysis::thesaurus::{InMemoryThesaurus, ThesaurusEngine};
///
/// let mut thesaurus = InMemoryThesaurus::new();
/// thesaurus
///     .add_pref_label("c:weapons", "weapons")
///     .add_alt_label("c:weapons", "arms")
///     .add_pref_label("c:equipment", "military equipment")
///     .add_broader("c:weapons", "c:equipment");
///
/// assert_eq!(thesaurus.find_concepts("weapons").unwrap(), vec!["c:weapons"]);
/// assert_eq!(thesaurus.broader_labels("c:weapons").unwrap(), vec!["military equipment"]);
/// assert_eq!(thesaurus.narrower_concepts("c:equipment").unwrap(), vec!["c:weapons"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryThesaurus {
    concepts: AHashMap<String, ConceptEntry>,
    /// pref label -> concepts carrying it, in insertion order
    pref_index: AHashMap<String, Vec<String>>,
}

impl InMemoryThesaurus {
    /// Create an empty thesaurus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a concept without any labels or relations.
    pub fn add_concept(&mut self, uri: &str) -> &mut Self {
        self.entry(uri);
        self
    }

    /// Add a preferred label to a concept.
    pub fn add_pref_label(&mut self, uri: &str, label: &str) -> &mut Self {
        if push_unique(&mut self.entry(uri).pref_labels, label) {
            push_unique(self.pref_index.entry(label.to_string()).or_default(), uri);
        }
        self
    }

    /// Add an alternative label to a concept.
    pub fn add_alt_label(&mut self, uri: &str, label: &str) -> &mut Self {
        push_unique(&mut self.entry(uri).alt_labels, label);
        self
    }

    /// Add a hidden label to a concept.
    pub fn add_hidden_label(&mut self, uri: &str, label: &str) -> &mut Self {
        push_unique(&mut self.entry(uri).hidden_labels, label);
        self
    }

    /// Declare `broader` as a directly broader concept of `uri`.
    pub fn add_broader(&mut self, uri: &str, broader: &str) -> &mut Self {
        push_unique(&mut self.entry(uri).broader, broader);
        push_unique(&mut self.entry(broader).narrower, uri);
        self
    }

    /// Number of known concepts.
    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    /// Whether no concept has been registered.
    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// Whether `uri` is a known concept.
    pub fn contains(&self, uri: &str) -> bool {
        self.concepts.contains_key(uri)
    }

    fn entry(&mut self, uri: &str) -> &mut ConceptEntry {
        self.concepts.entry(uri.to_string()).or_default()
    }

    fn direct<F>(&self, uri: &str, select: F) -> Vec<String>
    where
        F: Fn(&ConceptEntry) -> &Vec<String>,
    {
        self.concepts
            .get(uri)
            .map(|entry| select(entry).clone())
            .unwrap_or_default()
    }

    /// Breadth-first closure over a relation, excluding `uri` itself.
    fn closure<F>(&self, uri: &str, select: F) -> Vec<String>
    where
        F: Fn(&ConceptEntry) -> &Vec<String>,
    {
        let mut seen = AHashSet::new();
        seen.insert(uri.to_string());
        let mut result = Vec::new();
        let mut queue: VecDeque<String> = self.direct(uri, &select).into();

        while let Some(next) = queue.pop_front() {
            if !seen.insert(next.clone()) {
                continue;
            }
            if let Some(entry) = self.concepts.get(&next) {
                queue.extend(select(entry).iter().cloned());
            }
            result.push(next);
        }

        result
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) -> bool {
    if values.iter().any(|v| v == value) {
        return false;
    }
    values.push(value.to_string());
    true
}

impl ThesaurusEngine for InMemoryThesaurus {
    fn find_concepts(&self, label: &str) -> Result<Vec<String>> {
        Ok(self.pref_index.get(label).cloned().unwrap_or_default())
    }

    fn pref_labels(&self, uri: &str) -> Result<Vec<String>> {
        Ok(self.direct(uri, |e| &e.pref_labels))
    }

    fn alt_labels(&self, uri: &str) -> Result<Vec<String>> {
        Ok(self.direct(uri, |e| &e.alt_labels))
    }

    fn hidden_labels(&self, uri: &str) -> Result<Vec<String>> {
        Ok(self.direct(uri, |e| &e.hidden_labels))
    }

    fn broader_concepts(&self, uri: &str) -> Result<Vec<String>> {
        Ok(self.direct(uri, |e| &e.broader))
    }

    fn broader_transitive_concepts(&self, uri: &str) -> Result<Vec<String>> {
        Ok(self.closure(uri, |e| &e.broader))
    }

    fn narrower_concepts(&self, uri: &str) -> Result<Vec<String>> {
        Ok(self.direct(uri, |e| &e.narrower))
    }

    fn narrower_transitive_concepts(&self, uri: &str) -> Result<Vec<String>> {
        Ok(self.closure(uri, |e| &e.narrower))
    }
}
