//! The lookup interface expansion filters consume.

use crate::error::Result;

/// Synchronous lookup oracle over a concept graph.
///
/// Concepts are identified by URI strings. Every lookup returns an empty
/// list, never an error, for an unknown concept or a label without matches;
/// `Err` is reserved for failures of the backing store itself.
///
/// Implementations are shared between streams and must be safe to call
/// concurrently.
pub trait ThesaurusEngine: Send + Sync {
    /// Concepts whose preferred label equals `label`.
    fn find_concepts(&self, label: &str) -> Result<Vec<String>>;

    /// Preferred labels of a concept.
    fn pref_labels(&self, uri: &str) -> Result<Vec<String>>;

    /// Alternative labels of a concept.
    fn alt_labels(&self, uri: &str) -> Result<Vec<String>>;

    /// Hidden labels of a concept.
    fn hidden_labels(&self, uri: &str) -> Result<Vec<String>>;

    /// Directly broader concepts.
    fn broader_concepts(&self, uri: &str) -> Result<Vec<String>>;

    /// All ancestor concepts.
    fn broader_transitive_concepts(&self, uri: &str) -> Result<Vec<String>>;

    /// Directly narrower concepts.
    fn narrower_concepts(&self, uri: &str) -> Result<Vec<String>>;

    /// All descendant concepts.
    fn narrower_transitive_concepts(&self, uri: &str) -> Result<Vec<String>>;

    /// Preferred labels of the directly broader concepts.
    fn broader_labels(&self, uri: &str) -> Result<Vec<String>> {
        self.pref_labels_of(self.broader_concepts(uri)?)
    }

    /// Preferred labels of all ancestor concepts.
    fn broader_transitive_labels(&self, uri: &str) -> Result<Vec<String>> {
        self.pref_labels_of(self.broader_transitive_concepts(uri)?)
    }

    /// Preferred labels of the directly narrower concepts.
    fn narrower_labels(&self, uri: &str) -> Result<Vec<String>> {
        self.pref_labels_of(self.narrower_concepts(uri)?)
    }

    /// Preferred labels of all descendant concepts.
    fn narrower_transitive_labels(&self, uri: &str) -> Result<Vec<String>> {
        self.pref_labels_of(self.narrower_transitive_concepts(uri)?)
    }

    /// Resolve a list of concepts to their preferred labels, in order.
    fn pref_labels_of(&self, uris: Vec<String>) -> Result<Vec<String>> {
        let mut labels = Vec::new();
        for uri in &uris {
            labels.extend(self.pref_labels(uri)?);
        }
        Ok(labels)
    }
}
