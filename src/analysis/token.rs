//! Token types and utilities for text analysis.
//!
//! This module defines the core data structures for representing text tokens,
//! which are the fundamental units that flow through the analysis pipeline.
//!
//! # Core Types
//!
//! - [`Token`] - A single analyzed token with text, offsets, and expansion metadata
//! - [`TokenStream`] - Boxed iterator of fallible tokens
//!
//! # Expansion Tokens
//!
//! Thesaurus expansion filters emit additional tokens at the position of the
//! term they expand. Such tokens carry a [`RelationKind`] and a payload that
//! encodes it, while original tokens carry neither:
//!
//! ```text
//! Input: "weapons-uri"
//!
//!   "weapons-uri" (pos_inc=1, relation=None)
//!   "weapons"     (pos_inc=0, relation=Pref)
//!   "arms"        (pos_inc=0, relation=Alt)
//! ```
//!
//! # Examples
//!
//! ```
//! use skos_analysis::analysis::token::Token;
//! use skos_analysis::analysis::thesaurus::RelationKind;
//!
//! let token = Token::with_offsets("weapons", 0, 0, 7).with_relation(RelationKind::Pref);
//! assert_eq!(token.text, "weapons");
//! assert_eq!(token.relation, Some(RelationKind::Pref));
//! assert_eq!(token.payload.as_deref(), Some(&[0u8, 0, 0, 0][..]));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::thesaurus::RelationKind;
use crate::error::Result;

/// A token represents a single unit of text after tokenization.
///
/// Tokens are plain values: filters capture them by cloning and rebuild
/// later tokens from those copies, so no token is ever shared mutably
/// between pipeline stages.
///
/// # Fields
///
/// - `text` - The token's text content
/// - `position` - Position assigned by the tokenizer (0-based)
/// - `start_offset` / `end_offset` - Character offsets in the original text
/// - `position_increment` - Position relative to previous token (default: 1)
/// - `position_length` - Number of positions this token spans (default: 1)
/// - `relation` - Thesaurus relation, set only on expansion tokens
/// - `payload` - Opaque bytes for the indexer, the encoded `relation`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the original token stream (0-based)
    pub position: usize,

    /// The character offset where this token starts in the original text
    pub start_offset: usize,

    /// The character offset where this token ends in the original text
    pub end_offset: usize,

    /// Position increment from the previous token (default: 1).
    ///
    /// - 1 (default): Normal increment, next position
    /// - 0: Same position as previous token (e.g., for expansions)
    /// - >1: Skip positions (e.g., for removed stop words)
    pub position_increment: usize,

    /// How many positions this token spans (default: 1).
    pub position_length: usize,

    /// The thesaurus relation this token was expanded through.
    pub relation: Option<RelationKind>,

    /// Payload propagated to the index.
    pub payload: Option<Vec<u8>>,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            position_increment: 1,
            position_length: 1,
            relation: None,
            payload: None,
        }
    }

    /// Create a new token with text, position, and character offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            start_offset,
            end_offset,
            ..Token::new(text, position)
        }
    }

    /// Get the length of the token text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Clone this token with updated text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }

    /// Set the position increment.
    pub fn with_position_increment(mut self, increment: usize) -> Self {
        self.position_increment = increment;
        self
    }

    /// Set the position length.
    pub fn with_position_length(mut self, length: usize) -> Self {
        self.position_length = length;
        self
    }

    /// Tag this token with a relation and the matching payload.
    pub fn with_relation(mut self, relation: RelationKind) -> Self {
        self.relation = Some(relation);
        self.payload = Some(relation.to_payload());
        self
    }

    /// Whether this token was produced by a thesaurus expansion.
    pub fn is_expansion(&self) -> bool {
        self.relation.is_some()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
///
/// An `Err` item ends the stream; well-behaved streams yield `None` afterwards.
pub type TokenStream = Box<dyn Iterator<Item = Result<Token>>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter().map(Ok))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 0);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 0);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 0);
        assert_eq!(token.position_increment, 1);
        assert!(token.relation.is_none());
        assert!(token.payload.is_none());
        assert!(!token.is_expansion());
    }

    #[test]
    fn test_token_with_offsets() {
        let token = Token::with_offsets("world", 1, 6, 11);
        assert_eq!(token.text, "world");
        assert_eq!(token.position, 1);
        assert_eq!(token.start_offset, 6);
        assert_eq!(token.end_offset, 11);
    }

    #[test]
    fn test_with_relation_sets_payload() {
        let token = Token::new("arms", 0).with_relation(RelationKind::Alt);
        assert!(token.is_expansion());
        assert_eq!(token.relation, Some(RelationKind::Alt));
        assert_eq!(token.payload, Some(vec![0, 0, 0, 1]));
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("hello", 0);
        assert_eq!(format!("{token}"), "hello");
    }

    #[test]
    fn test_token_stream() {
        let tokens = vec![Token::new("hello", 0), Token::new("world", 1)];

        let stream = tokens.into_token_stream();
        let collected: Vec<_> = stream.collect::<Result<_>>().unwrap();

        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].text, "hello");
        assert_eq!(collected[1].text, "world");
    }
}
