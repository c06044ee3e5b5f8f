//! Unicode word tokenizer implementation.
//!
//! This module provides a tokenizer that splits text using Unicode word boundary
//! rules (UAX #29). It properly handles international text and filters out non-word
//! segments like punctuation and whitespace.
//!
//! # Examples
//!
//! ```
//! use skos_analysis::analysis::tokenizer::Tokenizer;
//! use skos_analysis::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens: Vec<_> = tokenizer
//!     .tokenize("Big, hairy cat!")
//!     .unwrap()
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! // Punctuation and whitespace are automatically filtered out
//! assert_eq!(tokens[0].text, "Big");
//! assert_eq!(tokens[1].text, "hairy");
//! assert_eq!(tokens[2].text, "cat");
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that splits text on Unicode word boundaries.
///
/// Only segments containing at least one alphanumeric character become
/// tokens. Positions count emitted tokens only, so a multi-word label is
/// always a run of consecutive positions.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut char_offset = 0;

        for segment in text.split_word_bounds() {
            let len = segment.chars().count();
            if segment.chars().any(|c| c.is_alphanumeric()) {
                tokens.push(Token::with_offsets(
                    segment,
                    tokens.len(),
                    char_offset,
                    char_offset + len,
                ));
            }
            char_offset += len;
        }

        Ok(Box::new(tokens.into_iter().map(Ok)))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
