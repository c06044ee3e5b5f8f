//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on whitespace.
///
/// Concept URIs never contain whitespace, which makes this the natural
/// source for URI-based expansion.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        // (byte start, char start) of the word being scanned
        let mut current: Option<(usize, usize)> = None;
        let mut char_offset = 0;

        for (byte_offset, c) in text.char_indices() {
            match (c.is_whitespace(), current) {
                (true, Some((byte_start, char_start))) => {
                    let word = &text[byte_start..byte_offset];
                    tokens.push(Token::with_offsets(
                        word,
                        tokens.len(),
                        char_start,
                        char_offset,
                    ));
                    current = None;
                }
                (false, None) => current = Some((byte_offset, char_offset)),
                _ => {}
            }
            char_offset += 1;
        }

        if let Some((byte_start, char_start)) = current {
            tokens.push(Token::with_offsets(
                &text[byte_start..],
                tokens.len(),
                char_start,
                char_offset,
            ));
        }

        Ok(Box::new(tokens.into_iter().map(Ok)))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
