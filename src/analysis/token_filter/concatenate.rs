//! Concatenate filter implementation.
//!
//! Collapses a whole stream into a single token, e.g. to turn a tokenized
//! label back into the phrase a thesaurus lookup expects.

use super::Filter;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Separator used when none is configured.
pub const DEFAULT_TOKEN_SEPARATOR: &str = " ";

/// A filter that joins every token of the stream into one token.
///
/// The joined token starts where the first token starts and ends where the
/// last one ends. A stream whose tokens are all empty produces nothing.
#[derive(Clone, Debug)]
pub struct ConcatenateFilter {
    separator: String,
}

impl ConcatenateFilter {
    /// Create a concatenate filter using the default separator.
    pub fn new() -> Self {
        Self::with_separator(DEFAULT_TOKEN_SEPARATOR)
    }

    /// Create a concatenate filter with a custom separator.
    pub fn with_separator<S: Into<String>>(separator: S) -> Self {
        ConcatenateFilter {
            separator: separator.into(),
        }
    }

    /// Get the separator.
    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl Default for ConcatenateFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for ConcatenateFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(ConcatenateStream {
            input: tokens,
            separator: self.separator.clone(),
            done: false,
        }))
    }

    fn name(&self) -> &'static str {
        "concatenate"
    }
}

struct ConcatenateStream {
    input: TokenStream,
    separator: String,
    done: bool,
}

impl ConcatenateStream {
    fn concatenate(&mut self) -> Result<Option<Token>> {
        let mut text = String::new();
        let mut span: Option<(usize, usize)> = None;

        for token in self.input.by_ref() {
            let token = token?;
            if !text.is_empty() {
                text.push_str(&self.separator);
            }
            text.push_str(&token.text);
            let start = span.map_or(token.start_offset, |(start, _)| start);
            span = Some((start, token.end_offset));
        }

        if text.is_empty() {
            return Ok(None);
        }
        let (start, end) = span.unwrap_or_default();
        Ok(Some(Token::with_offsets(text, 0, start, end)))
    }
}

impl Iterator for ConcatenateStream {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.done = true;
        self.concatenate().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::IntoTokenStream;
    use crate::error::SkosError;

    fn run(filter: &ConcatenateFilter, tokens: Vec<Token>) -> Vec<Token> {
        filter
            .filter(tokens.into_token_stream())
            .unwrap()
            .collect::<Result<_>>()
            .unwrap()
    }

    #[test]
    fn test_concatenate_filter() {
        let filter = ConcatenateFilter::new();
        let result = run(
            &filter,
            vec![
                Token::with_offsets("military", 0, 4, 12),
                Token::with_offsets("equipment", 1, 13, 22),
            ],
        );

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "military equipment");
        assert_eq!(result[0].start_offset, 4);
        assert_eq!(result[0].end_offset, 22);
    }

    #[test]
    fn test_custom_separator() {
        let filter = ConcatenateFilter::with_separator("_");
        let result = run(&filter, vec![Token::new("a", 0), Token::new("b", 1)]);
        assert_eq!(result[0].text, "a_b");
    }

    #[test]
    fn test_empty_stream_yields_nothing() {
        let filter = ConcatenateFilter::new();
        assert!(run(&filter, Vec::new()).is_empty());
        assert!(run(&filter, vec![Token::new("", 0)]).is_empty());
    }

    #[test]
    fn test_upstream_error_propagates() {
        let filter = ConcatenateFilter::new();
        let stream: TokenStream = Box::new(
            vec![Ok(Token::new("a", 0)), Err(SkosError::analysis("broken"))].into_iter(),
        );

        let mut output = filter.filter(stream).unwrap();
        assert!(matches!(output.next(), Some(Err(SkosError::Analysis(_)))));
        assert!(output.next().is_none());
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(ConcatenateFilter::new().name(), "concatenate");
    }
}
