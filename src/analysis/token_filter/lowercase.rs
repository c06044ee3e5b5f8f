//! Lowercase filter implementation.
//!
//! Label lookups are exact, so label-based expansion normally runs behind
//! this filter to make matching case-insensitive.
//!
//! # Examples
//!
//! ```
//! use skos_analysis::analysis::token::{IntoTokenStream, Token};
//! use skos_analysis::analysis::token_filter::Filter;
//! use skos_analysis::analysis::token_filter::lowercase::LowercaseFilter;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Big", 0), Token::new("CAT", 1)];
//! let filtered: Vec<_> = filter
//!     .filter(tokens.into_token_stream())
//!     .unwrap()
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(filtered[0].text, "big");
//! assert_eq!(filtered[1].text, "cat");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that converts tokens to lowercase.
///
/// # Behavior
///
/// - Converts all characters to lowercase (Unicode-aware)
/// - Preserves token positions, offsets, relations and payloads
/// - Passes upstream errors through untouched
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|token| {
            token.map(|mut token| {
                if token.text.chars().any(char::is_uppercase) {
                    token.text = token.text.to_lowercase();
                }
                token
            })
        })))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::{IntoTokenStream, Token};
    use crate::error::SkosError;

    #[test]
    fn test_lowercase_filter() {
        let filter = LowercaseFilter::new();
        let tokens = vec![
            Token::with_offsets("Hello", 0, 0, 5),
            Token::new("WORLD", 1),
            Token::new("Ärger", 2),
        ];

        let result: Vec<Token> = filter
            .filter(tokens.into_token_stream())
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[0].end_offset, 5);
        assert_eq!(result[1].text, "world");
        assert_eq!(result[2].text, "ärger");
    }

    #[test]
    fn test_errors_pass_through() {
        let filter = LowercaseFilter::new();
        let stream: TokenStream = Box::new(
            vec![Ok(Token::new("A", 0)), Err(SkosError::analysis("boom"))].into_iter(),
        );

        let result: Vec<_> = filter.filter(stream).unwrap().collect();
        assert_eq!(result[0].as_ref().unwrap().text, "a");
        assert!(result[1].is_err());
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LowercaseFilter::new().name(), "lowercase");
    }
}
