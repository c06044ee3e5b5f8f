//! Token filter implementations for token transformation.
//!
//! Filters wrap an upstream [`TokenStream`] in a new lazy stream. A filter
//! value is only configuration: the state a filter needs while streaming
//! (queues, lookahead buffers) lives in the stream it returns, so a single
//! filter can be shared across threads and reused for any number of streams.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`concatenate::ConcatenateFilter`] - Joins the whole stream into one token
//! - [`uri_expansion::UriExpansionFilter`] - Expands concept URIs to labels
//! - [`label_expansion::LabelExpansionFilter`] - Expands label text to concepts
//!
//! # Examples
//!
//! ```
//! use skos_analysis::analysis::token::{IntoTokenStream, Token};
//! use skos_analysis::analysis::token_filter::Filter;
//! use skos_analysis::analysis::token_filter::lowercase::LowercaseFilter;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter
//!     .filter(tokens.into_token_stream())
//!     .unwrap()
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Lowercase → LabelExpansion → Index
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod concatenate;
pub mod expansion;
pub mod label_expansion;
pub mod lowercase;
pub mod uri_expansion;

pub use concatenate::ConcatenateFilter;
pub use label_expansion::LabelExpansionFilter;
pub use lowercase::LowercaseFilter;
pub use uri_expansion::UriExpansionFilter;
