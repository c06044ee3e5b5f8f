//! Text analysis with thesaurus expansion.
//!
//! Tokenizers split text into [`token::Token`]s, token filters transform
//! the resulting stream, and analyzers bundle a tokenizer with a chain of
//! filters. The expansion filters consult a [`thesaurus::ThesaurusEngine`]
//! to add related concepts and labels to the stream.

pub mod analyzer;
pub mod config;
pub mod thesaurus;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
