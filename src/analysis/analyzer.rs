//! Analyzers that combine tokenizers and filters.
//!
//! - [`analyzer::Analyzer`] - The analyzer trait
//! - [`pipeline::PipelineAnalyzer`] - Tokenizer followed by a chain of filters
//! - [`skos::SkosAnalyzer`] - Ready-made URI and label expansion pipelines

pub mod analyzer;
pub mod pipeline;
pub mod skos;

pub use analyzer::Analyzer;
pub use pipeline::PipelineAnalyzer;
pub use skos::SkosAnalyzer;
