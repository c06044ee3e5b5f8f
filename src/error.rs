//! Error types for the skos-analysis library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`SkosError`] enum. Token streams carry errors in-band: a stream item is a
//! `Result<Token>`, and the first `Err` ends the stream.
//!
//! # Examples
//!
//! ```
//! use skos_analysis::error::{Result, SkosError};
//!
//! fn lookup() -> Result<Vec<String>> {
//!     Err(SkosError::thesaurus("vocabulary unavailable"))
//! }
//!
//! match lookup() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for skos-analysis operations.
#[derive(Error, Debug)]
pub enum SkosError {
    /// I/O errors (upstream token sources, config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Thesaurus lookup failures
    #[error("Thesaurus error: {0}")]
    Thesaurus(String),

    /// Contract violations
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SkosError.
pub type Result<T> = std::result::Result<T, SkosError>;

impl SkosError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SkosError::Analysis(msg.into())
    }

    /// Create a new thesaurus lookup error.
    pub fn thesaurus<S: Into<String>>(msg: S) -> Self {
        SkosError::Thesaurus(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        SkosError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SkosError::Other(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SkosError::Other(format!("Invalid configuration: {}", msg.into()))
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SkosError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SkosError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = SkosError::thesaurus("Test lookup error");
        assert_eq!(error.to_string(), "Thesaurus error: Test lookup error");

        let error = SkosError::invalid_config("max_label_length must be >= 1");
        assert_eq!(
            error.to_string(),
            "Error: Invalid configuration: max_label_length must be >= 1"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::UnexpectedEof, "stream closed");
        let skos_error = SkosError::from(io_error);

        match skos_error {
            SkosError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let skos_error = SkosError::from(anyhow::anyhow!("backend down"));
        assert!(matches!(skos_error, SkosError::Anyhow(_)));
        assert_eq!(skos_error.to_string(), "Anyhow error: backend down");
    }
}
