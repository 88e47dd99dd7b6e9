//! Error types for docoutline library.

use std::io;
use thiserror::Error;

/// Result type alias for docoutline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading documents or building outlines.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed JSON in a page dump or outline file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A heading pattern failed to compile.
    #[error("Invalid heading pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The input cannot be interpreted as a document.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No reader is registered for the file extension.
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// Error during rendering.
    #[error("Rendering error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnsupportedFormat("docx".to_string());
        assert_eq!(err.to_string(), "Unsupported document format: docx");

        let err = Error::InvalidInput("missing pages".to_string());
        assert_eq!(err.to_string(), "Invalid input: missing pages");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_regex_error_conversion() {
        let re_err = regex::Regex::new("(unclosed").unwrap_err();
        let err: Error = re_err.into();
        assert!(matches!(err, Error::Pattern(_)));
    }
}
