use std::error::Error;
use std::io;

use thiserror::Error;

/// Common result type for command-line operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Result type for table of contents operations
pub type TocResult<T> = Result<T, TocError>;

/// Error types for table of contents operations
#[derive(Error, Debug)]
pub enum TocError {
    /// An option carries a value outside its allowed set
    #[error("Configuration error: invalid value \"{value}\" for toc.{key} (allowed: {allowed})")]
    InvalidOption {
        key: String,
        value: String,
        allowed: String,
    },

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Front matter parsing error
    #[error("Front matter error: {0}")]
    FrontMatter(String),

    /// The document could not be read into a tree
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Template processing error
    #[error("Template error: {0}")]
    Template(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl TocError {
    /// Build an `InvalidOption` error from the allowed values of an option
    pub fn invalid_option(key: &str, value: &str, allowed: &[&str]) -> Self {
        TocError::InvalidOption {
            key: key.to_string(),
            value: value.to_string(),
            allowed: allowed.join(", "),
        }
    }
}

impl From<liquid::Error> for TocError {
    fn from(err: liquid::Error) -> Self {
        TocError::Template(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_option_names_value_and_allowed_set() {
        let err = TocError::invalid_option("tag", "table", &["ordered", "unordered"]);
        let message = err.to_string();

        assert!(message.contains("\"table\""));
        assert!(message.contains("toc.tag"));
        assert!(message.contains("ordered, unordered"));
    }

    #[test]
    fn test_error_display() {
        let err = TocError::MalformedInput("unexpected end of stream".to_string());
        assert_eq!(err.to_string(), "Malformed input: unexpected end of stream");

        let err = TocError::Config("missing file".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing file");
    }
}
