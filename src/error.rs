//! Error types for dochl

use thiserror::Error;

/// Result type alias for dochl operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Highlighter error types
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid pattern for category '{category}': {source}")]
    Pattern {
        category: String,
        #[source]
        source: regex::Error,
    },

    #[error("Pattern for category '{category}' matches the empty string")]
    EmptyMatch { category: String },

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("No language registered for tag: {0}")]
    UnknownLanguage(String),

    #[error("{0}")]
    Message(String),
}
