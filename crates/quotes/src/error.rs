//! Error types for loading and querying quotes.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a quote file at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The quote file could not be read.
    #[error("Failed to read quote file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file contents are not valid JSON.
    #[error("Malformed quote file: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level JSON value is not an object.
    #[error("Quote file must contain a JSON object at the top level")]
    NotAnObject,

    /// The object has no entry under the configured key.
    #[error("Quote file has no \"{0}\" key")]
    MissingKey(String),

    /// The entry exists but is not an array of strings.
    #[error("Quote file key \"{key}\" must hold an array of strings: {source}")]
    NotAStringArray {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The array is present but holds no quotes.
    #[error("Quote file key \"{0}\" holds an empty array")]
    Empty(String),
}

/// Errors raised by quote queries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    /// A single quote was requested from a collection with no quotes.
    #[error("No quotes available")]
    EmptyCollection,

    /// The caller supplied an argument outside the accepted domain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience type alias for quote query results.
pub type Result<T> = std::result::Result<T, QuoteError>;
