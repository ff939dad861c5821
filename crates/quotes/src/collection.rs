//! The immutable quote collection and its file loader.

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::error::LoadError;

/// Key read from the quote file when none is configured.
pub const DEFAULT_KEY: &str = "quotes";

/// An ordered, read-only list of quotes shared across request handlers.
///
/// Cloning is cheap: all clones point at the same backing slice, which is
/// never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteCollection {
    quotes: Arc<[String]>,
}

impl QuoteCollection {
    /// Wraps an already-built list of quotes. An empty list is accepted here;
    /// the loaders reject it.
    pub fn new(quotes: Vec<String>) -> Self {
        Self {
            quotes: quotes.into(),
        }
    }

    /// Reads and validates the quote file at `path`.
    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>, key: &str) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let collection = Self::from_json_str(&text, key)?;
        tracing::debug!(count = collection.len(), "quote file loaded");
        Ok(collection)
    }

    /// Parses a JSON object and takes the array of strings stored under `key`.
    pub fn from_json_str(text: &str, key: &str) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_str(text)?;
        let Value::Object(mut object) = value else {
            return Err(LoadError::NotAnObject);
        };
        let entry = object
            .remove(key)
            .ok_or_else(|| LoadError::MissingKey(key.to_string()))?;
        let quotes: Vec<String> = serde_json::from_value(entry)
            .map_err(|source| LoadError::NotAStringArray {
                key: key.to_string(),
                source,
            })?;
        if quotes.is_empty() {
            return Err(LoadError::Empty(key.to_string()));
        }
        Ok(Self::new(quotes))
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.quotes
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.quotes.iter().map(String::as_str)
    }

    /// Returns true if `quote` is one of the stored quotes.
    pub fn contains(&self, quote: &str) -> bool {
        self.iter().any(|q| q == quote)
    }
}

impl From<Vec<String>> for QuoteCollection {
    fn from(quotes: Vec<String>) -> Self {
        Self::new(quotes)
    }
}

impl From<&[&str]> for QuoteCollection {
    fn from(quotes: &[&str]) -> Self {
        Self::new(quotes.iter().map(|q| q.to_string()).collect())
    }
}
