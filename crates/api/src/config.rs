//! Application configuration loaded from environment variables.

use std::path::PathBuf;

use quotes::DEFAULT_KEY;

/// Default location of the quote file, relative to the working directory.
pub const DEFAULT_QUOTES_FILE: &str = "data/quotes.json";

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST`: bind address (default: `"0.0.0.0"`)
/// - `PORT`: listen port (default: `3000`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
/// - `QUOTES_FILE`: path of the JSON quote file (default: `"data/quotes.json"`)
/// - `QUOTES_KEY`: object key holding the quote array (default: `"quotes"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub quotes_file: PathBuf,
    pub quotes_key: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            quotes_file: lookup("QUOTES_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.quotes_file),
            quotes_key: lookup("QUOTES_KEY").unwrap_or(defaults.quotes_key),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            quotes_file: PathBuf::from(DEFAULT_QUOTES_FILE),
            quotes_key: DEFAULT_KEY.to_string(),
        }
    }
}
