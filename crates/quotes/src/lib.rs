//! Motivational quote collection and random selection.
//!
//! This crate provides:
//! - `QuoteCollection`, an immutable list loaded once from a JSON file
//! - `QuoteService`, answering the root, single-quote and sample queries

pub mod collection;
pub mod error;
pub mod service;

pub use collection::{DEFAULT_KEY, QuoteCollection};
pub use error::{LoadError, QuoteError, Result};
pub use service::{
    QuoteResponse, QuoteService, QuotesResponse, ROOT_MESSAGE, RootResponse, parse_count,
};
