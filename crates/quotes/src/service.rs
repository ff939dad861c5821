//! Quote service answering the three read-only queries.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde::Serialize;

use crate::collection::QuoteCollection;
use crate::error::{QuoteError, Result};

/// Greeting returned by the root endpoint.
pub const ROOT_MESSAGE: &str = "Quote API";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteResponse {
    pub quote: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuotesResponse {
    pub quotes: Vec<String>,
}

/// Service for querying a quote collection.
///
/// Holds the collection it was constructed with and never mutates it, so a
/// single instance can be shared by every request handler without locking.
#[derive(Debug, Clone)]
pub struct QuoteService {
    collection: QuoteCollection,
}

impl QuoteService {
    /// Creates a service over the given collection.
    pub fn new(collection: QuoteCollection) -> Self {
        Self { collection }
    }

    /// Returns a reference to the underlying collection.
    pub fn collection(&self) -> &QuoteCollection {
        &self.collection
    }

    /// Constant greeting payload.
    pub fn root(&self) -> RootResponse {
        RootResponse {
            message: ROOT_MESSAGE,
        }
    }

    /// Picks one quote uniformly at random using the thread-local generator.
    pub fn random_quote(&self) -> Result<QuoteResponse> {
        self.random_quote_with(&mut rand::rng())
    }

    /// Picks one quote uniformly at random using `rng`.
    pub fn random_quote_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<QuoteResponse> {
        let quote = self
            .collection
            .as_slice()
            .choose(rng)
            .ok_or(QuoteError::EmptyCollection)?;
        Ok(QuoteResponse {
            quote: quote.clone(),
        })
    }

    /// Samples up to `count` distinct quotes using the thread-local generator.
    pub fn random_quotes(&self, count: i64) -> Result<QuotesResponse> {
        self.random_quotes_with(count, &mut rand::rng())
    }

    /// Samples `min(count, len)` quotes without replacement, in random order.
    ///
    /// Negative counts are rejected rather than clamped to zero.
    pub fn random_quotes_with<R: Rng + ?Sized>(
        &self,
        count: i64,
        rng: &mut R,
    ) -> Result<QuotesResponse> {
        if count < 0 {
            return Err(QuoteError::InvalidArgument(format!(
                "count must be non-negative, got {count}"
            )));
        }
        let len = self.collection.len();
        // counts beyond usize::MAX still select every quote
        let amount = usize::try_from(count).map_or(len, |count| count.min(len));

        let mut quotes: Vec<String> = self
            .collection
            .as_slice()
            .choose_multiple(rng, amount)
            .cloned()
            .collect();
        // choose_multiple does not guarantee a shuffled order
        quotes.shuffle(rng);

        Ok(QuotesResponse { quotes })
    }
}

/// Parses a raw `count` path segment into a non-negative integer.
pub fn parse_count(raw: &str) -> Result<i64> {
    let count: i64 = raw.parse().map_err(|_| {
        QuoteError::InvalidArgument(format!("count must be an integer, got {raw:?}"))
    })?;
    if count < 0 {
        return Err(QuoteError::InvalidArgument(format!(
            "count must be non-negative, got {count}"
        )));
    }
    Ok(count)
}
