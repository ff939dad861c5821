//! Random quote endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use quotes::{QuoteResponse, QuotesResponse};

use super::AppState;
use crate::error::ApiError;

/// GET /quotes — one quote chosen uniformly at random.
#[tracing::instrument(skip(state))]
pub async fn random(State(state): State<Arc<AppState>>) -> Result<Json<QuoteResponse>, ApiError> {
    let response = state.service.random_quote()?;
    metrics::counter!("quotes_served_total", "endpoint" => "single").increment(1);
    Ok(Json(response))
}

/// GET /quotes/{count} — up to `count` distinct quotes in random order.
///
/// The segment is taken as a raw string so malformed input is reported
/// through `ApiError` like every other client error.
#[tracing::instrument(skip(state))]
pub async fn sample(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<QuotesResponse>, ApiError> {
    let Path(raw) = path?;
    let count = quotes::parse_count(&raw)?;
    let response = state.service.random_quotes(count)?;
    tracing::debug!(requested = count, returned = response.quotes.len(), "sampled quotes");
    metrics::counter!("quotes_served_total", "endpoint" => "sample")
        .increment(response.quotes.len() as u64);
    Ok(Json(response))
}
