//! API error types with HTTP response mapping.

use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use metrics_exporter_prometheus::BuildError;
use quotes::{LoadError, QuoteError};
use thiserror::Error;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request from the client.
    BadRequest(String),
    /// Quote query error.
    Quote(QuoteError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Quote(err) => quote_error_to_response(err),
        };

        if status.is_client_error() {
            metrics::counter!("quote_requests_rejected_total").increment(1);
        }

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn quote_error_to_response(err: QuoteError) -> (StatusCode, String) {
    match &err {
        QuoteError::InvalidArgument(_) => (StatusCode::BAD_REQUEST, err.to_string()),
        QuoteError::EmptyCollection => {
            tracing::warn!("quote requested from an empty collection");
            (StatusCode::SERVICE_UNAVAILABLE, err.to_string())
        }
    }
}

impl From<QuoteError> for ApiError {
    fn from(err: QuoteError) -> Self {
        ApiError::Quote(err)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Errors that stop the server before or while serving.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The quote file could not be loaded.
    #[error("Failed to load quotes: {0}")]
    Quotes(#[from] LoadError),

    /// The Prometheus recorder could not be installed.
    #[error("Failed to install metrics recorder: {0}")]
    Metrics(#[from] BuildError),

    /// The listen address could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_maps_to_400() {
        let response = ApiError::BadRequest("bad path".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_argument_maps_to_400() {
        let err = ApiError::from(QuoteError::InvalidArgument("count".to_string()));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_empty_collection_maps_to_503() {
        let err = ApiError::from(QuoteError::EmptyCollection);
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
