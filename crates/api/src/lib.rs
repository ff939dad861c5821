//! HTTP API serving random motivational quotes.
//!
//! Provides REST endpoints for a greeting, a single random quote and a
//! random sample of quotes, with structured logging (tracing) and
//! Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use quotes::{LoadError, QuoteCollection, QuoteService};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use routes::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::root::get))
        .route("/health", get(routes::health::check))
        .route("/quotes", get(routes::quotes::random))
        .route("/quotes/{count}", get(routes::quotes::sample))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Wraps an already-built collection in shared application state.
pub fn create_state(collection: QuoteCollection) -> Arc<AppState> {
    Arc::new(AppState {
        service: QuoteService::new(collection),
    })
}

/// Loads the configured quote file and builds the application state.
pub fn load_state(config: &Config) -> Result<Arc<AppState>, LoadError> {
    let collection = QuoteCollection::load(&config.quotes_file, &config.quotes_key)?;
    tracing::info!(
        count = collection.len(),
        path = %config.quotes_file.display(),
        "loaded quotes"
    );
    Ok(create_state(collection))
}
