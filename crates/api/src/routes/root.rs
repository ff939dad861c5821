//! Root greeting endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use quotes::RootResponse;

use super::AppState;

/// GET / — constant greeting.
pub async fn get(State(state): State<Arc<AppState>>) -> Json<RootResponse> {
    Json(state.service.root())
}
