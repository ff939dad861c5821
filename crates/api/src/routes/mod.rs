pub mod health;
pub mod metrics;
pub mod quotes;
pub mod root;

use ::quotes::QuoteService;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub service: QuoteService,
}
