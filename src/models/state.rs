use tracing::info;

use crate::services::matching::MatchingService;

/// Application state shared across requests. Needs to be thread-safe.
pub struct AppState {
    /// Provider matching engine backed by the configured store.
    pub matching: MatchingService,
}

impl AppState {
    /// Creates a new application state around the matching engine.
    pub fn new(matching: MatchingService) -> Self {
        info!("Initializing application state");
        Self { matching }
    }
}
