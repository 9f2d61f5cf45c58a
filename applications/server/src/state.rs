/// Shared application state
use phasebook_core::Dataset;
use std::sync::Arc;

/// Application state shared across all handlers
///
/// The dataset never changes after startup, so handlers share it without
/// locking.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }
}
