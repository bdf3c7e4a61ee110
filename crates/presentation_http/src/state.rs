//! Application state shared across handlers

use std::sync::Arc;

use application::TurnOrchestrator;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Runs one conversation turn per request
    pub orchestrator: Arc<TurnOrchestrator>,
}

impl AppState {
    pub fn new(orchestrator: Arc<TurnOrchestrator>) -> Self {
        Self { orchestrator }
    }
}
