//! Voice agent HTTP presentation layer
//!
//! Exposes the turn orchestrator over HTTP: one multipart upload per
//! conversation turn, plus a health check.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod tasks;

pub use error::ApiError;
pub use middleware::{REQUEST_ID_HEADER, RequestId, RequestIdLayer};
pub use routes::create_router;
pub use state::AppState;
pub use tasks::spawn_session_cleanup_task;
