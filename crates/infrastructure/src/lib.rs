//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer on top of the provider
//! clients in `ai_speech` and `ai_core`, and holds process-level concerns:
//! session storage, configuration loading and logging setup.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, LogFormat, LoggingConfig, ServerConfig, SessionStoreConfig};
pub use persistence::InMemorySessionStore;
pub use telemetry::init_logging;
