//! Application layer - Use cases and orchestration
//!
//! Contains the turn orchestrator, its port definitions, and the pure helpers
//! it relies on (dialog rendering and text chunking). Infrastructure adapters
//! implement the ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
