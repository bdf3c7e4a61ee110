//! Logging setup
//!
//! Installs the global `tracing` subscriber in text or JSON form.

mod logging;

pub use logging::init_logging;
