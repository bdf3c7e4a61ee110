//! Domain layer for the voice agent
//!
//! Contains the dialog vocabulary: turns, their roles, and the session
//! identifiers that group them. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
