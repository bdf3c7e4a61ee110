//! Value Objects - Immutable, identity-less domain primitives

mod session_id;

pub use session_id::SessionId;
