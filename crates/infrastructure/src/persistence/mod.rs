//! Persistence module
//!
//! Process-memory storage for session dialogs.

mod in_memory_session_store;

pub use in_memory_session_store::InMemorySessionStore;
