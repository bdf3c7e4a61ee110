//! Domain entities - Objects with identity and lifecycle

mod turn;

pub use turn::{Turn, TurnRole};
