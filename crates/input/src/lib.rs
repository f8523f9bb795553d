//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. It knows
//! nothing about timing or game rules beyond which actions make sense to offer
//! in the current [`crate::types::Status`]; the reducer still has the final say.

pub mod map;

pub use blockfall_types as types;

pub use map::{map_key, should_quit};
