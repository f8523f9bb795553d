//! Audio cues derived from state transitions.
//!
//! The game never calls into audio directly. The runner diffs each pair of
//! consecutive snapshots with [`cues_between`] and hands the result to an
//! [`AudioSession`] it owns for the lifetime of the game loop.

pub mod cue;
pub mod session;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use cue::{cues_between, Cue, Cues};
pub use session::AudioSession;
