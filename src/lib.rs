//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates as `blockfall::{core,input,term,audio,types}`
//! so the runner, integration tests and benches share one import surface.

pub use blockfall_audio as audio;
pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
