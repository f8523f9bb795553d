//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every game rule and nothing else. It has **no
//! dependencies** on terminals, audio or clocks:
//!
//! - **Pure**: [`reduce`] maps `(state, action)` to a new state and leaves its
//!   input alone
//! - **Deterministic**: piece kinds come from an injected [`PieceSource`], so a
//!   fixed sequence or a seed reproduces a game exactly
//! - **Portable**: the same reducer drives the terminal runner, the tests and
//!   the benches
//!
//! # Module Structure
//!
//! - [`board`]: 20x10 grid with the collision test and line clearing
//! - [`pieces`]: static shape bitmaps per kind and rotation
//! - [`scoring`]: line-clear points, level and gravity interval
//! - [`rng`]: the [`PieceSource`] seam and its uniform and scripted sources
//! - [`game_state`]: [`GameState`] and the [`reduce`] function
//!
//! # Rules
//!
//! - Uniform, independent piece draws (no bag; repeats happen)
//! - Rotation in place with no wall kicks: a blocked rotation is ignored
//! - A piece locks when gravity or a soft drop cannot move it further, or on hard drop
//! - Full rows vanish together; 1-4 rows score 100/300/500/800
//! - Level = lines / 10 + 1; gravity speeds up 15% per level down to 100ms
//! - Hold once per lock
//! - The game ends only when a new piece cannot spawn
//!
//! # Example
//!
//! ```
//! use blockfall_core::{reduce, GameState, SequenceSource};
//! use blockfall_types::{GameAction, PieceKind, Status};
//!
//! let mut source = SequenceSource::new([PieceKind::I, PieceKind::T]);
//! let state = GameState::new();
//! let state = reduce(&state, GameAction::Start, &mut source);
//! assert_eq!(state.status(), Status::Playing);
//!
//! let state = reduce(&state, GameAction::HardDrop, &mut source);
//! assert!(state.last_locked());
//! assert_eq!(state.active().map(|p| p.kind), Some(PieceKind::T));
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;

pub use blockfall_types as types;

pub use board::Board;
pub use game_state::{reduce, GameState, Piece};
pub use pieces::{get_shape, shape, Shape};
pub use rng::{PieceSource, SequenceSource, UniformSource};
pub use scoring::{fall_delay_ms, level_for_lines, line_score};
