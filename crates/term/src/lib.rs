//! Terminal presentation layer.
//!
//! Renders a game state into a simple framebuffer, then flushes that
//! framebuffer to the terminal. Rendering is pure and unit-testable; only
//! [`TerminalRenderer`] touches the terminal.
//!
//! - Board cells are 2 characters wide to offset the glyph aspect ratio
//! - The ghost piece is a presentation concern and lives only here
//! - The line-clear flash is driven by the caller's clock through [`Effects`]

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{Effects, GameView, Viewport};
pub use renderer::TerminalRenderer;
