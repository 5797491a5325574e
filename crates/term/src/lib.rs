//! Terminal rendering layer.
//!
//! Renders the game into a plain framebuffer of styled character cells and
//! flushes it to the terminal with diffed writes. The view itself is pure
//! (no I/O) and unit-testable.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
