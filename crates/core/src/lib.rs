//! Core game logic - pure, deterministic, and testable.
//!
//! This crate contains all the game rules and state management. It has
//! zero dependencies on UI, input, or I/O:
//!
//! - **Deterministic**: the random source is injected, so the same
//!   sequence produces identical games
//! - **Testable**: every rule is exercised without a terminal
//! - **Fast**: zero-allocation hot paths for descend and row collapse
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with row-completion detection and collapse
//! - [`shape`]: the seven block templates and the rotation transform
//! - [`piece`]: the active falling block
//! - [`collision`]: pure overlap/bounds predicates
//! - [`engine`]: the state machine tying it all together
//! - [`rng`]: injected random source for shape and color selection
//! - [`scoring`]: points per simultaneous row clear
//!
//! # Example
//!
//! ```
//! use blockfall_core::Engine;
//!
//! let mut engine = Engine::new(12345);
//! engine.start();
//!
//! engine.move_left();
//! engine.rotate();
//! engine.tick();
//!
//! assert!(!engine.game_over());
//! ```

pub mod board;
pub mod collision;
pub mod engine;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shape;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::{collides, piece_collides};
pub use engine::{Engine, LockEvent};
pub use piece::Piece;
pub use rng::{RandomSource, SequenceSource, SimpleRng};
pub use scoring::line_clear_points;
pub use shape::{Shape, TEMPLATES};
