//! Core types shared across the application.
//! This module contains pure data types with no external dependencies.

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity period (milliseconds): the driver descends the piece once per
/// interval. Fixed; there is no level-based speed-up.
pub const DROP_INTERVAL_MS: u64 = 500;

/// Commands accepted by the engine, as produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
}

/// Block colors. A piece's color is drawn independently of its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
    Orange,
}

impl Color {
    /// All colors, in cell-tag order.
    pub const ALL: [Color; 7] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Magenta,
        Color::Cyan,
        Color::Orange,
    ];

    /// Stable cell tag in `1..=7`; `0` marks an empty cell.
    pub fn index(self) -> u8 {
        match self {
            Color::Red => 1,
            Color::Green => 2,
            Color::Blue => 3,
            Color::Yellow => 4,
            Color::Magenta => 5,
            Color::Cyan => 6,
            Color::Orange => 7,
        }
    }

    /// Parse a cell tag back into a color.
    pub fn from_index(idx: u8) -> Option<Self> {
        match idx {
            1..=7 => Some(Self::ALL[(idx - 1) as usize]),
            _ => None,
        }
    }
}

/// Cell on the board (`None` = empty, `Some` = locked block color).
pub type Cell = Option<Color>;
