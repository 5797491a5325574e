//! Engine - the game state machine.
//!
//! Owns the board, the active piece, the score, and the random source;
//! nothing else mutates game state. Two states: active play and game over.
//! Game over is terminal - every operation becomes a no-op.

use crate::board::Board;
use crate::collision::{collides, piece_collides};
use crate::piece::Piece;
use crate::rng::{RandomSource, SimpleRng};
use crate::scoring::line_clear_points;
use crate::types::Command;

/// Outcome of the most recent lock, consumed by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockEvent {
    pub rows_cleared: u32,
    pub points: u32,
    /// Set when the follow-up spawn was blocked and the game ended.
    pub game_over: bool,
}

/// Complete game state and its operations.
pub struct Engine {
    board: Board,
    active: Option<Piece>,
    score: u32,
    game_over: bool,
    started: bool,
    source: Box<dyn RandomSource>,
    /// Last lock/clear event (consumed by the driver).
    last_event: Option<LockEvent>,
}

impl Engine {
    /// Create a new game seeding the default RNG.
    pub fn new(seed: u32) -> Self {
        Self::with_source(Box::new(SimpleRng::new(seed)))
    }

    /// Create a new game drawing shapes and colors from `source`.
    pub fn with_source(source: Box<dyn RandomSource>) -> Self {
        Self {
            board: Board::new(),
            active: None,
            score: 0,
            game_over: false,
            started: false,
            source,
            last_event: None,
        }
    }

    /// Start the game and spawn the first piece.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access. The engine is the sole mutator during play;
    /// this exists so tests and tools can arrange positions.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Take and clear the last lock/clear event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Apply an input command.
    pub fn apply(&mut self, cmd: Command) {
        match cmd {
            Command::MoveLeft => {
                self.move_left();
            }
            Command::MoveRight => {
                self.move_right();
            }
            Command::SoftDrop => self.soft_drop(),
            Command::Rotate => {
                self.rotate();
            }
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.shift(1)
    }

    fn shift(&mut self, dx: i8) -> bool {
        if self.game_over {
            return false;
        }
        let Some(mut piece) = self.active else {
            return false;
        };

        piece.x += dx;
        if piece_collides(&self.board, &piece) {
            return false;
        }

        self.active = Some(piece);
        true
    }

    /// Manual down-move; runs the same descend procedure as [`tick`].
    ///
    /// [`tick`]: Engine::tick
    pub fn soft_drop(&mut self) {
        self.descend();
    }

    /// One gravity step, invoked by the periodic driver.
    pub fn tick(&mut self) {
        self.descend();
    }

    fn descend(&mut self) {
        if self.game_over {
            return;
        }
        let Some(mut piece) = self.active else {
            return;
        };

        piece.y += 1;
        if piece_collides(&self.board, &piece) {
            // The increment is reverted: the piece locks at the last
            // position that passed collision testing.
            self.lock_active();
        } else {
            self.active = Some(piece);
        }
    }

    /// Try to rotate the active piece 90 degrees.
    ///
    /// The rotated candidate is committed only if it passes collision
    /// testing; a rejected rotation leaves the piece bit-exactly
    /// unchanged.
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(mut piece) = self.active else {
            return false;
        };

        let candidate = piece.shape().rotated();
        if collides(&self.board, &candidate, piece.x, piece.y) {
            return false;
        }

        piece.set_shape(candidate);
        self.active = Some(piece);
        true
    }

    /// Commit the active piece into the board, collapse and score full
    /// rows, then spawn the next piece.
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };
        self.board
            .lock_shape(piece.shape(), piece.x, piece.y, piece.color());

        let full = self.board.full_rows();
        let rows_cleared = full.len() as u32;
        let mut points = 0;
        if !full.is_empty() {
            self.board.collapse_rows(&full);
            points = line_clear_points(full.len());
            self.score += points;
        }

        let spawned = self.spawn();
        self.last_event = Some(LockEvent {
            rows_cleared,
            points,
            game_over: !spawned,
        });
    }

    /// Spawn a new random piece; returns false (and enters game over) if
    /// the spawn position is already blocked.
    fn spawn(&mut self) -> bool {
        let piece = Piece::spawn(self.source.as_mut());
        let blocked = piece_collides(&self.board, &piece);
        self.active = Some(piece);
        if blocked {
            self.game_over = true;
        }
        !blocked
    }
}
