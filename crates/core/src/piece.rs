//! The active falling block.

use crate::rng::RandomSource;
use crate::shape::{Shape, TEMPLATES};
use crate::types::{Color, BOARD_WIDTH};

/// The currently controllable falling block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    shape: Shape,
    /// Top-left anchor on the board; y grows downward.
    pub x: i8,
    pub y: i8,
    color: Color,
}

impl Piece {
    /// Draw a random template and color and center the piece at the top.
    pub fn spawn(source: &mut dyn RandomSource) -> Self {
        let shape = TEMPLATES[source.next_range(TEMPLATES.len() as u32) as usize];
        let color = Color::ALL[source.next_range(Color::ALL.len() as u32) as usize];
        Self {
            shape,
            x: (BOARD_WIDTH as i8 - shape.cols() as i8) / 2,
            y: 0,
            color,
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Absolute board cells covered by the piece, as (x, y) pairs.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled()
            .map(move |(i, j)| (self.x + j as i8, self.y + i as i8))
    }

    /// Commit a rotated shape. The engine collision-checks the candidate
    /// before calling this.
    pub(crate) fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceSource;

    #[test]
    fn spawn_centers_horizontally_at_top() {
        // Template 1 is the 2x2 square: x = (10 - 2) / 2 = 4.
        let mut source = SequenceSource::new(vec![1, 0]);
        let piece = Piece::spawn(&mut source);
        assert_eq!(piece.x, 4);
        assert_eq!(piece.y, 0);
        assert_eq!(piece.color(), Color::Red);

        // Template 4 is the 1x4 bar: x = (10 - 4) / 2 = 3.
        let mut source = SequenceSource::new(vec![4, 2]);
        let piece = Piece::spawn(&mut source);
        assert_eq!(piece.x, 3);
        assert_eq!(piece.y, 0);
        assert_eq!(piece.color(), Color::Blue);
    }

    #[test]
    fn cells_project_shape_onto_board() {
        // Square at (4, 0) covers (4,0) (5,0) (4,1) (5,1).
        let mut source = SequenceSource::new(vec![1, 0]);
        let piece = Piece::spawn(&mut source);
        let cells: Vec<(i8, i8)> = piece.cells().collect();
        assert_eq!(cells, vec![(4, 0), (5, 0), (4, 1), (5, 1)]);
    }
}
