//! Shape library - the seven tetromino definitions.
//!
//! Shapes are square 0/1 matrices (2x2 for O, 3x3 for T/J/L/S/Z, 4x4 for I)
//! describing occupied cells relative to a top-left origin. The library hands
//! out independent copies: a piece rotates by replacing its own matrix, so
//! callers must never alias library state.

use arrayvec::ArrayVec;
use rand::Rng;

use crate::types::PieceColor;

/// Number of entries in the library.
pub const SHAPE_COUNT: usize = 7;

/// Largest matrix dimension in the library.
pub const MAX_SHAPE_SIZE: usize = 4;

type ShapeGrid = ArrayVec<ArrayVec<u8, MAX_SHAPE_SIZE>, MAX_SHAPE_SIZE>;

/// A square occupancy matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    grid: ShapeGrid,
}

impl Shape {
    fn from_matrix<const N: usize>(matrix: [[u8; N]; N]) -> Self {
        let grid = matrix
            .iter()
            .map(|row| row.iter().copied().collect())
            .collect();
        Self { grid }
    }

    /// Matrix dimension (shapes are always square).
    pub fn size(&self) -> usize {
        self.grid.len()
    }

    /// Whether the matrix cell at (row, col) is occupied.
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.grid
            .get(row)
            .and_then(|r| r.get(col))
            .is_some_and(|&v| v == 1)
    }

    /// Occupied cells as (row, col) offsets from the shape origin.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.grid.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &v)| v == 1)
                .map(move |(c, _)| (r, c))
        })
    }

    /// A copy rotated 90 degrees clockwise: `rotated[c][N-1-r] = self[r][c]`.
    pub fn rotated_cw(&self) -> Self {
        let n = self.size();
        let mut grid: ShapeGrid = (0..n).map(|_| (0..n).map(|_| 0u8).collect()).collect();
        for r in 0..n {
            for c in 0..n {
                if self.grid[r][c] == 1 {
                    grid[c][n - 1 - r] = 1;
                }
            }
        }
        Self { grid }
    }
}

/// The seven tetrominoes with their display colors, in library order.
pub fn definitions() -> [(Shape, PieceColor); SHAPE_COUNT] {
    [
        // T
        (
            Shape::from_matrix([[0, 1, 0], [1, 1, 1], [0, 0, 0]]),
            PieceColor::Purple,
        ),
        // O
        (
            Shape::from_matrix([[1, 1], [1, 1]]),
            PieceColor::Yellow,
        ),
        // I
        (
            Shape::from_matrix([
                [0, 1, 0, 0],
                [0, 1, 0, 0],
                [0, 1, 0, 0],
                [0, 1, 0, 0],
            ]),
            PieceColor::Cyan,
        ),
        // J
        (
            Shape::from_matrix([[1, 0, 0], [1, 1, 1], [0, 0, 0]]),
            PieceColor::Blue,
        ),
        // L
        (
            Shape::from_matrix([[0, 0, 1], [1, 1, 1], [0, 0, 0]]),
            PieceColor::Orange,
        ),
        // S
        (
            Shape::from_matrix([[1, 1, 0], [0, 1, 1], [0, 0, 0]]),
            PieceColor::Green,
        ),
        // Z
        (
            Shape::from_matrix([[0, 1, 1], [1, 1, 0], [0, 0, 0]]),
            PieceColor::Red,
        ),
    ]
}

/// Pick one library entry uniformly at random, returning an independent copy.
pub fn pick_random<R: Rng>(rng: &mut R) -> (Shape, PieceColor) {
    let defs = definitions();
    let (shape, color) = &defs[rng.gen_range(0..SHAPE_COUNT)];
    (shape.clone(), *color)
}
