//! Piece module - the active falling tetromino.
//!
//! A piece owns its shape matrix outright; rotation swaps the matrix for a
//! rotated copy rather than tracking a rotation index, which keeps the
//! board-side placement check a single shape-at-position query.

use crate::core::board::Board;
use crate::core::shapes::Shape;
use crate::types::PieceColor;

/// The active falling piece.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    shape: Shape,
    color: PieceColor,
    x: i32,
    y: i32,
}

impl Piece {
    /// Place a new piece at the top of the board, horizontally centered:
    /// `x = cols / 2 - size / 2`. No validity check happens here; the
    /// session decides whether a blocked spawn ends the game.
    pub fn spawn(shape: Shape, color: PieceColor, board_width: usize) -> Self {
        let x = (board_width / 2) as i32 - (shape.size() / 2) as i32;
        Self {
            shape,
            color,
            x,
            y: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn at(shape: Shape, color: PieceColor, x: i32, y: i32) -> Self {
        Self { shape, color, x, y }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn color(&self) -> PieceColor {
        self.color
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Occupied cells in board coordinates. Rows above the grid come out
    /// negative; the renderer and lock path skip them.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .cells()
            .map(|(r, c)| (self.x + c as i32, self.y + r as i32))
    }

    /// Attempt to shift by (dx, dy). Applies the offset and returns `true`
    /// when the target placement is valid, otherwise leaves the piece
    /// untouched.
    pub fn try_move(&mut self, board: &Board, dx: i32, dy: i32) -> bool {
        if board.is_valid_placement(&self.shape, self.x + dx, self.y + dy) {
            self.x += dx;
            self.y += dy;
            true
        } else {
            false
        }
    }

    /// Attempt a 90-degree clockwise rotation in place.
    ///
    /// No wall kicks: if the rotated matrix does not fit at the current
    /// position the rotation simply fails.
    pub fn try_rotate(&mut self, board: &Board) -> bool {
        let rotated = self.shape.rotated_cw();
        if board.is_valid_placement(&rotated, self.x, self.y) {
            self.shape = rotated;
            true
        } else {
            false
        }
    }
}
