//! Board module - the fixed playing grid.
//!
//! A flat row-major `Vec` of cells, sized once at construction. Coordinates
//! are `(x, y)` with x growing rightward and y growing downward; signed
//! coordinates let callers probe positions above or beside the grid.
//! Pieces spawn with part of their matrix above row 0, so placement checks
//! treat negative rows as unoccupied space.

use crate::core::shapes::Shape;
use crate::types::{Cell, PieceColor};

/// The playing grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Row-major cells (`y * width + x`).
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board with the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// Cell at (x, y), or `None` when out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set the cell at (x, y). Out-of-bounds writes are dropped and report
    /// `false`.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether `shape` can occupy the board with its origin at (x, y).
    ///
    /// Every occupied shape cell must land inside the horizontal bounds and
    /// above the floor. Rows below 0 are exempt from collision checking:
    /// a freshly spawned piece may overhang the top of the grid. Returns on
    /// the first violation; never mutates.
    pub fn is_valid_placement(&self, shape: &Shape, x: i32, y: i32) -> bool {
        for (r, c) in shape.cells() {
            let col = x + c as i32;
            let row = y + r as i32;
            if col < 0 || col >= self.width as i32 || row >= self.height as i32 {
                return false;
            }
            if row < 0 {
                continue;
            }
            if matches!(self.get(col, row), Some(Some(_))) {
                return false;
            }
        }
        true
    }

    /// Commit `shape` into the grid at (x, y) with the given color.
    ///
    /// Cells above row 0 are silently dropped; validity is the caller's
    /// responsibility (the session checks before every lock).
    pub fn lock(&mut self, shape: &Shape, x: i32, y: i32, color: PieceColor) {
        for (r, c) in shape.cells() {
            let row = y + r as i32;
            if row >= 0 {
                self.set(x + c as i32, row, Some(color));
            }
        }
    }

    /// Whether every cell in row `y` is filled.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height {
            return false;
        }
        let start = y * self.width;
        self.cells[start..start + self.width]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Remove every full row, shifting the rows above down and refilling the
    /// top with empty rows. Returns the number of rows cleared.
    ///
    /// Single bottom-to-top compaction pass: full rows are skipped while the
    /// surviving rows are written downward, so a row sliding into a vacated
    /// index is never re-examined incorrectly. Handles any number of
    /// simultaneous full rows.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut write_y = self.height;

        for read_y in (0..self.height).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * self.width;
                    let dst = write_y * self.width;
                    self.cells.copy_within(src..src + self.width, dst);
                }
            }
        }

        for cell in &mut self.cells[..write_y * self.width] {
            *cell = None;
        }

        cleared
    }

    /// Empty the whole grid.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Read-only view of the raw cells (row-major).
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shapes::definitions;

    fn square() -> Shape {
        let (shape, _) = definitions().into_iter().nth(1).unwrap();
        shape
    }

    #[test]
    fn test_index_bounds() {
        let board = Board::new(10, 20);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_set_then_get() {
        let mut board = Board::new(10, 20);
        assert!(board.set(5, 10, Some(PieceColor::Cyan)));
        assert_eq!(board.get(5, 10), Some(Some(PieceColor::Cyan)));
        assert!(board.set(5, 10, None));
        assert_eq!(board.get(5, 10), Some(None));
    }

    #[test]
    fn test_negative_rows_are_free_space() {
        let board = Board::new(10, 20);
        let shape = square();
        // Origin above the grid: the overhanging rows are exempt.
        assert!(board.is_valid_placement(&shape, 4, -1));
        // But horizontal bounds still apply up there.
        assert!(!board.is_valid_placement(&shape, -1, -1));
        assert!(!board.is_valid_placement(&shape, 9, -1));
    }

    #[test]
    fn test_lock_drops_rows_above_grid() {
        let mut board = Board::new(10, 20);
        let shape = square();
        board.lock(&shape, 4, -1, PieceColor::Yellow);
        // Only the bottom row of the 2x2 landed on the grid.
        assert_eq!(board.get(4, 0), Some(Some(PieceColor::Yellow)));
        assert_eq!(board.get(5, 0), Some(Some(PieceColor::Yellow)));
        assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 2);
    }

    #[test]
    fn test_clear_full_rows_compacts_in_one_pass() {
        let mut board = Board::new(10, 20);
        // Adjacent full rows 18 and 19, marker above them.
        for x in 0..10 {
            board.set(x, 18, Some(PieceColor::Red));
            board.set(x, 19, Some(PieceColor::Green));
        }
        board.set(0, 17, Some(PieceColor::Blue));

        assert_eq!(board.clear_full_rows(), 2);
        // The marker slid down into the vacated bottom row.
        assert_eq!(board.get(0, 19), Some(Some(PieceColor::Blue)));
        assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 1);
    }
}
