//! Board module - manages the game grid
//!
//! The board is a 20x10 grid where each cell is empty or filled with a piece
//! kind (used for color). Flat row-major storage, no allocation.
//! Coordinates are (row, col): row 0 is the top, col 0 the left edge.

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const ROWS: usize = BOARD_HEIGHT as usize;
const COLS: usize = BOARD_WIDTH as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = ROWS * COLS;

/// Row indices removed by one clear, bottom to top
pub type ClearedRows = ArrayVec<usize, ROWS>;

/// The game board - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_HEIGHT as i8 || col < 0 || col >= BOARD_WIDTH as i8 {
            return None;
        }
        Some((row as usize) * COLS + (col as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Cell at (row, col), or None when out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Overwrite a cell. Returns false if out of bounds.
    ///
    /// Play only fills cells through [`Board::lock_piece`]; this exists for
    /// setting up positions.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty
    pub fn is_empty_at(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// In bounds and filled
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Whether every cell of `row` is filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= ROWS {
            return false;
        }
        let start = row * COLS;
        self.cells[start..start + COLS].iter().all(|cell| cell.is_some())
    }

    /// Collision test: every filled cell of `shape` placed with its origin at
    /// (row, col) lands on an in-bounds, empty board cell.
    pub fn fits(&self, shape: &Shape, row: i8, col: i8) -> bool {
        shape
            .cells()
            .iter()
            .all(|&(dr, dc)| self.is_empty_at(row + dr, col + dc))
    }

    /// Stamp `shape` into the board with its origin at (row, col).
    ///
    /// Returns false and leaves the board untouched if the shape does not fit.
    pub fn lock_piece(&mut self, shape: &Shape, row: i8, col: i8, kind: PieceKind) -> bool {
        if !self.fits(shape, row, col) {
            return false;
        }

        for (dr, dc) in shape.cells() {
            self.set(row + dr, col + dc, Some(kind));
        }

        true
    }

    /// Remove every full row at once and drop the rows above to fill the gap.
    ///
    /// Remaining rows keep their relative order; as many empty rows as were
    /// removed appear at the top. Returns the removed row indices (bottom to top).
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut write_row = ROWS;

        for read_row in (0..ROWS).rev() {
            if self.is_row_full(read_row) {
                cleared.push(read_row);
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * COLS;
                    self.cells.copy_within(src..src + COLS, write_row * COLS);
                }
            }
        }

        self.cells[..write_row * COLS].fill(None);
        cleared
    }

    /// The underlying row-major cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row as a slice, top row first
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= ROWS {
            return None;
        }
        let start = row * COLS;
        Some(&self.cells[start..start + COLS])
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
