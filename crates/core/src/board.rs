//! Board module - manages the game grid
//!
//! The board is a 14x24 grid where each cell is either empty or filled.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..13 (left to right), y ranges 0..23 (top to bottom)

use arrayvec::ArrayVec;

use crate::pieces::get_shape;
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, PIECE_BOX};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board - 14 columns x 24 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of occupancy flags, row-major order (y * WIDTH + x)
    cells: [bool; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [false; BOARD_SIZE],
        }
    }

    /// Build a board from text rows, aligned to the bottom of the grid.
    ///
    /// `#` or `X` marks a filled cell; anything else is empty. Rows longer than the
    /// board are truncated and extra rows at the top are ignored.
    ///
    /// ```
    /// use tick_tetris_core::Board;
    ///
    /// let board = Board::from_rows(&["#............."]);
    /// assert!(board.is_filled(0, 23));
    /// assert_eq!(board.filled_count(), 1);
    /// ```
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let height = BOARD_HEIGHT as usize;
        let skip = rows.len().saturating_sub(height);
        let top = height - (rows.len() - skip);
        for (i, row) in rows.iter().skip(skip).enumerate() {
            let y = (top + i) as i8;
            for (x, ch) in row.chars().take(BOARD_WIDTH as usize).enumerate() {
                if ch == '#' || ch == 'X' {
                    board.set(x as i8, y, true);
                }
            }
        }
        board
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<bool> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, filled: bool) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = filled;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_open(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(false))
    }

    /// Check if position is within bounds and filled
    pub fn is_filled(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(true))
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).is_none()
    }

    /// Whether `kind` at `rotation` anchored at (x, y) has every filled cell on an
    /// in-bounds, empty board cell.
    pub fn fits(&self, kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> bool {
        get_shape(kind, rotation)
            .iter()
            .all(|&(dx, dy)| self.is_open(x + dx, y + dy))
    }

    /// Fill every cell of the piece.
    ///
    /// The caller must have checked [`Board::fits`] for this placement; it is only
    /// re-checked in debug builds.
    pub fn lock(&mut self, kind: PieceKind, rotation: Rotation, x: i8, y: i8) {
        debug_assert!(
            self.fits(kind, rotation, x, y),
            "lock of {:?}/{:?} at ({}, {}) does not fit",
            kind,
            rotation,
            x,
            y
        );
        for (dx, dy) in get_shape(kind, rotation) {
            self.set(x + dx, y + dy, true);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|&cell| cell)
    }

    /// Clear a row and shift all rows above down
    /// Returns the number of lines cleared (1 or 0)
    pub fn clear_row(&mut self, y: usize) -> usize {
        if y >= BOARD_HEIGHT as usize {
            return 0;
        }

        let width = BOARD_WIDTH as usize;

        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            let dst_start = row * width;
            self.cells
                .copy_within(src_start..src_start + width, dst_start);
        }

        self.cells[..width].fill(false);

        1
    }

    /// Clear full rows among the four rows starting at `top`, i.e. the span a piece
    /// anchored at `top` can occupy. Returns the cleared row indices, top to bottom.
    ///
    /// Rows are handled top to bottom: shifting a cleared row only moves rows above
    /// it, so the rows still to be scanned keep their indices.
    pub fn clear_lines_in_span(&mut self, top: i8) -> ArrayVec<usize, 4> {
        let mut cleared = ArrayVec::new();
        let first = top.max(0) as usize;
        let last = (top as isize + PIECE_BOX as isize).clamp(0, BOARD_HEIGHT as isize) as usize;

        for y in first..last {
            if self.is_row_full(y) {
                self.clear_row(y);
                cleared.push(y);
            }
        }

        cleared
    }

    /// Clear full rows in the span of a piece anchored at row `top`.
    /// Returns how many rows were removed (0-4).
    pub fn clear_lines(&mut self, top: i8) -> usize {
        self.clear_lines_in_span(top).len()
    }

    /// Number of filled cells on the whole board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Export occupancy as a `0`/`1` grid, row-major.
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * width;
            for (x, v) in row.iter_mut().enumerate() {
                *v = self.cells[start + x] as u8;
            }
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Convert to text rows (`#` filled, `.` empty), top to bottom
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(BOARD_WIDTH as usize)
            .map(|row| row.iter().map(|&c| if c { '#' } else { '.' }).collect())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(13, 0), Some(13));
        assert_eq!(Board::index(0, 1), Some(14));
        assert_eq!(Board::index(13, 23), Some(335));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(14, 0), None);
        assert_eq!(Board::index(0, 24), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(0, 0, true);
        board.set(5, 10, true);

        assert_eq!(board.get(0, 0), Some(true));
        assert_eq!(board.get(5, 10), Some(true));

        assert!(board.cells[0]);
        assert!(board.cells[10 * 14 + 5]);
    }

    #[test]
    fn test_from_rows_roundtrip() {
        let board = Board::from_rows(&["#.............", "##############"]);
        let rows = board.to_rows();
        assert_eq!(rows.len(), 24);
        assert_eq!(rows[22], "#.............");
        assert_eq!(rows[23], "##############");
        assert_eq!(rows[0], "..............");
    }

    #[test]
    fn test_clear_span_is_clamped_to_board() {
        let mut board = Board::from_rows(&["##############"]);
        // Anchor near the floor: span 22..26 clamps to 22..24.
        assert_eq!(board.clear_lines(22), 1);
        assert_eq!(board.filled_count(), 0);
        // Span entirely below the board scans nothing.
        assert_eq!(board.clear_lines(30), 0);
    }

    #[test]
    fn test_write_u8_grid() {
        let mut board = Board::new();
        board.set(3, 4, true);
        let mut grid = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        board.write_u8_grid(&mut grid);
        assert_eq!(grid[4][3], 1);
        assert_eq!(grid.iter().flatten().filter(|&&v| v == 1).count(), 1);
    }
}
