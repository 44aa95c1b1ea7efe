//! Board module - Tetris bitboard with settled and active layers
//!
//! The board is two arrays of row masks (one byte per row, bit 7 = column 0):
//!
//! - `dead`: blocks that have settled
//! - `active`: `dead` plus the falling piece, i.e. what the display shows
//!
//! [`Board::merge`] is the only way the falling piece gets into `active`, and
//! it is the single collision authority: movement, rotation, landing checks
//! and spawning all go through the same rules. `active` is always a superset
//! of `dead`; a rejected merge leaves `active == dead`.

use arrayvec::ArrayVec;

use crate::pieces::ShapeRows;
use crate::types::{column_bit, RowBitmap, BOARD_HEIGHT, BOARD_WIDTH, FULL_ROW};

/// Number of rows on the board
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Row indices found full in one pass, top to bottom
pub type FullRows = ArrayVec<u8, HEIGHT>;

/// Tetris board - settled blocks and the composed picture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dead: RowBitmap,
    active: RowBitmap,
}

/// Place one piece row at column offset `x`.
///
/// Returns `None` if any set bit would land outside the board.
fn place_row(bits: u8, x: i8) -> Option<u8> {
    let mut placed = 0u8;
    for c in 0..8u8 {
        if bits & (0x80 >> c) == 0 {
            continue;
        }
        let col = c as i16 + x as i16;
        if col < 0 || col >= BOARD_WIDTH as i16 {
            return None;
        }
        placed |= column_bit(col as u8);
    }
    Some(placed)
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            dead: [0; HEIGHT],
            active: [0; HEIGHT],
        }
    }

    /// Compose `dead` with a piece at `(x, y)` without touching the board.
    ///
    /// Piece rows above the top edge are ignored; rows below the bottom edge,
    /// columns outside the board and overlaps with `dead` reject the placement.
    pub fn overlay(&self, rows: ShapeRows, x: i8, y: i8) -> Option<RowBitmap> {
        let mut out = self.dead;
        for (r, &bits) in rows.iter().enumerate() {
            if bits == 0 {
                continue;
            }
            let row = y as i16 + r as i16;
            if row < 0 {
                continue;
            }
            if row >= HEIGHT as i16 {
                return None;
            }
            let placed = place_row(bits, x)?;
            let row = row as usize;
            if self.dead[row] & placed != 0 {
                return None;
            }
            out[row] |= placed;
        }
        Some(out)
    }

    /// Rebuild `active` as `dead` plus the piece at `(x, y)`.
    ///
    /// On failure `active` is left equal to `dead` and false is returned.
    pub fn merge(&mut self, rows: ShapeRows, x: i8, y: i8) -> bool {
        match self.overlay(rows, x, y) {
            Some(composed) => {
                self.active = composed;
                true
            }
            None => {
                self.active = self.dead;
                false
            }
        }
    }

    /// True if the piece at `(x, y)` passes the merge rules
    pub fn fits(&self, rows: ShapeRows, x: i8, y: i8) -> bool {
        self.overlay(rows, x, y).is_some()
    }

    /// Settle whatever is in `active`.
    pub fn commit(&mut self) {
        self.dead = self.active;
    }

    /// Drop the falling piece from the picture.
    pub fn discard_active(&mut self) {
        self.active = self.dead;
    }

    /// Check if a settled row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.dead.get(y).is_some_and(|&row| row == FULL_ROW)
    }

    /// Settled rows that are completely filled, top to bottom
    pub fn full_rows(&self) -> FullRows {
        let mut rows = FullRows::new();
        for (y, &row) in self.dead.iter().enumerate() {
            if row == FULL_ROW {
                rows.push(y as u8);
            }
        }
        rows
    }

    /// Remove every full settled row, shifting the rows above down.
    ///
    /// Returns the rows that were removed (pre-shift indices, top to bottom).
    /// `active` is reset to the new `dead`.
    pub fn clear_lines(&mut self) -> FullRows {
        let cleared = self.full_rows();
        if cleared.is_empty() {
            return cleared;
        }

        // Two-pointer compaction from the bottom up.
        let mut write_y = HEIGHT;
        for read_y in (0..HEIGHT).rev() {
            if self.dead[read_y] == FULL_ROW {
                continue;
            }
            write_y -= 1;
            self.dead[write_y] = self.dead[read_y];
        }
        for row in &mut self.dead[..write_y] {
            *row = 0;
        }

        self.active = self.dead;
        cleared
    }

    /// Overwrite a settled row (for scripted setups and tests).
    ///
    /// `active` is rebuilt from `dead`, dropping any falling piece.
    pub fn set_row(&mut self, y: usize, bits: u8) -> bool {
        match self.dead.get_mut(y) {
            Some(row) => {
                *row = bits;
                self.active = self.dead;
                true
            }
            None => false,
        }
    }

    pub fn dead(&self) -> &RowBitmap {
        &self.dead
    }

    pub fn active(&self) -> &RowBitmap {
        &self.active
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.dead = [0; HEIGHT];
        self.active = [0; HEIGHT];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
