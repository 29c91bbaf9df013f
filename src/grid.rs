//! 8x8 bit grid
//!
//! A frame is stored as eight row bytes. Bit `c` of row byte `r` is the pixel
//! at `(r, c)`. Indices outside `0..8` are a programming error and panic.

/// Number of rows and columns of the panel
pub const SIZE: u8 = 8;

/// Highest valid row or column index
pub const MAX_INDEX: u8 = SIZE - 1;

/// Binary 8x8 frame buffer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitGrid {
    rows: [u8; SIZE as usize],
}

impl BitGrid {
    /// Create an empty grid
    pub const fn new() -> Self {
        Self {
            rows: [0; SIZE as usize],
        }
    }

    /// Create a grid from row bytes
    pub const fn from_rows(rows: [u8; SIZE as usize]) -> Self {
        Self { rows }
    }

    /// Create a grid with every pixel lit
    pub const fn filled() -> Self {
        Self {
            rows: [0xFF; SIZE as usize],
        }
    }

    /// Set a single pixel
    pub fn set(&mut self, row: u8, col: u8, on: bool) {
        check(row, col);
        let mask = 1 << col;
        if on {
            self.rows[row as usize] |= mask;
        } else {
            self.rows[row as usize] &= !mask;
        }
    }

    /// Read a single pixel
    pub fn get(&self, row: u8, col: u8) -> bool {
        check(row, col);
        self.rows[row as usize] & (1 << col) != 0
    }

    /// Replace a whole row, bit `i` is column `i`
    pub fn set_row(&mut self, row: u8, bits: u8) {
        check(row, 0);
        self.rows[row as usize] = bits;
    }

    /// Read a whole row
    pub fn row(&self, row: u8) -> u8 {
        check(row, 0);
        self.rows[row as usize]
    }

    pub const fn rows(&self) -> [u8; SIZE as usize] {
        self.rows
    }

    /// Switch every pixel off
    pub fn clear(&mut self) {
        self.rows = [0; SIZE as usize];
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| *row == 0)
    }

    /// Number of lit pixels
    pub fn count(&self) -> u32 {
        self.rows.iter().map(|row| row.count_ones()).sum()
    }

    /// Shift every row down by one and insert `top` as the new first row.
    ///
    /// The bottom row falls off the grid.
    pub fn shift_down(&mut self, top: u8) {
        self.rows.copy_within(0..MAX_INDEX as usize, 1);
        self.rows[0] = top;
    }
}

/// Convert signed coordinates to a grid cell, `None` when off the panel
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn cell(row: i32, col: i32) -> Option<(u8, u8)> {
    let range = 0..i32::from(SIZE);
    if range.contains(&row) && range.contains(&col) {
        Some((row as u8, col as u8))
    } else {
        None
    }
}

#[inline]
fn check(row: u8, col: u8) {
    assert!(
        row < SIZE && col < SIZE,
        "pixel ({row}, {col}) is outside of the 8x8 grid"
    );
}
