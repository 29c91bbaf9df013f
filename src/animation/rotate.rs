//! Rotating pattern
//!
//! Four fixed frames drawn in order, giving a quarter-turn illusion.
//! Strictly periodic, no randomness.

use embassy_time::Duration;

use super::Animation;
use crate::{MatrixDriver, display::MatrixDisplay, grid::BitGrid, random::Rng};

const FRAME_HOLD: Duration = Duration::from_millis(150);

const PATTERNS: [BitGrid; 4] = [
    BitGrid::from_rows([
        0b1111_0000,
        0b1111_0000,
        0b0000_0000,
        0b0000_0000,
        0b0000_0000,
        0b0000_0000,
        0b0000_1111,
        0b0000_1111,
    ]),
    BitGrid::from_rows([
        0b1100_0000,
        0b1110_0000,
        0b0111_0000,
        0b0011_1000,
        0b0001_1100,
        0b0000_1110,
        0b0000_0111,
        0b0000_0011,
    ]),
    BitGrid::from_rows([
        0b0000_1111,
        0b0000_1111,
        0b0000_0000,
        0b0000_0000,
        0b0000_0000,
        0b0000_0000,
        0b1111_0000,
        0b1111_0000,
    ]),
    BitGrid::from_rows([
        0b0000_0011,
        0b0000_0111,
        0b0000_1110,
        0b0001_1100,
        0b0011_1000,
        0b0111_0000,
        0b1110_0000,
        0b1100_0000,
    ]),
];

#[derive(Debug, Clone, Default)]
pub struct RotateAnimation {
    pattern_index: usize,
}

impl RotateAnimation {
    pub const fn new() -> Self {
        Self { pattern_index: 0 }
    }

    /// Index of the pattern drawn on the next frame
    pub const fn pattern_index(&self) -> usize {
        self.pattern_index
    }

    pub const fn pattern(index: usize) -> &'static BitGrid {
        &PATTERNS[index % PATTERNS.len()]
    }
}

impl Animation for RotateAnimation {
    fn render_frame<D: MatrixDriver>(
        &mut self,
        display: &mut MatrixDisplay<D>,
        _rng: &mut Rng,
    ) -> Option<Duration> {
        display.draw(&PATTERNS[self.pattern_index]);
        self.pattern_index = (self.pattern_index + 1) % PATTERNS.len();

        Some(FRAME_HOLD)
    }
}
