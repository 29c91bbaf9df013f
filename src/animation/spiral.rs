//! Spiral comet
//!
//! Walks a centre-outward path covering all 64 cells and draws the last
//! eight cells of the walk, so a short tail chases the head around the spiral.

use embassy_time::Duration;

use super::Animation;
use crate::{MatrixDriver, display::MatrixDisplay, random::Rng};

const FRAME_HOLD: Duration = Duration::from_millis(30);
const TAIL_LENGTH: usize = 8;

#[rustfmt::skip]
const PATH: [(u8, u8); 64] = [
    (3, 3), (3, 4), (4, 4), (4, 3), (4, 2), (3, 2), (2, 2), (2, 3),
    (2, 4), (2, 5), (3, 5), (4, 5), (5, 5), (5, 4), (5, 3), (5, 2),
    (5, 1), (4, 1), (3, 1), (2, 1), (1, 1), (1, 2), (1, 3), (1, 4),
    (1, 5), (1, 6), (2, 6), (3, 6), (4, 6), (5, 6), (6, 6), (6, 5),
    (6, 4), (6, 3), (6, 2), (6, 1), (6, 0), (5, 0), (4, 0), (3, 0),
    (2, 0), (1, 0), (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5),
    (0, 6), (0, 7), (1, 7), (2, 7), (3, 7), (4, 7), (5, 7), (6, 7),
    (7, 7), (7, 6), (7, 5), (7, 4), (7, 3), (7, 2), (7, 1), (7, 0),
];

#[derive(Debug, Clone, Default)]
pub struct SpiralAnimation {
    step: usize,
}

impl SpiralAnimation {
    pub const fn new() -> Self {
        Self { step: 0 }
    }

    /// Index of the path cell drawn as the head on the next frame
    pub const fn step(&self) -> usize {
        self.step
    }
}

impl Animation for SpiralAnimation {
    fn render_frame<D: MatrixDriver>(
        &mut self,
        display: &mut MatrixDisplay<D>,
        _rng: &mut Rng,
    ) -> Option<Duration> {
        display.clear();
        let first = (self.step + 1).saturating_sub(TAIL_LENGTH);
        for &(row, col) in &PATH[first..=self.step] {
            display.set_pixel(row, col, true);
        }

        self.step = (self.step + 1) % PATH.len();
        Some(FRAME_HOLD)
    }
}
