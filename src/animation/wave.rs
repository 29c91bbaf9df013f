//! Sine wave bars
//!
//! Every column is a bar rising from the bottom row. Bar heights follow a
//! sine that slides one column per frame and repeats every eight frames.

use embassy_time::Duration;

use super::Animation;
use crate::{
    MatrixDriver,
    display::MatrixDisplay,
    grid::{BitGrid, MAX_INDEX, SIZE},
    random::Rng,
};

const FRAME_HOLD: Duration = Duration::from_millis(100);
const CYCLE_STEPS: u8 = 8;
const MID_HEIGHT: f32 = 4.0;
const AMPLITUDE: f32 = 3.0;
const FREQUENCY: f32 = 0.8;

#[derive(Debug, Clone, Default)]
pub struct WaveAnimation {
    offset: u8,
}

impl WaveAnimation {
    pub const fn new() -> Self {
        Self { offset: 0 }
    }

    pub const fn offset(&self) -> u8 {
        self.offset
    }

    /// Height of the bar in `col` for the given phase offset, in `0..=7`
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn column_height(col: u8, offset: u8) -> u8 {
        let phase = f32::from(col + offset) * FREQUENCY;
        let height = (MID_HEIGHT + AMPLITUDE * libm::sinf(phase)) as i32;
        height.clamp(0, i32::from(MAX_INDEX)) as u8
    }

    /// Frame for the given phase offset
    pub fn frame(offset: u8) -> BitGrid {
        let mut frame = BitGrid::new();
        for col in 0..SIZE {
            let height = Self::column_height(col, offset);
            for level in 0..=height {
                frame.set(MAX_INDEX - level, col, true);
            }
        }
        frame
    }
}

impl Animation for WaveAnimation {
    fn render_frame<D: MatrixDriver>(
        &mut self,
        display: &mut MatrixDisplay<D>,
        _rng: &mut Rng,
    ) -> Option<Duration> {
        display.draw(&Self::frame(self.offset));
        self.offset = (self.offset + 1) % CYCLE_STEPS;

        Some(FRAME_HOLD)
    }
}
