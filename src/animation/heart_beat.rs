//! Beating heart
//!
//! Two beats per cycle followed by a rest. During a beat the large heart is
//! shown while the panel brightness ramps up, then the small heart while it
//! ramps back down to the baseline.

use embassy_time::Duration;

use super::Animation;
use crate::{
    MatrixDriver,
    config::MAX_BRIGHTNESS,
    display::MatrixDisplay,
    grid::BitGrid,
    random::Rng,
};

const FRAME_HOLD: Duration = Duration::from_millis(40);
const REST_HOLD: Duration = Duration::from_millis(600);

/// Brightness steps of each ramp
const RAMP_STEPS: u8 = 5;
const BEATS_PER_CYCLE: u8 = 2;
const BEAT_FRAMES: u8 = RAMP_STEPS * 2;
/// Beat frames plus one rest frame
const CYCLE_FRAMES: u8 = BEAT_FRAMES * BEATS_PER_CYCLE + 1;

const SMALL_HEART: BitGrid = BitGrid::from_rows([
    0b0000_0000,
    0b0000_0000,
    0b0010_0100,
    0b0111_1110,
    0b0111_1110,
    0b0011_1100,
    0b0001_1000,
    0b0000_0000,
]);

const LARGE_HEART: BitGrid = BitGrid::from_rows([
    0b0110_0110,
    0b1111_1111,
    0b1111_1111,
    0b1111_1111,
    0b0111_1110,
    0b0011_1100,
    0b0001_1000,
    0b0000_0000,
]);

#[derive(Debug, Clone, Default)]
pub struct HeartBeatAnimation {
    frame: u8,
}

impl HeartBeatAnimation {
    pub const fn new() -> Self {
        Self { frame: 0 }
    }

    /// Brightness of step `step` (0-based) of a ramp from `baseline` to the
    /// panel maximum
    #[allow(clippy::cast_possible_truncation)]
    fn ramp(baseline: u8, step: u8) -> u8 {
        let span = u16::from(MAX_BRIGHTNESS.saturating_sub(baseline));
        let gain = span * u16::from(step + 1) / u16::from(RAMP_STEPS);
        baseline + gain as u8
    }
}

impl Animation for HeartBeatAnimation {
    fn render_frame<D: MatrixDriver>(
        &mut self,
        display: &mut MatrixDisplay<D>,
        _rng: &mut Rng,
    ) -> Option<Duration> {
        let baseline = display.baseline_brightness();
        let hold = if self.frame < BEAT_FRAMES * BEATS_PER_CYCLE {
            let step = self.frame % BEAT_FRAMES;
            if step < RAMP_STEPS {
                display.set_brightness(Self::ramp(baseline, step));
                display.draw(&LARGE_HEART);
            } else {
                // Mirror of the rising ramp, the last step lands on baseline
                let down = BEAT_FRAMES - 1 - step;
                let level = if down == 0 {
                    baseline
                } else {
                    Self::ramp(baseline, down - 1)
                };
                display.set_brightness(level);
                display.draw(&SMALL_HEART);
            }
            FRAME_HOLD
        } else {
            display.set_brightness(baseline);
            display.draw(&SMALL_HEART);
            REST_HOLD
        };

        self.frame = (self.frame + 1) % CYCLE_FRAMES;
        Some(hold)
    }
}
