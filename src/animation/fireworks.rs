//! Fireworks
//!
//! Each cycle launches a rocket up to a random centre, bursts it into a ring
//! that grows step by step, then fades the accumulated burst out.

use core::f32::consts::PI;

use embassy_time::Duration;

use super::Animation;
use crate::{
    MatrixDriver,
    display::MatrixDisplay,
    grid::{BitGrid, MAX_INDEX, cell},
    random::Rng,
};

const LAUNCH_HOLD: Duration = Duration::from_millis(50);
const BURST_HOLD: Duration = Duration::from_millis(80);
const FADE_HOLD: Duration = Duration::from_millis(90);

const RADIUS_STEP: f32 = 0.75;
const MAX_RADIUS: f32 = 3.0;
const BURST_STEPS: u8 = 5;
const ANGLE_SAMPLES: u8 = 12;
const FADE_STEPS: u8 = 6;

// Centre margins keep most of the burst on the panel
const CENTER_ROWS: (i32, i32) = (2, 5);
const CENTER_COLS: (i32, i32) = (2, 6);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireworksPhase {
    /// Rocket pixel at the given row climbing towards the centre
    Launch { row: u8 },
    /// Burst ring at the given radius step
    Burst { step: u8 },
    /// Fade step of the accumulated burst
    Fade { step: u8 },
}

#[derive(Debug, Clone)]
pub struct FireworksAnimation {
    center: (u8, u8),
    phase: FireworksPhase,
    mask: BitGrid,
}

impl FireworksAnimation {
    pub fn new(rng: &mut Rng) -> Self {
        Self {
            center: random_center(rng),
            phase: FireworksPhase::Launch { row: MAX_INDEX },
            mask: BitGrid::new(),
        }
    }

    pub const fn center(&self) -> (u8, u8) {
        self.center
    }

    pub const fn phase(&self) -> FireworksPhase {
        self.phase
    }

    pub const fn mask(&self) -> &BitGrid {
        &self.mask
    }

    /// Radius of a burst step, clamped to the largest ring
    fn radius(step: u8) -> f32 {
        (f32::from(step) * RADIUS_STEP).min(MAX_RADIUS)
    }

    /// Add the ring of the given radius to the burst mask, clipping points
    /// that fall off the panel
    #[allow(clippy::cast_possible_truncation)]
    fn accumulate_ring(&mut self, radius: f32) {
        let (row, col) = self.center;
        for sample in 0..ANGLE_SAMPLES {
            let angle = f32::from(sample) * 2.0 * PI / f32::from(ANGLE_SAMPLES);
            let r = libm::roundf(f32::from(row) + radius * libm::sinf(angle)) as i32;
            let c = libm::roundf(f32::from(col) + radius * libm::cosf(angle)) as i32;
            if let Some((r, c)) = cell(r, c) {
                self.mask.set(r, c, true);
            }
        }
    }

    fn restart(&mut self, rng: &mut Rng) {
        self.center = random_center(rng);
        self.mask.clear();
        self.phase = FireworksPhase::Launch { row: MAX_INDEX };
    }
}

#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn random_center(rng: &mut Rng) -> (u8, u8) {
    let row = rng.range(CENTER_ROWS.0, CENTER_ROWS.1) as u8;
    let col = rng.range(CENTER_COLS.0, CENTER_COLS.1) as u8;
    (row, col)
}

impl Animation for FireworksAnimation {
    fn render_frame<D: MatrixDriver>(
        &mut self,
        display: &mut MatrixDisplay<D>,
        rng: &mut Rng,
    ) -> Option<Duration> {
        let (center_row, center_col) = self.center;
        match self.phase {
            FireworksPhase::Launch { row } => {
                display.clear();
                display.set_pixel(row, center_col, true);
                self.phase = if row > center_row {
                    FireworksPhase::Launch { row: row - 1 }
                } else {
                    FireworksPhase::Burst { step: 0 }
                };
                Some(LAUNCH_HOLD)
            }
            FireworksPhase::Burst { step } => {
                self.accumulate_ring(Self::radius(step));
                display.draw(&self.mask);
                self.phase = if step + 1 < BURST_STEPS {
                    FireworksPhase::Burst { step: step + 1 }
                } else {
                    FireworksPhase::Fade { step: 0 }
                };
                Some(BURST_HOLD)
            }
            FireworksPhase::Fade { step } => {
                // Each point shows with probability (step + 1) / FADE_STEPS
                let mut frame = BitGrid::new();
                for row in 0..=MAX_INDEX {
                    for col in 0..=MAX_INDEX {
                        if self.mask.get(row, col)
                            && rng.below(u32::from(FADE_STEPS)) <= u32::from(step)
                        {
                            frame.set(row, col, true);
                        }
                    }
                }
                display.draw(&frame);
                if step + 1 < FADE_STEPS {
                    self.phase = FireworksPhase::Fade { step: step + 1 };
                } else {
                    self.restart(rng);
                }
                Some(FADE_HOLD)
            }
        }
    }
}
