//! Hyperspace jump, played once at boot
//!
//! Stars start near the centre and fly outward, faster every frame, while
//! the frame rate itself speeds up. Ends with a full-panel flash.

use embassy_time::Duration;

use super::Animation;
use crate::{
    MatrixDriver,
    display::MatrixDisplay,
    grid::{BitGrid, cell},
    random::Rng,
};

pub const STAR_COUNT: usize = 12;
pub const FLIGHT_FRAMES: u8 = 50;

const CENTER: f32 = 3.5;
const BASE_SPEED: f32 = 0.1;
const SPEED_STEP: f32 = 0.05;
const ACCELERATION: f32 = 0.08;
/// Stars faster than this leave a trail once the jump is under way
const TRAIL_SPEED: f32 = 0.3;
const TRAIL_AFTER_FRAME: u8 = 20;
const MIN_DIRECTION: f32 = 0.1;

const START_HOLD_MS: u64 = 40;
const MIN_HOLD_MS: u64 = 5;
const FLASH_HOLD: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Star {
    row: f32,
    col: f32,
    speed: f32,
}

#[derive(Debug, Clone)]
pub struct HyperspaceAnimation {
    stars: [Star; STAR_COUNT],
    frame: u8,
    flashed: bool,
}

impl HyperspaceAnimation {
    #[allow(clippy::cast_precision_loss)]
    pub fn new(rng: &mut Rng) -> Self {
        let mut stars = [Star {
            row: CENTER,
            col: CENTER,
            speed: BASE_SPEED,
        }; STAR_COUNT];
        for (i, star) in stars.iter_mut().enumerate() {
            star.row = CENTER + jitter(rng, 10);
            star.col = CENTER + jitter(rng, 10);
            star.speed = BASE_SPEED + i as f32 * SPEED_STEP;
        }

        Self {
            stars,
            frame: 0,
            flashed: false,
        }
    }

    pub const fn frame(&self) -> u8 {
        self.frame
    }

    /// Hold time of a flight frame, shrinking as the jump speeds up
    pub fn frame_hold(frame: u8) -> Duration {
        let hold = START_HOLD_MS.saturating_sub(u64::from(frame)).max(MIN_HOLD_MS);
        Duration::from_millis(hold)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn fly(&mut self, rng: &mut Rng) -> BitGrid {
        let mut frame = BitGrid::new();
        let accel = 1.0 + f32::from(self.frame) * ACCELERATION;

        for star in &mut self.stars {
            let mut dir_row = star.row - CENTER;
            let mut dir_col = star.col - CENTER;
            let dist = libm::sqrtf(dir_row * dir_row + dir_col * dir_col);
            if dist > MIN_DIRECTION {
                dir_row /= dist;
                dir_col /= dist;
            }

            let step = star.speed * accel;
            star.row += dir_row * step;
            star.col += dir_col * step;

            if let Some((row, col)) = cell(star.row as i32, star.col as i32) {
                frame.set(row, col, true);
                if self.frame > TRAIL_AFTER_FRAME && star.speed > TRAIL_SPEED {
                    let trail_row = (star.row - dir_row * step * 0.5) as i32;
                    let trail_col = (star.col - dir_col * step * 0.5) as i32;
                    if let Some((row, col)) = cell(trail_row, trail_col) {
                        frame.set(row, col, true);
                    }
                }
            } else {
                star.row = CENTER + jitter(rng, 5);
                star.col = CENTER + jitter(rng, 5);
            }
        }
        frame
    }
}

/// Random offset in `-spread/10..spread/10` in tenths of a cell
#[allow(clippy::cast_precision_loss)]
fn jitter(rng: &mut Rng, spread: i32) -> f32 {
    rng.range(-spread, spread) as f32 / 10.0
}

impl Animation for HyperspaceAnimation {
    fn render_frame<D: MatrixDriver>(
        &mut self,
        display: &mut MatrixDisplay<D>,
        rng: &mut Rng,
    ) -> Option<Duration> {
        if self.frame < FLIGHT_FRAMES {
            let frame = self.fly(rng);
            display.draw(&frame);
            let hold = Self::frame_hold(self.frame);
            self.frame += 1;
            return Some(hold);
        }
        if self.flashed {
            return None;
        }

        display.draw(&BitGrid::filled());
        self.flashed = true;
        Some(FLASH_HOLD)
    }
}
