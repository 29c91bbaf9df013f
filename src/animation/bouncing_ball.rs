//! Bouncing ball with a ghost trail

use embassy_time::Duration;

use super::Animation;
use crate::{
    MatrixDriver,
    display::MatrixDisplay,
    grid::{MAX_INDEX, cell},
    random::Rng,
};

const FRAME_HOLD: Duration = Duration::from_millis(50);
const START: f32 = 4.0;
const ROW_SPEED: f32 = 0.8;
const COL_SPEED: f32 = 0.6;

/// Continuous ball position and velocity in cells per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallState {
    pub row: f32,
    pub col: f32,
    pub row_velocity: f32,
    pub col_velocity: f32,
}

impl BallState {
    /// Move by one frame and bounce off the walls.
    ///
    /// Each axis is handled on its own, so hitting a corner flips both
    /// velocities in the same frame.
    pub fn advance(&mut self) {
        self.row += self.row_velocity;
        self.col += self.col_velocity;
        bounce(&mut self.row, &mut self.row_velocity);
        bounce(&mut self.col, &mut self.col_velocity);
    }

    /// Cell covered by the ball
    pub fn ball_cell(&self) -> Option<(u8, u8)> {
        to_cell(self.row, self.col)
    }

    /// Cell of the trailing ghost, one velocity step behind the ball
    pub fn ghost_cell(&self) -> Option<(u8, u8)> {
        to_cell(self.row - self.row_velocity, self.col - self.col_velocity)
    }
}

fn bounce(position: &mut f32, velocity: &mut f32) {
    let max = f32::from(MAX_INDEX);
    if *position < 0.0 || *position > max {
        *velocity = -*velocity;
        *position = position.clamp(0.0, max);
    }
}

#[allow(clippy::cast_possible_truncation)]
fn to_cell(row: f32, col: f32) -> Option<(u8, u8)> {
    cell(row as i32, col as i32)
}

#[derive(Debug, Clone)]
pub struct BouncingBallAnimation {
    ball: BallState,
}

impl BouncingBallAnimation {
    /// Start in the middle heading in a random diagonal direction
    pub fn new(rng: &mut Rng) -> Self {
        Self::with_state(BallState {
            row: START,
            col: START,
            row_velocity: ROW_SPEED * rng.sign(),
            col_velocity: COL_SPEED * rng.sign(),
        })
    }

    pub const fn with_state(ball: BallState) -> Self {
        Self { ball }
    }

    pub const fn state(&self) -> &BallState {
        &self.ball
    }
}

impl Animation for BouncingBallAnimation {
    fn render_frame<D: MatrixDriver>(
        &mut self,
        display: &mut MatrixDisplay<D>,
        _rng: &mut Rng,
    ) -> Option<Duration> {
        display.clear();
        self.ball.advance();

        if let Some((row, col)) = self.ball.ball_cell() {
            display.set_pixel(row, col, true);
        }
        if let Some((row, col)) = self.ball.ghost_cell() {
            display.set_pixel(row, col, true);
        }

        Some(FRAME_HOLD)
    }
}
