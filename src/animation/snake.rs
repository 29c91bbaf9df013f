//! Wandering snake
//!
//! A fixed-length body follows the head. The head bounces off the edges and
//! every few moves may swap between horizontal and vertical travel. The tail
//! flickers more the further it is from the head.

use embassy_time::Duration;

use super::Animation;
use crate::{MatrixDriver, display::MatrixDisplay, grid::SIZE, random::Rng};

const FRAME_HOLD: Duration = Duration::from_millis(90);

pub const SNAKE_LENGTH: usize = 6;
/// Segments nearest the head that are always drawn
const SOLID_SEGMENTS: usize = 3;
/// Moves between two chances to change axis
const TURN_INTERVAL: u8 = 6;

#[derive(Debug, Clone)]
pub struct SnakeAnimation {
    /// Body cells as (row, col), head first
    body: [(i8, i8); SNAKE_LENGTH],
    /// Unit step as (row, col)
    velocity: (i8, i8),
    moves: u8,
}

impl Default for SnakeAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl SnakeAnimation {
    pub const fn new() -> Self {
        Self {
            body: [(3, 3); SNAKE_LENGTH],
            velocity: (0, 1),
            moves: 0,
        }
    }

    pub const fn head(&self) -> (i8, i8) {
        self.body[0]
    }

    pub const fn body(&self) -> &[(i8, i8); SNAKE_LENGTH] {
        &self.body
    }

    pub const fn velocity(&self) -> (i8, i8) {
        self.velocity
    }

    /// Visibility chance of a tail segment as `(numerator, denominator)`
    ///
    /// Segments `0..3` are always visible, segment `i` after that is drawn
    /// with probability `(6 - i) / 6`, strictly decreasing along the tail.
    pub const fn visibility(segment: usize) -> (u32, u32) {
        if segment < SOLID_SEGMENTS {
            (1, 1)
        } else {
            ((SNAKE_LENGTH - segment) as u32, SNAKE_LENGTH as u32)
        }
    }

    /// Move the head one step and drag the body along
    pub fn step(&mut self, rng: &mut Rng) {
        self.moves = self.moves.wrapping_add(1);
        if self.moves % TURN_INTERVAL == 0 && rng.one_in(2) {
            let sign = if rng.one_in(2) { 1 } else { -1 };
            self.velocity = if self.velocity.0 == 0 {
                (sign, 0)
            } else {
                (0, sign)
            };
        }

        let (mut row, mut col) = self.body[0];
        row += self.velocity.0;
        col += self.velocity.1;
        // Off the panel: turn around and step back twice to land inside
        if !on_panel(row) {
            self.velocity.0 = -self.velocity.0;
            row += 2 * self.velocity.0;
        }
        if !on_panel(col) {
            self.velocity.1 = -self.velocity.1;
            col += 2 * self.velocity.1;
        }

        self.body.copy_within(0..SNAKE_LENGTH - 1, 1);
        self.body[0] = (row, col);
    }
}

#[allow(clippy::cast_possible_wrap)]
fn on_panel(value: i8) -> bool {
    (0..SIZE as i8).contains(&value)
}

impl Animation for SnakeAnimation {
    #[allow(clippy::cast_sign_loss)]
    fn render_frame<D: MatrixDriver>(
        &mut self,
        display: &mut MatrixDisplay<D>,
        rng: &mut Rng,
    ) -> Option<Duration> {
        self.step(rng);

        display.clear();
        for (segment, &(row, col)) in self.body.iter().enumerate() {
            let (chance, out_of) = Self::visibility(segment);
            if rng.below(out_of) < chance {
                display.set_pixel(row as u8, col as u8, true);
            }
        }

        Some(FRAME_HOLD)
    }
}
