//! Falling rain
//!
//! The frame is an 8-row shift register. Every tick all rows move down by
//! one, the bottom row falls off and a fresh random row enters at the top.

use embassy_time::Duration;

use super::Animation;
use crate::{
    MatrixDriver,
    display::MatrixDisplay,
    grid::{BitGrid, SIZE},
    random::Rng,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RainVariant {
    /// Dense drops, one column in three
    Rain,
    /// Sparse, faster drops, one column in ten
    Matrix,
}

impl RainVariant {
    const fn drop_chance(self) -> u32 {
        match self {
            Self::Rain => 3,
            Self::Matrix => 10,
        }
    }

    const fn frame_hold(self) -> Duration {
        match self {
            Self::Rain => Duration::from_millis(80),
            Self::Matrix => Duration::from_millis(60),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RainAnimation {
    variant: RainVariant,
    screen: BitGrid,
}

impl RainAnimation {
    pub const fn new(variant: RainVariant) -> Self {
        Self {
            variant,
            screen: BitGrid::new(),
        }
    }

    pub const fn variant(&self) -> RainVariant {
        self.variant
    }

    pub const fn screen(&self) -> &BitGrid {
        &self.screen
    }

    /// Shift the register by one row with the given new top row
    pub fn advance(&mut self, top: u8) {
        self.screen.shift_down(top);
    }

    fn random_row(&self, rng: &mut Rng) -> u8 {
        (0..SIZE).fold(0, |row, col| {
            if rng.one_in(self.variant.drop_chance()) {
                row | (1 << col)
            } else {
                row
            }
        })
    }
}

impl Animation for RainAnimation {
    fn render_frame<D: MatrixDriver>(
        &mut self,
        display: &mut MatrixDisplay<D>,
        rng: &mut Rng,
    ) -> Option<Duration> {
        let top = self.random_row(rng);
        self.advance(top);
        display.draw(&self.screen);

        Some(self.variant.frame_hold())
    }
}
