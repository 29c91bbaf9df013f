//! Pac-Man eating a row of dots
//!
//! A 5x5 sprite chomps its way left to right through dots on row 3. Cells
//! the sprite leaves behind stay in a trail map and flicker out as they age.

use embassy_time::Duration;
use heapless::Vec;

use super::Animation;
use crate::{
    MatrixDriver,
    display::MatrixDisplay,
    grid::{BitGrid, SIZE, cell},
    random::Rng,
};

const FRAME_HOLD: Duration = Duration::from_millis(100);

const SPRITE_SIZE: i32 = 5;
const SPRITE_TOP: i32 = 1;
const DOT_ROW: u8 = 3;
const DOTS: u8 = 0b1010_1010;

/// Trail cells older than this many frames are dropped
pub const TRAIL_DECAY: u8 = 5;
const TRAIL_CAPACITY: usize = 24;

// Sprite rows, bit `k` is column `k` from the sprite's left edge.
const MOUTH_OPEN: [u8; 5] = [0b01110, 0b00111, 0b00011, 0b00111, 0b01110];
const MOUTH_CLOSED: [u8; 5] = [0b01110, 0b11111, 0b11111, 0b11111, 0b01110];

/// A cell recently covered by the sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailCell {
    pub row: u8,
    pub col: u8,
    pub age: u8,
}

#[derive(Debug, Clone)]
pub struct PacManAnimation {
    /// Column of the sprite's left edge, may be off the panel
    x: i32,
    mouth_open: bool,
    dots: u8,
    trail: Vec<TrailCell, TRAIL_CAPACITY>,
}

impl Default for PacManAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl PacManAnimation {
    pub const fn new() -> Self {
        Self {
            x: -SPRITE_SIZE,
            mouth_open: true,
            dots: DOTS,
            trail: Vec::new(),
        }
    }

    /// Remaining dots, bit `i` is column `i` of the dot row
    pub const fn dots(&self) -> u8 {
        self.dots
    }

    pub fn trail(&self) -> &[TrailCell] {
        &self.trail
    }

    pub const fn sprite_x(&self) -> i32 {
        self.x
    }

    fn sprite(&self) -> &'static [u8; 5] {
        if self.mouth_open {
            &MOUTH_OPEN
        } else {
            &MOUTH_CLOSED
        }
    }

    /// Sprite pixels at the current position, clipped to the panel
    fn sprite_frame(&self) -> BitGrid {
        let mut frame = BitGrid::new();
        for (dy, bits) in (0..).zip(self.sprite()) {
            for dx in 0..SPRITE_SIZE {
                if bits & (1 << dx) == 0 {
                    continue;
                }
                if let Some((row, col)) = cell(SPRITE_TOP + dy, self.x + dx) {
                    frame.set(row, col, true);
                }
            }
        }
        frame
    }

    /// Age the trail and remember the column the sprite is leaving
    fn update_trail(&mut self) {
        for entry in &mut self.trail {
            entry.age += 1;
        }
        self.trail.retain(|entry| entry.age <= TRAIL_DECAY);

        for (dy, bits) in (0..).zip(self.sprite()) {
            if bits & 1 == 0 {
                continue;
            }
            if let Some((row, col)) = cell(SPRITE_TOP + dy, self.x) {
                // A full trail just drops the newest cells
                let _ = self.trail.push(TrailCell { row, col, age: 0 });
            }
        }
    }

    /// Clear every dot under the sprite
    fn eat_dots(&mut self) {
        for dx in 0..SPRITE_SIZE {
            if let Some((_, col)) = cell(i32::from(DOT_ROW), self.x + dx) {
                self.dots &= !(1 << col);
            }
        }
    }

    fn advance(&mut self) {
        self.update_trail();
        self.x += 1;
        self.mouth_open = !self.mouth_open;

        if self.x >= i32::from(SIZE) {
            self.x = -SPRITE_SIZE;
            self.dots = DOTS;
        }
    }
}

impl Animation for PacManAnimation {
    fn render_frame<D: MatrixDriver>(
        &mut self,
        display: &mut MatrixDisplay<D>,
        rng: &mut Rng,
    ) -> Option<Duration> {
        self.eat_dots();

        let mut frame = self.sprite_frame();
        frame.set_row(DOT_ROW, frame.row(DOT_ROW) | self.dots);
        for entry in &self.trail {
            // Older cells show up less often
            if rng.below(u32::from(entry.age) + 1) == 0 {
                frame.set(entry.row, entry.col, true);
            }
        }
        display.draw(&frame);

        self.advance();
        Some(FRAME_HOLD)
    }
}
