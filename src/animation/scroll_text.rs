//! Scrolling text
//!
//! The message enters from the right edge and moves one column per frame
//! until it has fully left the panel, then starts over. Characters missing
//! from the font are skipped entirely.

use embassy_time::Duration;

use super::Animation;
use crate::{
    MatrixDriver,
    display::MatrixDisplay,
    font::{GLYPH_WIDTH, glyph},
    grid::{BitGrid, SIZE},
    random::Rng,
};

const FRAME_HOLD: Duration = Duration::from_millis(90);

/// Message shown by default
pub const DEFAULT_TEXT: &str = "SHAKE ME!";

/// Glyph columns plus one blank spacer
const GLYPH_PITCH: usize = GLYPH_WIDTH + 1;

#[derive(Debug, Clone)]
pub struct ScrollTextAnimation {
    text: &'static str,
    offset: usize,
}

impl Default for ScrollTextAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollTextAnimation {
    pub const fn new() -> Self {
        Self::with_text(DEFAULT_TEXT)
    }

    pub const fn with_text(text: &'static str) -> Self {
        Self { text, offset: 0 }
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Number of columns the rendered message occupies
    pub fn text_width(&self) -> usize {
        self.text.chars().filter_map(glyph).count() * GLYPH_PITCH
    }

    /// Frames needed for the message to cross the panel
    pub fn pass_length(&self) -> usize {
        self.text_width() + usize::from(SIZE)
    }

    /// Column `index` of the rendered message, bit `r` is row `r`
    pub fn column(&self, index: usize) -> u8 {
        let Some(columns) = self.text.chars().filter_map(glyph).nth(index / GLYPH_PITCH)
        else {
            return 0;
        };
        // Rows 1..=7, the top row stays dark
        columns.get(index % GLYPH_PITCH).map_or(0, |bits| bits << 1)
    }

    /// Frame with the message scrolled to `offset`
    pub fn frame(&self, offset: usize) -> BitGrid {
        let mut frame = BitGrid::new();
        for screen_col in 0..SIZE {
            // The message starts just past the right edge
            let Some(index) = (offset + usize::from(screen_col)).checked_sub(usize::from(SIZE))
            else {
                continue;
            };
            let bits = self.column(index);
            for row in 0..SIZE {
                if bits & (1 << row) != 0 {
                    frame.set(row, screen_col, true);
                }
            }
        }
        frame
    }
}

impl Animation for ScrollTextAnimation {
    fn render_frame<D: MatrixDriver>(
        &mut self,
        display: &mut MatrixDisplay<D>,
        _rng: &mut Rng,
    ) -> Option<Duration> {
        display.draw(&self.frame(self.offset));

        self.offset += 1;
        if self.offset > self.pass_length() {
            self.offset = 0;
        }
        Some(FRAME_HOLD)
    }
}
