//! Display adapter
//!
//! The panel is mounted upside down, so every logical write is rotated by
//! 180 degrees before it reaches the driver: pixel `(row, col)` lands on
//! `(7 - row, 7 - col)` and a row pattern is bit-reversed and written to row
//! `7 - row`. Animations never talk to the driver directly.

use crate::MatrixDriver;
use crate::config::MAX_BRIGHTNESS;
use crate::grid::{BitGrid, MAX_INDEX, SIZE};

/// Logical view of the physical matrix
#[derive(Debug)]
pub struct MatrixDisplay<D: MatrixDriver> {
    driver: D,
    /// Brightness restored after every animation
    baseline: u8,
    /// Brightness last sent to the driver
    brightness: u8,
}

impl<D: MatrixDriver> MatrixDisplay<D> {
    /// Wrap a driver and apply the baseline brightness
    pub fn new(mut driver: D, baseline: u8) -> Self {
        assert_brightness(baseline);
        driver.set_brightness(baseline);
        Self {
            driver,
            baseline,
            brightness: baseline,
        }
    }

    /// Set one pixel in logical coordinates
    pub fn set_pixel(&mut self, row: u8, col: u8, on: bool) {
        assert!(
            row < SIZE && col < SIZE,
            "pixel ({row}, {col}) is outside of the 8x8 grid"
        );
        self.driver.set_pixel(MAX_INDEX - row, MAX_INDEX - col, on);
    }

    /// Write a whole logical row, bit `i` is column `i`
    pub fn set_row(&mut self, row: u8, bits: u8) {
        assert!(row < SIZE, "row {row} is outside of the 8x8 grid");
        self.driver.set_row(MAX_INDEX - row, bits.reverse_bits());
    }

    /// Switch off the whole panel
    pub fn clear(&mut self) {
        self.driver.clear();
    }

    /// Replace the whole panel content with a frame
    pub fn draw(&mut self, frame: &BitGrid) {
        for (row, bits) in (0..SIZE).zip(frame.rows()) {
            self.set_row(row, bits);
        }
    }

    /// Set the global panel brightness (0-15)
    pub fn set_brightness(&mut self, level: u8) {
        assert_brightness(level);
        self.brightness = level;
        self.driver.set_brightness(level);
    }

    /// Return to the baseline brightness
    pub fn restore_brightness(&mut self) {
        self.set_brightness(self.baseline);
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn baseline_brightness(&self) -> u8 {
        self.baseline
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub fn into_driver(self) -> D {
        self.driver
    }
}

#[inline]
fn assert_brightness(level: u8) {
    assert!(
        level <= MAX_BRIGHTNESS,
        "brightness {level} is above {MAX_BRIGHTNESS}"
    );
}
