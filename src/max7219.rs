//! MAX7219 LED matrix driver
//!
//! Drives a single 8x8 matrix over SPI. Each digit register holds one row;
//! bit `c` of the register is column `c`. A shadow copy of the rows lets
//! single-pixel writes update one register without reading the chip back.

use embedded_hal::spi::SpiDevice;

use crate::MatrixDriver;
use crate::config::MAX_BRIGHTNESS;
use crate::grid::{BitGrid, SIZE};

const REG_DIGIT0: u8 = 0x01;
const REG_DECODE_MODE: u8 = 0x09;
const REG_INTENSITY: u8 = 0x0A;
const REG_SCAN_LIMIT: u8 = 0x0B;
const REG_SHUTDOWN: u8 = 0x0C;
const REG_DISPLAY_TEST: u8 = 0x0F;

const SCAN_ALL_DIGITS: u8 = 0x07;
const NO_DECODE: u8 = 0x00;
const NORMAL_OPERATION: u8 = 0x01;
const TEST_OFF: u8 = 0x00;

/// MAX7219 driver
///
/// Bus errors are dropped: the matrix is write-only and the next frame
/// rewrites every register anyway.
#[derive(Debug)]
pub struct Max7219<SPI: SpiDevice> {
    spi: SPI,
    shadow: BitGrid,
}

impl<SPI: SpiDevice> Max7219<SPI> {
    /// Create the driver and bring the chip out of shutdown
    pub fn new(spi: SPI, brightness: u8) -> Self {
        let mut driver = Self {
            spi,
            shadow: BitGrid::new(),
        };
        driver.write_register(REG_DISPLAY_TEST, TEST_OFF);
        driver.write_register(REG_SCAN_LIMIT, SCAN_ALL_DIGITS);
        driver.write_register(REG_DECODE_MODE, NO_DECODE);
        driver.write_register(REG_SHUTDOWN, NORMAL_OPERATION);
        driver.set_brightness(brightness);
        driver.clear();
        driver
    }

    /// Rows currently latched in the chip
    pub const fn shadow(&self) -> &BitGrid {
        &self.shadow
    }

    pub fn release(self) -> SPI {
        self.spi
    }

    fn write_register(&mut self, register: u8, value: u8) {
        let _ = self.spi.write(&[register, value]);
    }

    fn flush_row(&mut self, row: u8) {
        self.write_register(REG_DIGIT0 + row, self.shadow.row(row));
    }
}

impl<SPI: SpiDevice> MatrixDriver for Max7219<SPI> {
    fn set_pixel(&mut self, row: u8, col: u8, on: bool) {
        self.shadow.set(row, col, on);
        self.flush_row(row);
    }

    fn set_row(&mut self, row: u8, bits: u8) {
        self.shadow.set_row(row, bits);
        self.flush_row(row);
    }

    fn clear(&mut self) {
        self.shadow.clear();
        for row in 0..SIZE {
            self.flush_row(row);
        }
    }

    fn set_brightness(&mut self, level: u8) {
        self.write_register(REG_INTENSITY, level.min(MAX_BRIGHTNESS));
    }
}
