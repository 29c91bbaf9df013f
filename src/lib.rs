#![no_std]

pub mod animation;
pub mod clock;
pub mod config;
pub mod display;
pub mod font;
pub mod frame_pacer;
pub mod grid;
pub mod max7219;
pub mod random;
pub mod reactive_loop;
pub mod scheduler;
pub mod sensor;
pub mod shake;

pub use animation::{AnimationId, AnimationSlot};
pub use clock::EmbassyClock;
pub use config::CubeConfig;
pub use display::MatrixDisplay;
pub use frame_pacer::FramePacer;
pub use grid::BitGrid;
pub use random::Rng;
pub use reactive_loop::ReactiveLoop;
pub use scheduler::{AnimationScheduler, Selection};
pub use shake::{ShakeDetector, ShakeEvent, ShakeState};
pub use embassy_time::{Duration, Instant};

/// Physical matrix driver trait
///
/// Coordinates are physical: the display adapter has already applied the
/// panel rotation. Bit `i` of a row byte is physical column `i`.
pub trait MatrixDriver {
    /// Switch a single LED on or off
    fn set_pixel(&mut self, row: u8, col: u8, on: bool);

    /// Write a whole row at once
    fn set_row(&mut self, row: u8, bits: u8);

    /// Switch off every LED
    fn clear(&mut self);

    /// Set the global intensity (0-15)
    fn set_brightness(&mut self, level: u8);
}

/// Monotonic time source with a blocking sleep
pub trait Clock {
    fn now(&self) -> Instant;

    /// Block for the given duration
    fn sleep(&mut self, duration: Duration);
}

/// Maintenance hook (firmware update polling)
///
/// Must be called at a bounded cadence, animations included.
pub trait Maintenance {
    fn poll(&mut self);
}

impl<F: FnMut()> Maintenance for F {
    fn poll(&mut self) {
        self()
    }
}

/// Vibration sensor
pub trait ShakeSensor {
    /// Returns `true` while the sensor reports a shake
    fn is_shaking(&mut self) -> bool;
}

impl<F: FnMut() -> bool> ShakeSensor for F {
    fn is_shaking(&mut self) -> bool {
        self()
    }
}
