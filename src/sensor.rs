//! GPIO vibration sensor
//!
//! SW-420 style modules pull their digital output low while they feel a
//! vibration. The pin is sampled, not interrupt driven.

use embedded_hal::digital::InputPin;

use crate::ShakeSensor;

/// Shake sensor on an active-low input pin
#[derive(Debug)]
pub struct ActiveLowSensor<P: InputPin> {
    pin: P,
}

impl<P: InputPin> ActiveLowSensor<P> {
    pub const fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: InputPin> ShakeSensor for ActiveLowSensor<P> {
    fn is_shaking(&mut self) -> bool {
        // A failed read counts as no shake
        self.pin.is_low().unwrap_or(false)
    }
}
