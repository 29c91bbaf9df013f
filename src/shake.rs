//! Shake detection
//!
//! Converts raw sensor samples into trigger events. After a trigger the
//! detector cools down for a debounce window and ignores every sample, so a
//! long or bouncing vibration fires only once.

use embassy_time::{Duration, Instant};

use crate::config::CubeConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShakeState {
    /// Waiting for the next shake
    Armed,
    /// Ignoring samples since the trigger at `since`
    Cooling { since: Instant },
}

/// Trigger produced by an accepted shake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShakeEvent {
    pub at: Instant,
}

#[derive(Debug, Clone)]
pub struct ShakeDetector {
    state: ShakeState,
    debounce: Duration,
    last_trigger: Option<Instant>,
}

impl Default for ShakeDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl ShakeDetector {
    pub const fn new() -> Self {
        Self::with_debounce(CubeConfig::DEFAULT.debounce)
    }

    pub const fn with_debounce(debounce: Duration) -> Self {
        Self {
            state: ShakeState::Armed,
            debounce,
            last_trigger: None,
        }
    }

    pub const fn state(&self) -> ShakeState {
        self.state
    }

    pub const fn last_trigger(&self) -> Option<Instant> {
        self.last_trigger
    }

    pub const fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Feed one sensor sample taken at `now`
    ///
    /// Returns an event when the sample is accepted as a new shake.
    pub fn sample(&mut self, now: Instant, shaking: bool) -> Option<ShakeEvent> {
        if let ShakeState::Cooling { since } = self.state {
            if now.saturating_duration_since(since) > self.debounce {
                self.state = ShakeState::Armed;
            }
        }

        match self.state {
            ShakeState::Armed if shaking => {
                self.state = ShakeState::Cooling { since: now };
                self.last_trigger = Some(now);
                Some(ShakeEvent { at: now })
            }
            _ => None,
        }
    }
}
