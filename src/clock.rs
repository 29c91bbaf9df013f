use embassy_time::{Duration, Instant, block_for};

use crate::Clock;

/// Clock backed by the embassy time driver
///
/// Sleeping busy-waits with [`block_for`], the executor is not involved.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, duration: Duration) {
        block_for(duration);
    }
}
