//! Animation session timing and cooperative yielding.
//!
//! Animations block the caller for seconds, so the maintenance channel has to
//! be serviced from inside their frame loops. Every hold between frames goes
//! through [`FramePacer::wait`], which sleeps in short slices and polls the
//! maintenance hook between them.

use embassy_time::{Duration, Instant};

use crate::{Clock, Maintenance};

/// Longest single sleep before the maintenance channel gets a chance to run.
pub const MAX_YIELD_SLICE: Duration = Duration::from_millis(100);

/// Shortest gap between two maintenance polls.
///
/// Fast frames (the boot sequence goes down to 5 ms) skip polls until this
/// much time has passed since the previous one.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(20);

const ZERO: Duration = Duration::from_millis(0);

/// One animation session.
///
/// Holds the session start and target duration and owns the cooperative
/// wait between frames.
///
/// # Usage
///
/// ```ignore
/// let mut pacer = FramePacer::new(&mut clock, &mut maintenance, duration);
///
/// while pacer.is_running() {
///     let hold = render_frame(&mut display);
///     pacer.wait(hold);
/// }
/// ```
pub struct FramePacer<'a, C: Clock, M: Maintenance> {
    clock: &'a mut C,
    maintenance: &'a mut M,
    started_at: Instant,
    duration: Duration,
    last_poll: Instant,
}

impl<'a, C: Clock, M: Maintenance> FramePacer<'a, C, M> {
    /// Start a session lasting `duration` from now.
    pub fn new(clock: &'a mut C, maintenance: &'a mut M, duration: Duration) -> Self {
        let now = clock.now();
        Self {
            clock,
            maintenance,
            started_at: now,
            duration,
            last_poll: now,
        }
    }

    /// Start a session that only ends when the animation stops by itself.
    pub fn unbounded(clock: &'a mut C, maintenance: &'a mut M) -> Self {
        Self::new(clock, maintenance, Duration::MAX)
    }

    /// Time since the session started.
    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_duration_since(self.started_at)
    }

    /// Whether the session still has time left.
    pub fn is_running(&self) -> bool {
        self.elapsed() < self.duration
    }

    pub const fn duration(&self) -> Duration {
        self.duration
    }

    pub const fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Hold the current frame for `hold`.
    ///
    /// Sleeps in slices of at most [`MAX_YIELD_SLICE`] and offers the
    /// maintenance channel a poll after each slice.
    pub fn wait(&mut self, hold: Duration) {
        let mut remaining = hold;
        loop {
            let slice = remaining.min(MAX_YIELD_SLICE);
            if slice > ZERO {
                self.clock.sleep(slice);
            }
            self.yield_now();

            remaining = remaining.checked_sub(slice).unwrap_or(ZERO);
            if remaining == ZERO {
                break;
            }
        }
    }

    /// Poll the maintenance channel unless it was polled less than
    /// [`MIN_POLL_INTERVAL`] ago.
    pub fn yield_now(&mut self) {
        let now = self.clock.now();
        if now.saturating_duration_since(self.last_poll) >= MIN_POLL_INTERVAL {
            self.maintenance.poll();
            self.last_poll = now;
        }
    }
}
