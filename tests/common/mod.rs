#![allow(dead_code)]

use shakecube_matrix::{BitGrid, Clock, Duration, Instant, Maintenance, MatrixDriver};

/// Driver that keeps the physical panel state in memory
#[derive(Debug, Default)]
pub struct RecordingMatrix {
    pub panel: BitGrid,
    pub pixel_writes: Vec<(u8, u8, bool)>,
    pub row_writes: Vec<(u8, u8)>,
    pub clears: usize,
    pub brightness: Vec<u8>,
}

impl RecordingMatrix {
    /// Panel content seen from the logical (rotated) side
    pub fn logical(&self) -> BitGrid {
        let mut grid = BitGrid::new();
        for row in 0..8 {
            for col in 0..8 {
                if self.panel.get(7 - row, 7 - col) {
                    grid.set(row, col, true);
                }
            }
        }
        grid
    }

    pub fn last_brightness(&self) -> Option<u8> {
        self.brightness.last().copied()
    }
}

impl MatrixDriver for RecordingMatrix {
    fn set_pixel(&mut self, row: u8, col: u8, on: bool) {
        self.pixel_writes.push((row, col, on));
        self.panel.set(row, col, on);
    }

    fn set_row(&mut self, row: u8, bits: u8) {
        self.row_writes.push((row, bits));
        self.panel.set_row(row, bits);
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.panel.clear();
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness.push(level);
    }
}

/// Synthetic clock, time only moves when someone sleeps
#[derive(Debug, Default)]
pub struct ManualClock {
    pub now_ms: u64,
    pub sleeps: Vec<u64>,
}

impl ManualClock {
    pub fn at(ms: u64) -> Self {
        Self {
            now_ms: ms,
            sleeps: Vec::new(),
        }
    }

    pub fn advance(&mut self, ms: u64) {
        self.now_ms += ms;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        Instant::from_millis(self.now_ms)
    }

    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration.as_millis());
        self.now_ms += duration.as_millis();
    }
}

/// Check that polls are never closer than `min` nor further apart than `max`
pub fn assert_poll_cadence(polls: &[u64], min: u64, max: u64) {
    for pair in polls.windows(2) {
        let gap = pair[1] - pair[0];
        assert!(gap >= min, "polls {} ms apart, expected at least {min}", gap);
        assert!(gap <= max, "polls {} ms apart, expected at most {max}", gap);
    }
}

/// Maintenance hook remembering when it was polled
pub struct TimedPolls<'a> {
    pub clock: &'a core::cell::Cell<u64>,
    pub polls: Vec<u64>,
}

impl Maintenance for TimedPolls<'_> {
    fn poll(&mut self) {
        self.polls.push(self.clock.get());
    }
}

/// Clock backed by a shared cell so maintenance hooks can timestamp polls
pub struct SharedClock<'a> {
    pub now_ms: &'a core::cell::Cell<u64>,
}

impl Clock for SharedClock<'_> {
    fn now(&self) -> Instant {
        Instant::from_millis(self.now_ms.get())
    }

    fn sleep(&mut self, duration: Duration) {
        self.now_ms.set(self.now_ms.get() + duration.as_millis());
    }
}
