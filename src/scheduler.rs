//! Random animation scheduling
//!
//! Picks an animation from the pool uniformly at random, gives it a random
//! duration and runs it to completion. The boot sequence is played through
//! the same runner but never chosen at random.

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::animation::{self, AnimationId};
use crate::config::CubeConfig;
use crate::display::MatrixDisplay;
use crate::frame_pacer::FramePacer;
use crate::random::Rng;
use crate::{Clock, Maintenance, MatrixDriver};

/// Animation picked for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub id: AnimationId,
    pub duration: Duration,
}

/// Chooses and runs animations
#[derive(Debug, Clone)]
pub struct AnimationScheduler {
    rng: Rng,
    min_duration: Duration,
    max_duration: Duration,
}

impl AnimationScheduler {
    pub fn new(seed: u64, config: &CubeConfig) -> Self {
        assert!(
            config.min_duration <= config.max_duration,
            "animation duration range is empty"
        );
        Self {
            rng: Rng::new(seed),
            min_duration: config.min_duration,
            max_duration: config.max_duration,
        }
    }

    /// Pick a pooled animation and a duration, both uniformly
    #[allow(clippy::cast_possible_truncation)]
    pub fn choose(&mut self) -> Selection {
        let pool = &AnimationId::POOL;
        let id = pool[self.rng.below(pool.len() as u32) as usize];

        let min_ms = self.min_duration.as_millis();
        let span_ms = self.max_duration.as_millis() - min_ms + 1;
        let offset_ms = u64::from(self.rng.below(span_ms.min(u64::from(u32::MAX)) as u32));

        Selection {
            id,
            duration: Duration::from_millis(min_ms + offset_ms),
        }
    }

    /// Choose an animation and play it to the end
    pub fn play_random<D, C, M>(
        &mut self,
        display: &mut MatrixDisplay<D>,
        clock: &mut C,
        maintenance: &mut M,
    ) -> Selection
    where
        D: MatrixDriver,
        C: Clock,
        M: Maintenance,
    {
        let selection = self.choose();
        #[cfg(feature = "esp32-log")]
        println!(
            "[AnimationScheduler] playing {} for {} ms",
            selection.id.as_str(),
            selection.duration.as_millis()
        );

        self.play(selection, display, clock, maintenance);
        selection
    }

    /// Play the given animation for the selected duration
    pub fn play<D, C, M>(
        &mut self,
        selection: Selection,
        display: &mut MatrixDisplay<D>,
        clock: &mut C,
        maintenance: &mut M,
    ) where
        D: MatrixDriver,
        C: Clock,
        M: Maintenance,
    {
        let mut slot = selection.id.to_slot(&mut self.rng);
        let mut pacer = FramePacer::new(clock, maintenance, selection.duration);
        animation::play(&mut slot, display, &mut self.rng, &mut pacer);
    }

    /// Play the boot sequence until it finishes by itself
    pub fn play_boot<D, C, M>(
        &mut self,
        display: &mut MatrixDisplay<D>,
        clock: &mut C,
        maintenance: &mut M,
    ) where
        D: MatrixDriver,
        C: Clock,
        M: Maintenance,
    {
        let mut slot = AnimationId::Hyperspace.to_slot(&mut self.rng);
        let mut pacer = FramePacer::unbounded(clock, maintenance);
        animation::play(&mut slot, display, &mut self.rng, &mut pacer);
    }
}
