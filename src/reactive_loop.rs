//! Main reactive loop
//!
//! Idles polling the maintenance channel and the shake sensor. An accepted
//! shake runs a random animation synchronously; no samples are taken while
//! it plays.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::config::CubeConfig;
use crate::display::MatrixDisplay;
use crate::scheduler::{AnimationScheduler, Selection};
use crate::shake::ShakeDetector;
use crate::{Clock, Maintenance, MatrixDriver, ShakeSensor};

/// Reactive display - the main orchestrator
pub struct ReactiveLoop<D, S, M, C>
where
    D: MatrixDriver,
    S: ShakeSensor,
    M: Maintenance,
    C: Clock,
{
    // External dependencies
    display: MatrixDisplay<D>,
    sensor: S,
    maintenance: M,
    clock: C,

    // Internal state
    config: CubeConfig,
    detector: ShakeDetector,
    scheduler: AnimationScheduler,
}

impl<D, S, M, C> ReactiveLoop<D, S, M, C>
where
    D: MatrixDriver,
    S: ShakeSensor,
    M: Maintenance,
    C: Clock,
{
    /// Create the loop
    ///
    /// `seed` initialises the random source, take it from any entropy the
    /// board offers.
    pub fn new(
        driver: D,
        sensor: S,
        maintenance: M,
        clock: C,
        seed: u64,
        config: CubeConfig,
    ) -> Self {
        let mut display = MatrixDisplay::new(driver, config.brightness);
        display.clear();
        Self {
            display,
            sensor,
            maintenance,
            clock,
            detector: ShakeDetector::with_debounce(config.debounce),
            scheduler: AnimationScheduler::new(seed, &config),
            config,
        }
    }

    /// Play the boot sequence and leave the panel dark
    pub fn boot(&mut self) {
        #[cfg(feature = "esp32-log")]
        println!("[ReactiveLoop] playing boot sequence");

        self.scheduler
            .play_boot(&mut self.display, &mut self.clock, &mut self.maintenance);
        self.display.clear();
    }

    /// One loop iteration
    ///
    /// Returns the animation that was played, if a shake was accepted.
    pub fn tick(&mut self) -> Option<Selection> {
        self.maintenance.poll();

        let now = self.clock.now();
        let shaking = self.sensor.is_shaking();
        let played = self.detector.sample(now, shaking).map(|_event| {
            #[cfg(feature = "esp32-log")]
            println!("[ReactiveLoop] shake detected at {} ms", _event.at.as_millis());

            let selection = self.scheduler.play_random(
                &mut self.display,
                &mut self.clock,
                &mut self.maintenance,
            );
            self.display.clear();

            #[cfg(feature = "esp32-log")]
            println!("[ReactiveLoop] animation complete, ready for next shake");
            selection
        });

        self.clock.sleep(self.config.idle_delay);
        played
    }

    /// Play the boot sequence once, then run forever
    pub fn run(&mut self) -> ! {
        self.boot();
        loop {
            self.tick();
        }
    }

    pub const fn display(&self) -> &MatrixDisplay<D> {
        &self.display
    }

    pub const fn detector(&self) -> &ShakeDetector {
        &self.detector
    }
}
