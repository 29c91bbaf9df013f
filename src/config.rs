use embassy_time::Duration;

/// Default panel brightness (0-15)
pub const DEFAULT_BRIGHTNESS: u8 = 8;

/// Highest brightness level accepted by the panel
pub const MAX_BRIGHTNESS: u8 = 15;

/// Configuration of the reactive display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubeConfig {
    /// Baseline panel brightness (0-15)
    pub brightness: u8,
    /// Window after a trigger during which shake samples are ignored
    pub debounce: Duration,
    /// Shortest random animation duration
    pub min_duration: Duration,
    /// Longest random animation duration (inclusive)
    pub max_duration: Duration,
    /// Sleep between idle loop iterations
    pub idle_delay: Duration,
}

impl CubeConfig {
    pub const DEFAULT: Self = Self {
        brightness: DEFAULT_BRIGHTNESS,
        debounce: Duration::from_millis(1000),
        min_duration: Duration::from_millis(5000),
        max_duration: Duration::from_millis(10_000),
        idle_delay: Duration::from_millis(10),
    };
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
