use crate::Dimensions;
use std::time::Duration;

/// Settings of a simulation instance.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Size of boards produced by random fill.
    pub dimensions: Dimensions,
    /// Delay between two auto-played generations.
    pub period: Duration,
    /// Seed for random fill; `None` draws a fresh board every time.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::new(Self::DEFAULT_ROWS, Self::DEFAULT_COLUMNS),
            period: Self::TICK_PERIOD,
            seed: None,
        }
    }
}

impl Config {
    pub const DEFAULT_ROWS: usize = 25;
    pub const DEFAULT_COLUMNS: usize = 25;
    pub const TICK_PERIOD: Duration = Duration::from_millis(500);

    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}
