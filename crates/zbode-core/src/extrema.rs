//! Running min/max accumulator
//!
//! Shared by the frequency and time response engines to bound their outputs
//! for downstream scaling. Starts from ±∞ sentinels and a sample count; the
//! accessors return `None` until at least one sample has been offered, so a
//! consumer can never mistake the sentinels for real readings.
//!
//! Non-finite samples are counted but never become a bound (NaN fails every
//! comparison), which keeps scaling sane when a sweep contains NaN points.

/// Running (min, max) over a stream of samples.
#[derive(Debug, Clone, Copy)]
pub struct Extrema {
    min: f64,
    max: f64,
    count: usize,
}

impl Extrema {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            count: 0,
        }
    }

    /// Offer one sample.
    pub fn update(&mut self, value: f64) {
        self.count += 1;
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// True once at least one comparable sample has set both bounds.
    fn bounded(&self) -> bool {
        self.count > 0 && self.min <= self.max
    }

    /// Smallest sample seen, or `None` if no comparable sample was offered.
    pub fn min(&self) -> Option<f64> {
        self.bounded().then_some(self.min)
    }

    /// Largest sample seen, or `None` if no comparable sample was offered.
    pub fn max(&self) -> Option<f64> {
        self.bounded().then_some(self.max)
    }

    /// Both bounds at once.
    pub fn range(&self) -> Option<(f64, f64)> {
        self.bounded().then_some((self.min, self.max))
    }

    /// Number of samples offered.
    pub fn count(&self) -> usize {
        self.count
    }

    /// True if no sample was ever offered.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Default for Extrema {
    fn default() -> Self {
        Self::new()
    }
}
