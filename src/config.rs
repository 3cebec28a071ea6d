pub const MINUTES_PER_DAY: u64 = 24 * 60;

/// Floor of `window_days * 1440 / interval_minutes`; zero when the interval is zero.
pub fn timestamp_count(window_days: u32, interval_minutes: u32) -> u64 {
    (window_days as u64 * MINUTES_PER_DAY)
        .checked_div(interval_minutes as u64)
        .unwrap_or(0)
}

/// Fixed generation parameters for one run.
///
/// Cardinalities are nested: every channel has `subtopics` subtopics, every
/// subtopic has `publishers` publishers, and every publisher reports `metrics`
/// metrics. Values of zero are a caller contract violation and are not checked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub channels: u32,
    pub subtopics: u32,
    pub publishers: u32,
    pub metrics: u32,
    pub window_days: u32,
    pub interval_minutes: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            channels: 10,
            subtopics: 5,
            publishers: 5,
            metrics: 5,
            window_days: 30,
            interval_minutes: 60,
        }
    }
}

impl GeneratorConfig {
    /// Number of distinct (channel, subtopic, publisher, metric) tuples.
    /// Saturates at `u64::MAX`.
    pub fn catalog_size(&self) -> u64 {
        self.publisher_count().saturating_mul(self.metrics as u64)
    }

    /// Number of distinct publisher identifiers across the catalog.
    pub fn publisher_count(&self) -> u64 {
        (self.channels as u64 * self.subtopics as u64).saturating_mul(self.publishers as u64)
    }

    /// Sample count in the window. A trailing partial interval is dropped.
    pub fn timestamp_count(&self) -> u64 {
        timestamp_count(self.window_days, self.interval_minutes)
    }

    /// Saturates at `u64::MAX`.
    pub fn row_count(&self) -> u64 {
        self.catalog_size().saturating_mul(self.timestamp_count())
    }
}
