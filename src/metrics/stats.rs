use crate::config::GeneratorConfig;
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Counters kept while rows are emitted.
#[derive(Debug, Clone)]
pub struct EmitStats {
    pub rows: u64,
    pub timestamp_groups: u64,
    start_time: Instant,
}

impl EmitStats {
    pub fn new() -> Self {
        Self {
            rows: 0,
            timestamp_groups: 0,
            start_time: Instant::now(),
        }
    }

    pub fn record_row(&mut self) {
        self.rows += 1;
    }

    pub fn record_group(&mut self) {
        self.timestamp_groups += 1;
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Rows per second since emission started
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.rows as f64 / secs
        } else {
            0.0
        }
    }
}

impl Default for EmitStats {
    fn default() -> Self {
        Self::new()
    }
}

/// What a finished run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub config: GeneratorConfig,
    pub path: Option<PathBuf>,
    pub channels: usize,
    pub publishers: usize,
    pub catalog_size: usize,
    pub timestamps: u64,
    pub rows: u64,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.rows as f64 / secs
        } else {
            0.0
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generated fixture:")?;
        writeln!(f, "  Channels: {}", self.channels)?;
        writeln!(f, "  Subtopics per channel: {}", self.config.subtopics)?;
        writeln!(f, "  Publishers: {} ({} per subtopic)", self.publishers, self.config.publishers)?;
        writeln!(f, "  Metrics per publisher: {}", self.config.metrics)?;
        writeln!(f, "  Entity tuples: {}", self.catalog_size)?;
        writeln!(
            f,
            "  Timestamps: {} ({} days @ {} min)",
            self.timestamps, self.config.window_days, self.config.interval_minutes
        )?;
        writeln!(f, "  Rows: {}", self.rows)?;
        writeln!(
            f,
            "  Elapsed: {:.2}s ({:.0} rows/s)",
            self.elapsed.as_secs_f64(),
            self.throughput()
        )?;
        match &self.path {
            Some(p) => write!(f, "  Output: {}", p.display()),
            None => write!(f, "  Output: <writer>"),
        }
    }
}
