use crate::config::timestamp_count;
use crate::error::{FixtureError, Result};
use chrono::{DateTime, TimeDelta, Utc};
use tracing::info;

const NANOS_PER_MINUTE: i64 = 60 * 1_000_000_000;

/// Evenly spaced sample timestamps in nanoseconds since the Unix epoch,
/// covering `[now - window_days, now)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeGrid {
    start_ns: i64,
    step_ns: i64,
    len: u64,
}

impl TimeGrid {
    pub fn new(window_days: u32, interval_minutes: u32, now: DateTime<Utc>) -> Result<Self> {
        let out_of_range = || FixtureError::TimestampOutOfRange {
            days: window_days,
            now: now.to_rfc3339(),
        };
        let start = now
            .checked_sub_signed(TimeDelta::days(window_days as i64))
            .ok_or_else(out_of_range)?;
        let start_ns = start.timestamp_nanos_opt().ok_or_else(out_of_range)?;
        Ok(Self {
            start_ns,
            step_ns: interval_minutes as i64 * NANOS_PER_MINUTE,
            len: timestamp_count(window_days, interval_minutes),
        })
    }

    /// Grid for the window ending at the current wall-clock instant.
    pub fn ending_now(window_days: u32, interval_minutes: u32) -> Result<Self> {
        let grid = Self::new(window_days, interval_minutes, Utc::now())?;
        info!(
            window_days,
            interval_minutes,
            timestamps = grid.len,
            start_ns = grid.start_ns,
            "time grid computed"
        );
        Ok(grid)
    }

    pub fn start_ns(&self) -> i64 {
        self.start_ns
    }

    pub fn step_ns(&self) -> i64 {
        self.step_ns
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The i-th timestamp, `start + i * step`, or `None` past the end.
    pub fn timestamp(&self, i: u64) -> Option<i64> {
        (i < self.len).then(|| self.start_ns + i as i64 * self.step_ns)
    }

    pub fn last(&self) -> Option<i64> {
        self.len.checked_sub(1).and_then(|i| self.timestamp(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        (0..self.len).map(move |i| self.start_ns + i as i64 * self.step_ns)
    }
}
