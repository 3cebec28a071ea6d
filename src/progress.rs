use std::time::{Duration, Instant};

/// Gate for periodic progress lines: fires at most once per period.
pub struct ProgressTicker {
    interval: Duration,
    last_tick: Instant,
}

impl ProgressTicker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: Instant::now(),
        }
    }

    /// True when at least one period has passed since the last time this returned true.
    pub fn due(&mut self) -> bool {
        let now = Instant::now();
        if now.duration_since(self.last_tick) >= self.interval {
            self.last_tick = now;
            true
        } else {
            false
        }
    }
}
