use crate::catalog::EntityCatalog;
use crate::error::Result;
use crate::metrics::stats::EmitStats;
use crate::output::RowSink;
use crate::progress::ProgressTicker;
use crate::time_grid::TimeGrid;
use rand::Rng;
use serde::Serialize;
use std::io::Write;
use std::ops::Range;
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

/// Ingestion path tag carried by every row.
pub const PROTOCOL: &str = "mqtt";
/// Placeholder unit label.
pub const UNIT: &str = "unit";
pub const VALUE_RANGE: Range<f64> = 0.0..100.0;

/// One CSV data line. Field order is the column order.
#[derive(Debug, Clone, Serialize)]
pub struct MessageRow<'a> {
    pub time: i64,
    pub channel: &'a Uuid,
    pub subtopic: &'a str,
    pub publisher: &'a Uuid,
    pub protocol: &'static str,
    pub name: &'a str,
    pub unit: &'static str,
    pub value: f64,
}

impl<'a> MessageRow<'a> {
    pub fn new(
        time: i64,
        channel: &'a Uuid,
        subtopic: &'a str,
        publisher: &'a Uuid,
        name: &'a str,
        value: f64,
    ) -> Self {
        Self {
            time,
            channel,
            subtopic,
            publisher,
            protocol: PROTOCOL,
            name,
            unit: UNIT,
            value,
        }
    }
}

/// Walks timestamps (outer) × catalog (inner) and streams one row per pair.
pub struct RowEmitter<'a> {
    catalog: &'a EntityCatalog,
    grid: &'a TimeGrid,
    progress: ProgressTicker,
}

impl<'a> RowEmitter<'a> {
    pub fn new(catalog: &'a EntityCatalog, grid: &'a TimeGrid) -> Self {
        Self {
            catalog,
            grid,
            progress: ProgressTicker::new(Duration::from_secs(5)),
        }
    }

    pub fn with_progress_interval(mut self, interval: Duration) -> Self {
        self.progress = ProgressTicker::new(interval);
        self
    }

    /// Total rows a full pass will write.
    pub fn expected_rows(&self) -> u64 {
        self.catalog.len() as u64 * self.grid.len()
    }

    pub fn emit<R, W>(&mut self, rng: &mut R, sink: &mut RowSink<W>) -> Result<EmitStats>
    where
        R: Rng + ?Sized,
        W: Write,
    {
        let total = self.expected_rows();
        let mut stats = EmitStats::new();
        debug!(total_rows = total, "emitting rows");
        for time in self.grid.iter() {
            for tuple in self.catalog {
                let row = MessageRow::new(
                    time,
                    &tuple.channel,
                    &tuple.subtopic,
                    &tuple.publisher,
                    &tuple.name,
                    rng.random_range(VALUE_RANGE),
                );
                sink.write_row(&row)?;
                stats.record_row();
            }
            stats.record_group();
            if self.progress.due() {
                let pct = if total > 0 {
                    stats.rows as f64 * 100.0 / total as f64
                } else {
                    100.0
                };
                info!(
                    rows = stats.rows,
                    total_rows = total,
                    rows_per_sec = stats.throughput() as u64,
                    "progress {:.1}%",
                    pct
                );
            }
        }
        Ok(stats)
    }
}
