//! Synthetic telemetry fixture generator.
//!
//! Builds a catalog of (channel, subtopic, publisher, metric) series, expands it
//! over an evenly spaced time window and streams one CSV row per
//! (timestamp, series) pair, ready for bulk-loading into a time-series table.

pub mod catalog;
pub mod config;
pub mod emitter;
pub mod error;
pub mod generate;
pub mod ids;
pub mod logging;
pub mod metrics;
pub mod output;
pub mod progress;
pub mod time_grid;

pub use catalog::{EntityCatalog, EntityTuple};
pub use config::GeneratorConfig;
pub use emitter::{MessageRow, RowEmitter};
pub use error::{FixtureError, Result};
pub use generate::{Generator, generate, generate_to_writer};
pub use ids::{IdSource, RandomIds, SeededIds, SequentialIds};
pub use metrics::stats::RunSummary;
pub use output::RowSink;
pub use time_grid::TimeGrid;
