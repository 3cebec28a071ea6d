use crate::catalog::EntityCatalog;
use crate::config::GeneratorConfig;
use crate::emitter::RowEmitter;
use crate::error::Result;
use crate::ids::IdSource;
use crate::metrics::stats::RunSummary;
use crate::output::RowSink;
use crate::time_grid::TimeGrid;
use rand::Rng;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::info;

/// One generation run: catalog and time grid up front, then a single
/// streaming pass over their cross product.
pub struct Generator {
    config: GeneratorConfig,
    progress_interval: Duration,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            progress_interval: Duration::from_secs(5),
        }
    }

    pub fn progress_interval(mut self, interval: Duration) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Write the fixture to `path`, replacing whatever is there.
    pub fn run_to_path<I, R>(
        &self,
        ids: &mut I,
        rng: &mut R,
        path: impl AsRef<Path>,
    ) -> Result<RunSummary>
    where
        I: IdSource + ?Sized,
        R: Rng + ?Sized,
    {
        let path = path.as_ref();
        let (catalog, grid) = self.prepare(ids)?;
        let sink = RowSink::create(path)?;
        let (mut summary, _) = self.emit(&catalog, &grid, rng, sink)?;
        summary.path = Some(PathBuf::from(path));
        Ok(summary)
    }

    /// Same as [`Generator::run_to_path`] over an arbitrary writer.
    /// Returns the writer once flushed.
    pub fn run_to_writer<I, R, W>(
        &self,
        ids: &mut I,
        rng: &mut R,
        writer: W,
    ) -> Result<(RunSummary, W)>
    where
        I: IdSource + ?Sized,
        R: Rng + ?Sized,
        W: Write,
    {
        let (catalog, grid) = self.prepare(ids)?;
        let sink = RowSink::from_writer(writer)?;
        self.emit(&catalog, &grid, rng, sink)
    }

    fn prepare<I: IdSource + ?Sized>(&self, ids: &mut I) -> Result<(EntityCatalog, TimeGrid)> {
        info!(
            config = ?self.config,
            expected_rows = self.config.row_count(),
            "generating fixture"
        );
        let catalog = EntityCatalog::build(&self.config, ids);
        let grid = TimeGrid::ending_now(self.config.window_days, self.config.interval_minutes)?;
        Ok((catalog, grid))
    }

    fn emit<R, W>(
        &self,
        catalog: &EntityCatalog,
        grid: &TimeGrid,
        rng: &mut R,
        mut sink: RowSink<W>,
    ) -> Result<(RunSummary, W)>
    where
        R: Rng + ?Sized,
        W: Write,
    {
        let started = Instant::now();
        let stats = RowEmitter::new(catalog, grid)
            .with_progress_interval(self.progress_interval)
            .emit(rng, &mut sink)?;
        let writer = sink.finish()?;
        let summary = RunSummary {
            config: self.config,
            path: None,
            channels: catalog.distinct_channels(),
            publishers: catalog.distinct_publishers(),
            catalog_size: catalog.len(),
            timestamps: grid.len(),
            rows: stats.rows,
            elapsed: started.elapsed(),
        };
        info!(
            rows = summary.rows,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "fixture written"
        );
        Ok((summary, writer))
    }
}

/// Write a fixture for `config` to `path`.
pub fn generate<I, R>(
    config: &GeneratorConfig,
    ids: &mut I,
    rng: &mut R,
    path: impl AsRef<Path>,
) -> Result<RunSummary>
where
    I: IdSource + ?Sized,
    R: Rng + ?Sized,
{
    Generator::new(*config).run_to_path(ids, rng, path)
}

/// Write a fixture for `config` to `writer`.
pub fn generate_to_writer<I, R, W>(
    config: &GeneratorConfig,
    ids: &mut I,
    rng: &mut R,
    writer: W,
) -> Result<(RunSummary, W)>
where
    I: IdSource + ?Sized,
    R: Rng + ?Sized,
    W: Write,
{
    Generator::new(*config).run_to_writer(ids, rng, writer)
}
