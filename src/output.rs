use crate::emitter::MessageRow;
use crate::error::Result;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Column order expected by the downstream `messages` table.
pub const HEADER: [&str; 8] = [
    "time",
    "channel",
    "subtopic",
    "publisher",
    "protocol",
    "name",
    "unit",
    "value",
];

/// Append-only CSV sink. The header goes out once, when the sink is opened.
///
/// Dropping the sink closes the underlying writer, so an aborted run never
/// leaves the file handle open.
pub struct RowSink<W: Write> {
    writer: csv::Writer<W>,
}

impl RowSink<File> {
    /// Create (or truncate) the file at `path`, creating parent directories as needed.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        println!("Writing CSV output to: {}", path.display());
        info!(path = %path.display(), "output sink opened");
        Self::from_writer(file)
    }
}

impl<W: Write> RowSink<W> {
    pub fn from_writer(inner: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(inner);
        writer.write_record(HEADER)?;
        Ok(Self { writer })
    }

    pub fn write_row(&mut self, row: &MessageRow<'_>) -> Result<()> {
        self.writer.serialize(row)?;
        Ok(())
    }

    /// Flush everything and hand back the inner writer.
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        let inner = self.writer.into_inner().map_err(|e| e.into_error())?;
        Ok(inner)
    }
}
