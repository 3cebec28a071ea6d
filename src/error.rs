use std::io;

/// Failures that abort a generation run. There is no recoverable variant: the
/// caller re-runs from scratch.
#[derive(thiserror::Error, Debug)]
pub enum FixtureError {
    #[error("io: {0}")]
    Io(#[from] io::Error),
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("window start {days} days before {now} is not representable in nanoseconds")]
    TimestampOutOfRange { days: u32, now: String },
}

pub type Result<T> = std::result::Result<T, FixtureError>;
