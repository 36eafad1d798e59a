//! Error types for CSV ingestion

use thiserror::Error;

/// Errors that can occur while reading the intake CSV
///
/// These are the fatal cases only; individually malformed rows are
/// skipped and counted, not raised.
#[derive(Error, Debug)]
pub enum IngestError {
    /// Source file missing or unreadable
    #[error("Cannot read CSV file: {0}")]
    Io(#[from] std::io::Error),

    /// The file header could not be parsed at all
    #[error("Invalid CSV: {0}")]
    Csv(#[from] csv::Error),
}
