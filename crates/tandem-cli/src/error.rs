//! Error types for the CLI application.

use thiserror::Error;

/// CLI-specific errors. Library errors reach the top level through
/// `anyhow`; these cover failures the CLI itself detects.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No persisted data to operate on
    #[error("No stored data found in {0}. Run 'tandem analyze' first.")]
    MissingData(String),
}
