//! Error types for the Analyzer

use thiserror::Error;

/// Errors that can occur while analyzing one pair
///
/// All of these are contained at the pair boundary by the batch loop;
/// none of them aborts a run.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Completion provider failure (after its own retries)
    #[error("LLM error: {0}")]
    Llm(#[from] tandem_llm::LlmError),

    /// Response text was not the expected JSON document
    #[error("Invalid response format: {0}")]
    InvalidFormat(String),
}
