//! Configuration for the Analyzer

use std::time::Duration;

/// Default inter-pair delay (milliseconds)
pub const DEFAULT_RATE_LIMIT_DELAY_MS: u64 = 500;

/// Configuration for the pairwise analysis loop
///
/// Provider-side settings (model, temperature, retries) live in the
/// provider's own configuration; this only covers orchestration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Fixed delay applied after every pair, success or failure. This is
    /// a global throughput throttle, not an error backoff.
    pub rate_limit_delay_ms: u64,
}

impl AnalyzerConfig {
    /// Config with a specific inter-pair delay
    pub fn with_delay_ms(rate_limit_delay_ms: u64) -> Self {
        Self {
            rate_limit_delay_ms,
        }
    }

    /// The inter-pair delay as a Duration
    pub fn rate_limit_delay(&self) -> Duration {
        Duration::from_millis(self.rate_limit_delay_ms)
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            rate_limit_delay_ms: DEFAULT_RATE_LIMIT_DELAY_MS,
        }
    }
}
