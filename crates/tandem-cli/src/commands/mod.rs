//! Command implementations.

pub mod analyze;
pub mod graph;
pub mod incremental;
pub mod stats;

pub use self::analyze::execute_analyze;
pub use self::graph::execute_graph;
pub use self::incremental::execute_incremental;
pub use self::stats::execute_stats;

use crate::cli::LlmArgs;
use anyhow::Result;
use tandem_analyzer::{Analyzer, AnalyzerConfig};
use tandem_llm::{OpenAiConfig, OpenAiProvider};

/// Build an analyzer over a live provider from the shared LLM arguments.
pub(crate) fn build_analyzer(args: &LlmArgs) -> Result<Analyzer<OpenAiProvider>> {
    let mut config = OpenAiConfig::new(&args.api_key);
    config.model = args.model.clone();
    config.temperature = args.temperature;
    config.max_tokens = args.max_tokens;
    config.max_retries = args.max_retries;

    let provider = OpenAiProvider::new(config)?;
    Ok(Analyzer::new(
        provider,
        AnalyzerConfig::with_delay_ms(args.rate_limit_delay),
    ))
}
