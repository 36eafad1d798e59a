//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tandem_domain::RelationshipType;

/// Tandem CLI - Discover partnership opportunities across a business network.
#[derive(Debug, Parser)]
#[command(name = "tandem")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory for persisted businesses and relationships
    #[arg(long, global = true, env = "TANDEM_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze every pair of businesses in a CSV export
    Analyze(AnalyzeArgs),

    /// Analyze only businesses added since the last run
    Incremental(IncrementalArgs),

    /// Show aggregate statistics for the stored network
    Stats(StatsArgs),

    /// Emit the network as renderer-ready graph JSON
    Graph(GraphArgs),
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Path to the business intake CSV
    #[arg(long)]
    pub csv: PathBuf,

    /// Analyze only the first N businesses
    #[arg(long)]
    pub sample: Option<usize>,

    #[command(flatten)]
    pub llm: LlmArgs,
}

/// Arguments for the incremental command.
#[derive(Debug, Parser)]
pub struct IncrementalArgs {
    /// Path to the refreshed business intake CSV
    #[arg(long)]
    pub csv: PathBuf,

    #[command(flatten)]
    pub llm: LlmArgs,
}

/// Arguments for the stats command.
#[derive(Debug, Parser)]
pub struct StatsArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: FormatArg,
}

/// Arguments for the graph command.
#[derive(Debug, Parser)]
pub struct GraphArgs {
    /// Drop relationships below this confidence
    #[arg(long, default_value = "50")]
    pub min_confidence: u8,

    /// Keep only these relationship types (repeatable)
    #[arg(long = "type", value_enum)]
    pub types: Vec<TypeArg>,

    /// Keep only businesses in these industries (repeatable)
    #[arg(long = "industry")]
    pub industries: Vec<String>,

    /// Restrict to one business and its direct partners (name or id)
    #[arg(long)]
    pub focus: Option<String>,

    /// Write JSON to this path instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Provider settings shared by the analysis commands.
#[derive(Debug, Args)]
pub struct LlmArgs {
    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Model name
    #[arg(long, env = "OPENAI_MODEL", default_value = "gpt-4o")]
    pub model: String,

    /// Sampling temperature
    #[arg(long, env = "OPENAI_TEMPERATURE", default_value = "0.7")]
    pub temperature: f32,

    /// Completion token budget per request
    #[arg(long, env = "OPENAI_MAX_TOKENS", default_value = "1000")]
    pub max_tokens: u32,

    /// Retry attempts for rate-limited or failing requests
    #[arg(long, env = "MAX_RETRIES", default_value = "3")]
    pub max_retries: u32,

    /// Milliseconds to wait between pair analyses
    #[arg(long, env = "RATE_LIMIT_DELAY", default_value = "500")]
    pub rate_limit_delay: u64,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum FormatArg {
    /// Human-readable table (default)
    Table,
    /// JSON format
    Json,
}

/// Relationship type filter values.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum TypeArg {
    /// One business supplies products or services to the other
    Vendor,
    /// Strategic alliance or joint venture
    Partner,
    /// One business refers clients to the other
    Referral,
    /// Joint projects or co-creation
    Collaboration,
    /// One business is part of the other's supply chain
    SupplyChain,
}

impl From<TypeArg> for RelationshipType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Vendor => RelationshipType::Vendor,
            TypeArg::Partner => RelationshipType::Partner,
            TypeArg::Referral => RelationshipType::Referral,
            TypeArg::Collaboration => RelationshipType::Collaboration,
            TypeArg::SupplyChain => RelationshipType::SupplyChain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_type_arg_conversion() {
        assert_eq!(
            RelationshipType::from(TypeArg::SupplyChain),
            RelationshipType::SupplyChain
        );
    }
}
