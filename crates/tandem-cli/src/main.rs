//! Tandem CLI - Discover partnership opportunities across a business network.

use clap::Parser;
use tandem_cli::commands;
use tandem_cli::{Cli, Command, Formatter};
use tandem_store::JsonStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let formatter = Formatter::new(!cli.no_color);
    let store = JsonStore::new(&cli.data_dir);

    match cli.command {
        Command::Analyze(args) => commands::execute_analyze(args, &store, &formatter).await?,
        Command::Incremental(args) => {
            commands::execute_incremental(args, &store, &formatter).await?
        }
        Command::Stats(args) => commands::execute_stats(args, &store, &formatter)?,
        Command::Graph(args) => commands::execute_graph(args, &store, &formatter)?,
    }

    Ok(())
}
