//! Stats command implementation.

use crate::cli::StatsArgs;
use crate::error::CliError;
use crate::output::Formatter;
use anyhow::Result;
use tandem_graph::network_stats;
use tandem_store::JsonStore;

/// Execute the stats command.
pub fn execute_stats(args: StatsArgs, store: &JsonStore, formatter: &Formatter) -> Result<()> {
    if !store.has_data() {
        return Err(CliError::MissingData(store.businesses_path().display().to_string()).into());
    }

    let businesses = store.load_businesses()?;
    let relationships = store.load_relationships()?;

    let stats = network_stats(&businesses, &relationships);
    println!("{}", formatter.format_stats(&stats, args.format)?);

    Ok(())
}
