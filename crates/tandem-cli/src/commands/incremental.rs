//! Incremental command implementation.

use crate::cli::IncrementalArgs;
use crate::error::CliError;
use crate::output::Formatter;
use anyhow::Result;
use tandem_analyzer::new_businesses;
use tandem_ingest::parse_csv_path;
use tandem_store::JsonStore;

// Rough per-pair token footprint of the analysis prompt and response,
// used only for the upfront cost estimate.
const EST_PROMPT_TOKENS: f64 = 700.0;
const EST_COMPLETION_TOKENS: f64 = 700.0;
const PROMPT_COST_PER_MILLION: f64 = 0.15;
const COMPLETION_COST_PER_MILLION: f64 = 0.60;

/// Estimated API cost in dollars for `pairs` pair analyses.
fn estimated_cost(pairs: usize) -> f64 {
    let pairs = pairs as f64;
    (pairs * EST_PROMPT_TOKENS * PROMPT_COST_PER_MILLION
        + pairs * EST_COMPLETION_TOKENS * COMPLETION_COST_PER_MILLION)
        / 1_000_000.0
}

/// Execute the incremental command: analyze only businesses that are
/// new since the last run, pairing each against the stored roster.
pub async fn execute_incremental(
    args: IncrementalArgs,
    store: &JsonStore,
    formatter: &Formatter,
) -> Result<()> {
    if !store.has_data() {
        return Err(CliError::MissingData(store.businesses_path().display().to_string()).into());
    }

    let existing_businesses = store.load_businesses()?;

    let outcome = parse_csv_path(&args.csv)?;
    if outcome.rows_skipped > 0 {
        println!(
            "{}",
            formatter.warning(&format!("Skipped {} malformed rows", outcome.rows_skipped))
        );
    }

    let new = new_businesses(&outcome.businesses, &existing_businesses);
    if new.is_empty() {
        println!(
            "{}",
            formatter.success("No new businesses found. Network is up to date.")
        );
        return Ok(());
    }

    let pairs = new.len() * existing_businesses.len();
    println!(
        "{}",
        formatter.info(&format!(
            "Found {} new businesses: {} pairs to analyze (est. cost ${:.2})",
            new.len(),
            pairs,
            estimated_cost(pairs)
        ))
    );
    for business in &new {
        println!("  + {} ({})", business.name, business.industry.label());
    }

    let analyzer = super::build_analyzer(&args.llm)?;
    let report = analyzer.analyze_incremental(&new, &existing_businesses).await;

    let mut businesses = existing_businesses;
    businesses.extend(new);
    store.save_businesses(&businesses)?;

    let relationships = store.append_relationships(&report.relationships)?;

    println!(
        "{}",
        formatter.success(&format!(
            "Network now holds {} businesses and {} relationships",
            businesses.len(),
            relationships.len()
        ))
    );
    println!("{}", formatter.format_report(&report));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimated_cost() {
        assert_eq!(estimated_cost(0), 0.0);
        // 1000 pairs: 0.7M prompt tokens at $0.15 + 0.7M completion at $0.60
        let cost = estimated_cost(1000);
        assert!((cost - 0.525).abs() < 1e-9);
    }
}
