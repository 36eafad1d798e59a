//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::error::CliError;
use crate::output::Formatter;
use anyhow::Result;
use tandem_ingest::parse_csv_path;
use tandem_store::JsonStore;

/// Execute the analyze command: full pairwise analysis of a CSV export.
pub async fn execute_analyze(
    args: AnalyzeArgs,
    store: &JsonStore,
    formatter: &Formatter,
) -> Result<()> {
    let outcome = parse_csv_path(&args.csv)?;
    let mut businesses = outcome.businesses;
    if outcome.rows_skipped > 0 {
        println!(
            "{}",
            formatter.warning(&format!("Skipped {} malformed rows", outcome.rows_skipped))
        );
    }

    if let Some(n) = args.sample {
        businesses.truncate(n);
    }

    if businesses.len() < 2 {
        return Err(CliError::InvalidInput(format!(
            "Need at least two businesses to analyze, found {}",
            businesses.len()
        ))
        .into());
    }

    store.save_businesses(&businesses)?;
    println!(
        "{}",
        formatter.success(&format!(
            "Loaded {} businesses, saved to {}",
            businesses.len(),
            store.businesses_path().display()
        ))
    );

    let pairs = businesses.len() * (businesses.len() - 1) / 2;
    println!(
        "{}",
        formatter.info(&format!("Analyzing {} business pairs...", pairs))
    );

    let analyzer = super::build_analyzer(&args.llm)?;
    let report = analyzer.analyze_all(&businesses).await;

    store.save_relationships(&report.relationships)?;
    println!(
        "{}",
        formatter.success(&format!(
            "Saved {} relationships to {}",
            report.relationships.len(),
            store.relationships_path().display()
        ))
    );
    println!("{}", formatter.format_report(&report));

    Ok(())
}
