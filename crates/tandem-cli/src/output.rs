//! Output formatting for the CLI.

use crate::cli::FormatArg;
use colored::*;
use tandem_analyzer::AnalysisReport;
use tandem_domain::RelationshipType;
use tandem_graph::NetworkStats;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a section header.
    pub fn header(&self, message: &str) -> String {
        self.colorize(message, "bold")
    }

    /// Format network statistics.
    pub fn format_stats(&self, stats: &NetworkStats, format: FormatArg) -> anyhow::Result<String> {
        match format {
            FormatArg::Json => Ok(serde_json::to_string_pretty(stats)?),
            FormatArg::Table => Ok(self.format_stats_table(stats)),
        }
    }

    /// Format network statistics as tables.
    fn format_stats_table(&self, stats: &NetworkStats) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Metric", "Value"]);
        builder.push_record(["Businesses", &stats.total_businesses.to_string()]);
        builder.push_record(["Relationships", &stats.total_relationships.to_string()]);
        builder.push_record(["Connected businesses", &stats.connected_businesses.to_string()]);
        builder.push_record(["Avg connections", &format!("{:.1}", stats.avg_connections)]);
        builder.push_record(["Avg confidence", &format!("{}%", stats.avg_confidence)]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        let mut out = table.to_string();

        if !stats.type_breakdown.is_empty() {
            out.push_str("\n\n");
            out.push_str(&self.header("Relationships by type"));
            out.push('\n');
            out.push_str(&breakdown_table(&stats.type_breakdown));
        }

        if !stats.most_connected.is_empty() {
            out.push_str("\n\n");
            out.push_str(&self.header("Most connected"));
            out.push('\n');

            let mut builder = Builder::default();
            builder.push_record(["Business", "Industry", "Connections"]);
            for entry in &stats.most_connected {
                builder.push_record([
                    entry.business.name.as_str(),
                    entry.business.industry.label(),
                    &entry.connections.to_string(),
                ]);
            }
            let mut table = builder.build();
            table
                .with(Style::rounded())
                .with(Modify::new(Rows::first()).with(Alignment::center()));
            out.push_str(&table.to_string());
        }

        out
    }

    /// Format the closing summary of an analysis run.
    pub fn format_report(&self, report: &AnalysisReport) -> String {
        let mut out = String::new();
        out.push_str(&self.header("Analysis complete"));
        out.push('\n');
        out.push_str(&format!(
            "  Pairs: {} evaluated, {} failed, {} skipped\n",
            report.pairs_evaluated, report.pairs_failed, report.pairs_skipped
        ));
        out.push_str(&format!(
            "  Relationships found: {}\n",
            report.relationships.len()
        ));
        if !report.relationships.is_empty() {
            out.push_str(&format!(
                "  Average confidence: {:.0}%\n",
                report.avg_confidence()
            ));
        }
        out.push_str(&format!("  Duration: {:.1}s", report.elapsed.as_secs_f64()));

        let breakdown = report.type_breakdown();
        if !breakdown.is_empty() {
            out.push('\n');
            out.push_str(&breakdown_table(&breakdown));
        }
        out
    }

    fn colorize(&self, text: &str, style: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }
        match style {
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "blue" => text.blue().to_string(),
            "red" => text.red().to_string(),
            "bold" => text.bold().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Render a type breakdown in label order for stable output.
fn breakdown_table(breakdown: &std::collections::HashMap<RelationshipType, usize>) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Type", "Count"]);
    for rel_type in RelationshipType::ALL {
        if let Some(count) = breakdown.get(&rel_type) {
            builder.push_record([rel_type.label(), &count.to_string()]);
        }
    }
    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}
