//! Tandem Analyzer
//!
//! Pairwise relationship discovery: for each pair of business profiles,
//! ask a completion provider to evaluate potential partnerships and
//! normalize the structured response into [`RelationshipEdge`]s.
//!
//! # Architecture
//!
//! ```text
//! BusinessRecords -> Analyzer -> prompt -> CompletionProvider
//!                                             |
//!                 RelationshipEdges <- parser (fail closed per pair)
//! ```
//!
//! # Key properties
//!
//! - Every unordered pair is visited exactly once, in deterministic
//!   order (outer index, inner index, i < j)
//! - A malformed response invalidates that pair entirely; no partial
//!   acceptance
//! - Per-pair failures are logged and contained; a batch never aborts
//!   because one pair failed
//! - A fixed inter-pair delay throttles overall API throughput
//!
//! # Example
//!
//! ```
//! use tandem_analyzer::{Analyzer, AnalyzerConfig};
//! use tandem_llm::MockProvider;
//!
//! # async fn example(businesses: Vec<tandem_domain::BusinessRecord>) {
//! let provider = MockProvider::new(r#"{"relationships": []}"#);
//! let analyzer = Analyzer::new(provider, AnalyzerConfig::default());
//! let report = analyzer.analyze_all(&businesses).await;
//! println!("{} edges from {} pairs", report.relationships.len(), report.pairs_evaluated);
//! # }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod config;
mod error;
mod parser;
mod prompt;

#[cfg(test)]
mod tests;

pub use analyzer::{new_businesses, AnalysisReport, Analyzer};
pub use config::AnalyzerConfig;
pub use error::AnalyzerError;
pub use parser::{parse_pair_response, PairAnalysis, PairSlot, ProposedRelationship};
pub use prompt::{build_analysis_prompt, SYSTEM_PROMPT};
