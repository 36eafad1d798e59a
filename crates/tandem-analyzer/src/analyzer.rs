//! Core pairwise analysis loop

use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::parser::{parse_pair_response, PairSlot};
use crate::prompt::{build_analysis_prompt, SYSTEM_PROMPT};
use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};
use tandem_domain::{BusinessRecord, RelationshipEdge, RelationshipType};
use tandem_llm::{ChatRequest, CompletionProvider};
use tracing::{error, info, warn};

/// Outcome of one analysis run
#[derive(Debug, Clone, Default)]
pub struct AnalysisReport {
    /// All edges gathered, in pair-processing order
    pub relationships: Vec<RelationshipEdge>,

    /// Pairs whose analysis completed (including empty results)
    pub pairs_evaluated: usize,

    /// Pairs that failed (provider or response errors)
    pub pairs_failed: usize,

    /// Pairs skipped because both records shared one id
    pub pairs_skipped: usize,

    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

impl AnalysisReport {
    /// Mean confidence over gathered edges, 0.0 when empty
    pub fn avg_confidence(&self) -> f64 {
        if self.relationships.is_empty() {
            return 0.0;
        }
        let total: u32 = self
            .relationships
            .iter()
            .map(|r| u32::from(r.confidence))
            .sum();
        total as f64 / self.relationships.len() as f64
    }

    /// Edge count per relationship type
    pub fn type_breakdown(&self) -> HashMap<RelationshipType, usize> {
        let mut breakdown = HashMap::new();
        for edge in &self.relationships {
            *breakdown.entry(edge.relationship_type).or_insert(0) += 1;
        }
        breakdown
    }
}

/// Businesses present in `fresh` but absent from `existing`, by id
///
/// The diff relies on deterministic ids: a business keeps its id across
/// parses as long as its name and contact email are unchanged.
pub fn new_businesses(
    fresh: &[BusinessRecord],
    existing: &[BusinessRecord],
) -> Vec<BusinessRecord> {
    let known: HashSet<_> = existing.iter().map(|b| b.id).collect();
    fresh
        .iter()
        .filter(|b| !known.contains(&b.id))
        .cloned()
        .collect()
}

/// Orchestrates pairwise relationship analysis over a completion provider
///
/// Strictly sequential: one provider call in flight at a time, pairs
/// visited in deterministic order, edges appended in that order.
pub struct Analyzer<P: CompletionProvider> {
    provider: P,
    config: AnalyzerConfig,
}

impl<P: CompletionProvider> Analyzer<P> {
    /// Create an analyzer over a provider
    pub fn new(provider: P, config: AnalyzerConfig) -> Self {
        Self { provider, config }
    }

    /// Analyze every unordered pair among `businesses` exactly once
    ///
    /// Visits pairs as (i, j) with i < j. Per-pair failures are logged
    /// and contained; whatever edges were gathered are returned even if
    /// every later pair failed.
    pub async fn analyze_all(&self, businesses: &[BusinessRecord]) -> AnalysisReport {
        let total = businesses.len() * businesses.len().saturating_sub(1) / 2;
        info!("Analyzing {} pairs across {} businesses", total, businesses.len());

        let start = Instant::now();
        let mut report = AnalysisReport::default();
        let mut pair_number = 0;

        for i in 0..businesses.len() {
            for j in (i + 1)..businesses.len() {
                pair_number += 1;
                self.process_pair(&mut report, &businesses[i], &businesses[j], pair_number, total)
                    .await;
            }
        }

        report.elapsed = start.elapsed();
        self.log_summary(&report);
        report
    }

    /// Analyze each new business against every existing one
    ///
    /// Incremental mode: pairs between two new businesses are NOT
    /// analyzed, and existing pairs are never reprocessed.
    pub async fn analyze_incremental(
        &self,
        new: &[BusinessRecord],
        existing: &[BusinessRecord],
    ) -> AnalysisReport {
        let total = new.len() * existing.len();
        info!(
            "Incremental analysis: {} new x {} existing = {} pairs",
            new.len(),
            existing.len(),
            total
        );

        let start = Instant::now();
        let mut report = AnalysisReport::default();
        let mut pair_number = 0;

        for new_biz in new {
            info!("Analyzing new business: {}", new_biz.name);
            for existing_biz in existing {
                pair_number += 1;
                self.process_pair(&mut report, new_biz, existing_biz, pair_number, total)
                    .await;
            }
        }

        report.elapsed = start.elapsed();
        self.log_summary(&report);
        report
    }

    /// Run one pair end to end, containing any error at this boundary
    async fn process_pair(
        &self,
        report: &mut AnalysisReport,
        a: &BusinessRecord,
        b: &BusinessRecord,
        pair_number: usize,
        total: usize,
    ) {
        // Duplicate intake rows collapse to the same id; never ask the
        // model to relate a business to itself.
        if a.id == b.id {
            warn!("Skipping self-pair for {}", a.name);
            report.pairs_skipped += 1;
            return;
        }

        info!("[{}/{}] Analyzing: {} <-> {}", pair_number, total, a.name, b.name);

        match self.analyze_pair(a, b).await {
            Ok(edges) => {
                if edges.is_empty() {
                    info!("  No strong relationships found");
                } else {
                    for edge in &edges {
                        info!(
                            "  {}: {} -> {} ({}%)",
                            edge.relationship_type.label(),
                            edge.from_name,
                            edge.to_name,
                            edge.confidence
                        );
                    }
                }
                report.relationships.extend(edges);
                report.pairs_evaluated += 1;
            }
            Err(e) => {
                error!("  Error analyzing {} <-> {}: {}", a.name, b.name, e);
                report.pairs_failed += 1;
            }
        }

        // Global throughput throttle, applied regardless of outcome
        let delay = self.config.rate_limit_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    /// Analyze one pair: prompt, complete, parse, resolve endpoints
    async fn analyze_pair(
        &self,
        a: &BusinessRecord,
        b: &BusinessRecord,
    ) -> Result<Vec<RelationshipEdge>, AnalyzerError> {
        let request = ChatRequest::new(SYSTEM_PROMPT, build_analysis_prompt(a, b));
        let response = self.provider.complete(request).await?;
        let analysis = parse_pair_response(&response)?;

        let resolve = |slot: PairSlot| -> &BusinessRecord {
            match slot {
                PairSlot::A => a,
                PairSlot::B => b,
            }
        };

        let mut edges = Vec::with_capacity(analysis.relationships.len());
        for rel in &analysis.relationships {
            let from = resolve(rel.from);
            let to = resolve(rel.to);

            let edge = RelationshipEdge {
                from_id: from.id,
                to_id: to.id,
                from_name: from.name.clone(),
                to_name: to.name.clone(),
                relationship_type: rel.relationship_type,
                confidence: rel.confidence as u8,
                reasoning: rel.reasoning.clone(),
                value_prop: rel.value_prop.clone(),
                collaboration_example: rel.collaboration_example.clone(),
                synergy_potential: rel.synergy_potential.clone(),
                action_items: rel.action_items.clone(),
                estimated_value: rel.estimated_value,
                mutual_benefit: analysis.mutual_benefit,
            };

            // The model can point both endpoints at the same slot
            if edge.from_id == edge.to_id {
                warn!("Dropping self-edge proposed for {}", edge.from_name);
                continue;
            }

            edges.push(edge);
        }

        Ok(edges)
    }

    fn log_summary(&self, report: &AnalysisReport) {
        info!(
            "Analysis complete: {} edges from {} pairs ({} failed, {} skipped) in {:.2}s",
            report.relationships.len(),
            report.pairs_evaluated,
            report.pairs_failed,
            report.pairs_skipped,
            report.elapsed.as_secs_f64()
        );
    }
}
