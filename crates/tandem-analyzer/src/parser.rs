//! Parse and validate the model's pair-analysis response
//!
//! Validation is fail-closed: a response is either accepted whole or
//! rejected whole. One malformed element poisons the entire relationship
//! list for that pair; there is no partial acceptance.

use crate::error::AnalyzerError;
use serde::Deserialize;
use tandem_domain::{EstimatedValue, RelationshipType};

/// Symbolic endpoint label used in prompts and responses
///
/// The model never sees business ids; it refers to the pair as
/// "Business A" and "Business B". Any other label is a protocol
/// violation and rejects the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PairSlot {
    /// The first business of the pair
    #[serde(rename = "Business A")]
    A,
    /// The second business of the pair
    #[serde(rename = "Business B")]
    B,
}

/// One relationship proposed by the model, still in symbolic form
#[derive(Debug, Clone, Deserialize)]
pub struct ProposedRelationship {
    /// Symbolic source endpoint
    pub from: PairSlot,
    /// Symbolic target endpoint
    pub to: PairSlot,
    /// Relationship type
    #[serde(rename = "type")]
    pub relationship_type: RelationshipType,
    /// Confidence score; validated against [0, 100] after parsing
    pub confidence: i64,
    /// Why the relationship makes sense
    #[serde(default)]
    pub reasoning: String,
    /// Quantifiable benefit
    #[serde(default)]
    pub value_prop: String,
    /// Concrete partnership scenario, sentinel-defaulted when absent
    #[serde(default = "default_collaboration_example")]
    pub collaboration_example: String,
    /// Pairing-specific synergy, sentinel-defaulted when absent
    #[serde(default = "default_synergy_potential")]
    pub synergy_potential: String,
    /// Concrete next steps
    #[serde(default)]
    pub action_items: Vec<String>,
    /// Rough value bucket
    #[serde(default = "default_estimated_value")]
    pub estimated_value: EstimatedValue,
}

fn default_collaboration_example() -> String {
    tandem_domain::relationship::NO_EXAMPLE_SENTINEL.to_string()
}

fn default_synergy_potential() -> String {
    tandem_domain::relationship::NO_SYNERGY_SENTINEL.to_string()
}

fn default_estimated_value() -> EstimatedValue {
    EstimatedValue::Medium
}

/// The validated result of one pair-analysis call
#[derive(Debug, Clone, Deserialize)]
pub struct PairAnalysis {
    /// Zero or more proposed relationships
    pub relationships: Vec<ProposedRelationship>,
    /// Whether the model judged the benefit mutual; applies to every
    /// relationship in this response
    #[serde(default)]
    pub mutual_benefit: bool,
}

/// Parse the raw response text into a validated [`PairAnalysis`]
///
/// Markdown code fences are stripped first; models wrap JSON in them
/// despite instructions. Any shape violation (missing `relationships`
/// array, unknown endpoint label or type, confidence outside [0, 100])
/// rejects the whole response.
pub fn parse_pair_response(response: &str) -> Result<PairAnalysis, AnalyzerError> {
    let json = strip_code_fences(response);

    let analysis: PairAnalysis = serde_json::from_str(&json)
        .map_err(|e| AnalyzerError::InvalidFormat(format!("JSON parse error: {}", e)))?;

    for (idx, rel) in analysis.relationships.iter().enumerate() {
        if !(0..=100).contains(&rel.confidence) {
            return Err(AnalyzerError::InvalidFormat(format!(
                "relationship {}: confidence {} out of range [0, 100]",
                idx, rel.confidence
            )));
        }
    }

    Ok(analysis)
}

/// Strip a markdown code-fence wrapper, if present
fn strip_code_fences(response: &str) -> String {
    let trimmed = response.trim();
    if !trimmed.starts_with("```") {
        return trimmed.to_string();
    }

    let lines: Vec<&str> = trimmed.lines().collect();
    if lines.len() < 2 {
        return String::new();
    }

    // Drop the opening ``` / ```json line and the closing ``` line
    let end = if lines[lines.len() - 1].trim() == "```" {
        lines.len() - 1
    } else {
        lines.len()
    };
    lines[1..end].join("\n")
}
