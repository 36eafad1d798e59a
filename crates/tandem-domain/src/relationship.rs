//! Relationship edges - directed, typed, confidence-scored inferences

use crate::business::BusinessId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel used when the model provides no concrete collaboration example
pub const NO_EXAMPLE_SENTINEL: &str = "No specific example provided";

/// Sentinel used when the model provides no synergy description
pub const NO_SYNERGY_SENTINEL: &str = "Complementary business synergy";

/// Type of relationship between two businesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    /// One business provides services to the other (directional)
    Vendor,

    /// Joint offerings (mutual)
    Partner,

    /// Similar customers without competing (mutual)
    Referral,

    /// Shared projects or events (mutual)
    Collaboration,

    /// Sequential services in a customer journey (directional)
    SupplyChain,
}

impl RelationshipType {
    /// All types, in taxonomy order
    pub const ALL: [RelationshipType; 5] = [
        RelationshipType::Vendor,
        RelationshipType::Partner,
        RelationshipType::Referral,
        RelationshipType::Collaboration,
        RelationshipType::SupplyChain,
    ];

    /// Wire name, identical to the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipType::Vendor => "vendor",
            RelationshipType::Partner => "partner",
            RelationshipType::Referral => "referral",
            RelationshipType::Collaboration => "collaboration",
            RelationshipType::SupplyChain => "supply_chain",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            RelationshipType::Vendor => "Vendor",
            RelationshipType::Partner => "Partner",
            RelationshipType::Referral => "Referral",
            RelationshipType::Collaboration => "Collaboration",
            RelationshipType::SupplyChain => "Supply Chain",
        }
    }

    /// Display color (hex) used by graph renderers
    pub fn color(&self) -> &'static str {
        match self {
            RelationshipType::Vendor => "#00D9FF",
            RelationshipType::Partner => "#8B5CF6",
            RelationshipType::Referral => "#10B981",
            RelationshipType::Collaboration => "#F59E0B",
            RelationshipType::SupplyChain => "#EC4899",
        }
    }

    /// Parse a wire name back into a type
    pub fn from_str_opt(s: &str) -> Option<Self> {
        RelationshipType::ALL.iter().copied().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rough value bucket assigned by the analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstimatedValue {
    /// Significant revenue or cost impact
    High,
    /// Moderate impact
    Medium,
    /// Marginal impact
    Low,
}

/// A directed relationship inferred between two distinct businesses
///
/// Edges are produced in batches (one analysis call per unordered pair
/// yields zero or more edges) and only ever accumulated, never mutated.
/// A pair may legitimately carry edges in both directions; those are
/// distinct edges, not duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipEdge {
    /// Source business
    pub from_id: BusinessId,

    /// Target business, never equal to `from_id`
    pub to_id: BusinessId,

    /// Source business name, denormalized for display
    pub from_name: String,

    /// Target business name, denormalized for display
    pub to_name: String,

    /// Kind of relationship
    #[serde(rename = "type")]
    pub relationship_type: RelationshipType,

    /// Model-assessed strength, 0-100 inclusive
    pub confidence: u8,

    /// Why this relationship makes business sense
    pub reasoning: String,

    /// Quantifiable benefit (revenue, cost savings, market access)
    pub value_prop: String,

    /// Concrete scenario of the partnership in practice
    pub collaboration_example: String,

    /// What makes this specific pairing special
    pub synergy_potential: String,

    /// Concrete next steps
    pub action_items: Vec<String>,

    /// Rough value bucket
    pub estimated_value: EstimatedValue,

    /// Whether the pair analysis judged the benefit mutual; shared by
    /// every edge produced from the same call
    pub mutual_benefit: bool,
}

impl RelationshipEdge {
    /// Check the structural invariants: distinct endpoints, confidence in range
    pub fn validate(&self) -> Result<(), String> {
        if self.from_id == self.to_id {
            return Err(format!("self-edge on business {}", self.from_id));
        }
        if self.confidence > 100 {
            return Err(format!("confidence {} out of range [0, 100]", self.confidence));
        }
        Ok(())
    }

    /// True when this edge touches the given business on either end
    pub fn touches(&self, id: BusinessId) -> bool {
        self.from_id == id || self.to_id == id
    }
}
