//! Business records - the fundamental unit of the network

use crate::industry::Industry;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Fixed namespace for UUIDv5 derivation. Generated once, never changes;
/// changing it would re-key every business on the next parse.
const ID_NAMESPACE: Uuid = Uuid::from_u128(0x6ba7_b810_9dad_11d1_80b4_00c0_4fd4_30c8);

/// Unique identifier for a business, derived deterministically
///
/// The id is a UUIDv5 over `name + US + contact_email`. Re-parsing an
/// unchanged CSV row therefore yields the same id across runs, which is
/// what incremental analysis relies on to tell new businesses from
/// already-analyzed ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BusinessId(Uuid);

impl BusinessId {
    /// Derive the id for a business from its stable source fields
    ///
    /// # Examples
    ///
    /// ```
    /// use tandem_domain::BusinessId;
    ///
    /// let a = BusinessId::derive("Acme Corp", "info@acme.example");
    /// let b = BusinessId::derive("Acme Corp", "info@acme.example");
    /// assert_eq!(a, b);
    ///
    /// let c = BusinessId::derive("Acme Corp", "other@acme.example");
    /// assert_ne!(a, c);
    /// ```
    pub fn derive(name: &str, contact_email: &str) -> Self {
        // Unit separator keeps ("ab", "c") distinct from ("a", "bc")
        let material = format!("{}\u{1f}{}", name, contact_email);
        Self(Uuid::new_v5(&ID_NAMESPACE, material.as_bytes()))
    }

    /// Parse an id from its canonical string form
    pub fn parse(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| format!("Invalid business id '{}': {}", s, e))
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for BusinessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A business profile parsed from one CSV row
///
/// Records are immutable once created. The full set is persisted as a
/// JSON array and read back verbatim; nothing downstream mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessRecord {
    /// Deterministic identifier (see [`BusinessId`])
    pub id: BusinessId,

    /// Company or brand name
    pub name: String,

    /// Primary contact person
    pub contact_name: String,

    /// One-sentence product/service description
    pub description: String,

    /// Website URL, empty when not provided
    pub website: String,

    /// Ideal client / target market
    pub target_market: String,

    /// Current need (capital, marketing, legal, tech, ...)
    pub current_needs: String,

    /// Contact email, empty when not provided
    pub contact_email: String,

    /// Contact phone, empty when not provided
    pub contact_phone: String,

    /// LinkedIn profile URL, empty when not provided
    pub linkedin: String,

    /// Fun fact from the intake form, empty when not provided
    pub fun_fact: String,

    /// Industry category inferred at parse time
    pub industry: Industry,

    /// Services offered (raw source text, not sanitized defaults)
    pub services: String,
}
