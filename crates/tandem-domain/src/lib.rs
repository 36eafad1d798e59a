//! Tandem Domain Layer
//!
//! Core data model for the tandem relationship-discovery pipeline.
//! Every other crate depends on this one; it holds the value types that
//! are persisted to disk and exchanged between the analyzer, the store,
//! and the graph builder.
//!
//! ## Key Concepts
//!
//! - **BusinessRecord**: one parsed CSV row, immutable once created
//! - **BusinessId**: deterministic UUIDv5 derived from stable source
//!   fields, so repeated parses of an unchanged row agree on identity
//! - **RelationshipEdge**: a directed, typed, confidence-scored inference
//!   that one business can provide value to another
//! - **Industry**: closed set of category labels inferred at parse time

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod business;
pub mod industry;
pub mod relationship;

// Re-exports for convenience
pub use business::{BusinessId, BusinessRecord};
pub use industry::Industry;
pub use relationship::{EstimatedValue, RelationshipEdge, RelationshipType};
