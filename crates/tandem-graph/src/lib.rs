//! Tandem Graph Layer
//!
//! Pure, deterministic derivation of graph views and network statistics
//! from the persisted collections. Nothing here touches disk or holds
//! hidden state: `(businesses, relationships, filter)` in, `{nodes,
//! links}` out, identical inputs always producing identical outputs.
//!
//! The [`GraphView`] JSON emitted here is the sole contract with
//! external renderers (force-graph UIs, PDF reports).

#![warn(missing_docs)]

mod builder;
mod stats;

pub use builder::{
    build_graph, business_relationships, filter_graph_by_node, AnnotatedRelationship,
    Direction, GraphFilter, GraphLink, GraphNode, GraphView,
};
pub use stats::{network_stats, search_businesses, unique_industries, ConnectedBusiness, NetworkStats};
