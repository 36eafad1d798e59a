//! Graph construction and node-focused filtering

use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tandem_domain::{BusinessId, BusinessRecord, Industry, RelationshipEdge, RelationshipType};

/// Minimum node display size
const MIN_NODE_SIZE: u32 = 5;

/// Display size gained per connection
const SIZE_PER_CONNECTION: u32 = 3;

/// Divisor mapping confidence (0-100) to link width
const LINK_WIDTH_DIVISOR: f64 = 20.0;

/// Filter criteria for graph construction
///
/// An empty `types` or `industries` vector means "no filter on that
/// axis"; `min_confidence` always applies.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphFilter {
    /// Drop edges below this confidence
    pub min_confidence: u8,

    /// Keep only these relationship types (empty = all)
    pub types: Vec<RelationshipType>,

    /// Keep only nodes in these industries (empty = all)
    pub industries: Vec<Industry>,
}

impl Default for GraphFilter {
    fn default() -> Self {
        Self {
            min_confidence: 50,
            types: Vec::new(),
            industries: Vec::new(),
        }
    }
}

/// A renderable node wrapping one business
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    /// Business id, the join key with link endpoints
    pub id: BusinessId,
    /// Business name
    pub name: String,
    /// Industry category
    pub industry: Industry,
    /// One-sentence description
    pub description: String,
    /// Degree in the filtered edge set
    pub connections: usize,
    /// Display size: `max(5, connections * 3)`
    pub val: u32,
    /// Display color keyed by industry
    pub color: &'static str,
    /// Full record for detail panels
    pub business: BusinessRecord,
}

/// A renderable link wrapping one relationship edge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphLink {
    /// Source business id
    pub source: BusinessId,
    /// Target business id
    pub target: BusinessId,
    /// Relationship type
    #[serde(rename = "type")]
    pub relationship_type: RelationshipType,
    /// Confidence score, 0-100
    pub confidence: u8,
    /// Display width: `confidence / 20`
    pub value: f64,
    /// Display color keyed by type
    pub color: &'static str,
    /// Full edge for detail panels
    pub relationship: RelationshipEdge,
}

/// The `{nodes, links}` contract consumed by renderers
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct GraphView {
    /// All surviving nodes
    pub nodes: Vec<GraphNode>,
    /// All surviving links
    pub links: Vec<GraphLink>,
}

/// Build a graph view from the two collections and a filter
///
/// Filtering order is significant and fixed: confidence first, then
/// relationship types, then degree counting over the survivors, then
/// nodes for every input business (degree 0 when unconnected), then the
/// industry node filter, and finally links whose endpoints were removed
/// by the industry filter.
pub fn build_graph(
    businesses: &[BusinessRecord],
    relationships: &[RelationshipEdge],
    filter: &GraphFilter,
) -> GraphView {
    let mut edges: Vec<&RelationshipEdge> = relationships
        .iter()
        .filter(|r| r.confidence >= filter.min_confidence)
        .collect();

    if !filter.types.is_empty() {
        edges.retain(|r| filter.types.contains(&r.relationship_type));
    }

    // Each edge increments both endpoint counters
    let mut degrees: HashMap<BusinessId, usize> = HashMap::new();
    for edge in &edges {
        *degrees.entry(edge.from_id).or_insert(0) += 1;
        *degrees.entry(edge.to_id).or_insert(0) += 1;
    }

    let mut nodes: Vec<GraphNode> = businesses
        .iter()
        .map(|business| {
            let connections = degrees.get(&business.id).copied().unwrap_or(0);
            GraphNode {
                id: business.id,
                name: business.name.clone(),
                industry: business.industry,
                description: business.description.clone(),
                connections,
                val: MIN_NODE_SIZE.max(connections as u32 * SIZE_PER_CONNECTION),
                color: business.industry.color(),
                business: business.clone(),
            }
        })
        .collect();

    if !filter.industries.is_empty() {
        nodes.retain(|n| filter.industries.contains(&n.industry));
    }

    let node_ids: HashSet<BusinessId> = nodes.iter().map(|n| n.id).collect();
    let links = edges
        .into_iter()
        .filter(|r| node_ids.contains(&r.from_id) && node_ids.contains(&r.to_id))
        .map(|r| GraphLink {
            source: r.from_id,
            target: r.to_id,
            relationship_type: r.relationship_type,
            confidence: r.confidence,
            value: f64::from(r.confidence) / LINK_WIDTH_DIVISOR,
            color: r.relationship_type.color(),
            relationship: r.clone(),
        })
        .collect();

    GraphView { nodes, links }
}

/// Reduce a graph to the 1-hop ego network of `node_id`
///
/// Keeps every link touching the node, plus every node touched by those
/// links (including the focus node itself, even when isolated). No
/// transitive expansion.
pub fn filter_graph_by_node(graph: &GraphView, node_id: BusinessId) -> GraphView {
    let links: Vec<GraphLink> = graph
        .links
        .iter()
        .filter(|l| l.source == node_id || l.target == node_id)
        .cloned()
        .collect();

    let mut keep: HashSet<BusinessId> = HashSet::new();
    keep.insert(node_id);
    for link in &links {
        keep.insert(link.source);
        keep.insert(link.target);
    }

    let nodes = graph
        .nodes
        .iter()
        .filter(|n| keep.contains(&n.id))
        .cloned()
        .collect();

    GraphView { nodes, links }
}

/// Direction of an edge relative to a focus business
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// The focus business is the edge source
    Outbound,
    /// The focus business is the edge target
    Inbound,
}

/// A relationship annotated with its direction and partner, as shown in
/// a business detail panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedRelationship {
    /// The underlying edge
    pub edge: RelationshipEdge,
    /// Direction relative to the focus business
    pub direction: Direction,
    /// The other endpoint's id
    pub partner_id: BusinessId,
    /// The other endpoint's name, or a placeholder when unknown
    pub partner_name: String,
}

/// List every relationship touching a business, highest confidence first
///
/// Ties keep their input order (stable sort), so repeated calls on the
/// same data render identically.
pub fn business_relationships(
    business_id: BusinessId,
    relationships: &[RelationshipEdge],
    businesses: &[BusinessRecord],
) -> Vec<AnnotatedRelationship> {
    let names: HashMap<BusinessId, &str> = businesses
        .iter()
        .map(|b| (b.id, b.name.as_str()))
        .collect();

    let mut annotated: Vec<AnnotatedRelationship> = relationships
        .iter()
        .filter(|r| r.touches(business_id))
        .map(|r| {
            let direction = if r.from_id == business_id {
                Direction::Outbound
            } else {
                Direction::Inbound
            };
            let partner_id = if r.from_id == business_id { r.to_id } else { r.from_id };
            AnnotatedRelationship {
                edge: r.clone(),
                direction,
                partner_id,
                partner_name: names
                    .get(&partner_id)
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "Unknown Business".to_string()),
            }
        })
        .collect();

    annotated.sort_by(|a, b| b.edge.confidence.cmp(&a.edge.confidence));
    annotated
}
