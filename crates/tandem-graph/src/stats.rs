//! Aggregate network statistics

use serde::Serialize;
use std::collections::HashMap;
use tandem_domain::{BusinessId, BusinessRecord, Industry, RelationshipEdge, RelationshipType};

/// How many top businesses to report
const TOP_CONNECTED_LIMIT: usize = 5;

/// A business with its degree, for the most-connected list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectedBusiness {
    /// The business
    pub business: BusinessRecord,
    /// Its degree over the full edge set
    pub connections: usize,
}

/// Aggregate statistics over the full (unfiltered) collections
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkStats {
    /// Number of businesses
    pub total_businesses: usize,
    /// Number of relationship edges
    pub total_relationships: usize,
    /// Businesses with at least one edge
    pub connected_businesses: usize,
    /// Mean degree over connected businesses, rounded to one decimal
    pub avg_connections: f64,
    /// Up to five businesses by degree, descending, ties in input order
    pub most_connected: Vec<ConnectedBusiness>,
    /// Edge count per relationship type
    pub type_breakdown: HashMap<RelationshipType, usize>,
    /// Mean edge confidence, rounded to the nearest integer
    pub avg_confidence: u8,
}

/// Compute network statistics from the two collections
pub fn network_stats(
    businesses: &[BusinessRecord],
    relationships: &[RelationshipEdge],
) -> NetworkStats {
    let mut degrees: HashMap<BusinessId, usize> = HashMap::new();
    for edge in relationships {
        *degrees.entry(edge.from_id).or_insert(0) += 1;
        *degrees.entry(edge.to_id).or_insert(0) += 1;
    }

    let connected_businesses = degrees.len();
    let avg_connections = if connected_businesses > 0 {
        let total: usize = degrees.values().sum();
        let mean = total as f64 / connected_businesses as f64;
        (mean * 10.0).round() / 10.0
    } else {
        0.0
    };

    // Stable sort keeps input order on ties
    let mut ranked: Vec<ConnectedBusiness> = businesses
        .iter()
        .map(|b| ConnectedBusiness {
            business: b.clone(),
            connections: degrees.get(&b.id).copied().unwrap_or(0),
        })
        .filter(|item| item.connections > 0)
        .collect();
    ranked.sort_by(|a, b| b.connections.cmp(&a.connections));
    ranked.truncate(TOP_CONNECTED_LIMIT);

    let mut type_breakdown: HashMap<RelationshipType, usize> = HashMap::new();
    for edge in relationships {
        *type_breakdown.entry(edge.relationship_type).or_insert(0) += 1;
    }

    let avg_confidence = if relationships.is_empty() {
        0
    } else {
        let total: u32 = relationships.iter().map(|r| u32::from(r.confidence)).sum();
        (total as f64 / relationships.len() as f64).round() as u8
    };

    NetworkStats {
        total_businesses: businesses.len(),
        total_relationships: relationships.len(),
        connected_businesses,
        avg_connections,
        most_connected: ranked,
        type_breakdown,
        avg_confidence,
    }
}

/// Distinct industries present in the collection, sorted by label
pub fn unique_industries(businesses: &[BusinessRecord]) -> Vec<Industry> {
    let mut industries: Vec<Industry> = businesses.iter().map(|b| b.industry).collect();
    industries.sort_by_key(|i| i.label());
    industries.dedup();
    industries
}

/// Case-insensitive search over name, description and industry label
///
/// A blank query returns the full collection unchanged.
pub fn search_businesses<'a>(
    businesses: &'a [BusinessRecord],
    query: &str,
) -> Vec<&'a BusinessRecord> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return businesses.iter().collect();
    }

    businesses
        .iter()
        .filter(|b| {
            b.name.to_lowercase().contains(&query)
                || b.description.to_lowercase().contains(&query)
                || b.industry.label().to_lowercase().contains(&query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tandem_domain::EstimatedValue;

    fn business(name: &str, industry: Industry) -> BusinessRecord {
        BusinessRecord {
            id: BusinessId::derive(name, ""),
            name: name.to_string(),
            contact_name: String::new(),
            description: format!("{} services", name),
            website: String::new(),
            target_market: "Not specified".to_string(),
            current_needs: "Not specified".to_string(),
            contact_email: String::new(),
            contact_phone: String::new(),
            linkedin: String::new(),
            fun_fact: String::new(),
            industry,
            services: "Not specified".to_string(),
        }
    }

    fn edge(
        from: &BusinessRecord,
        to: &BusinessRecord,
        relationship_type: RelationshipType,
        confidence: u8,
    ) -> RelationshipEdge {
        RelationshipEdge {
            from_id: from.id,
            to_id: to.id,
            from_name: from.name.clone(),
            to_name: to.name.clone(),
            relationship_type,
            confidence,
            reasoning: String::new(),
            value_prop: String::new(),
            collaboration_example: String::new(),
            synergy_potential: String::new(),
            action_items: vec![],
            estimated_value: EstimatedValue::Medium,
            mutual_benefit: false,
        }
    }

    #[test]
    fn test_empty_network() {
        let stats = network_stats(&[], &[]);
        assert_eq!(stats.total_businesses, 0);
        assert_eq!(stats.total_relationships, 0);
        assert_eq!(stats.connected_businesses, 0);
        assert_eq!(stats.avg_connections, 0.0);
        assert_eq!(stats.avg_confidence, 0);
        assert!(stats.most_connected.is_empty());
    }

    #[test]
    fn test_counts_and_averages() {
        let a = business("a", Industry::Technology);
        let b = business("b", Industry::Logistics);
        let c = business("c", Industry::RealEstate);
        let edges = vec![
            edge(&a, &b, RelationshipType::Vendor, 60),
            edge(&a, &c, RelationshipType::Referral, 90),
        ];

        let stats = network_stats(&[a, b, c], &edges);
        assert_eq!(stats.total_businesses, 3);
        assert_eq!(stats.total_relationships, 2);
        assert_eq!(stats.connected_businesses, 3);
        // degrees: a=2, b=1, c=1 -> mean 4/3 = 1.333 -> 1.3
        assert_eq!(stats.avg_connections, 1.3);
        assert_eq!(stats.avg_confidence, 75);
    }

    #[test]
    fn test_avg_connections_ignores_isolated() {
        let a = business("a", Industry::Technology);
        let b = business("b", Industry::Logistics);
        let isolated = business("z", Industry::RealEstate);
        let edges = vec![edge(&a, &b, RelationshipType::Vendor, 60)];

        let stats = network_stats(&[a, b, isolated], &edges);
        assert_eq!(stats.connected_businesses, 2);
        assert_eq!(stats.avg_connections, 1.0);
    }

    #[test]
    fn test_most_connected_top5_stable_ties() {
        let roster: Vec<BusinessRecord> = ["a", "b", "c", "d", "e", "f", "g"]
            .iter()
            .map(|n| business(n, Industry::Technology))
            .collect();

        // a gets 3 edges, everyone else exactly one (to a or pairwise)
        let edges = vec![
            edge(&roster[0], &roster[1], RelationshipType::Vendor, 60),
            edge(&roster[0], &roster[2], RelationshipType::Vendor, 60),
            edge(&roster[0], &roster[3], RelationshipType::Vendor, 60),
            edge(&roster[4], &roster[5], RelationshipType::Vendor, 60),
        ];

        let stats = network_stats(&roster, &edges);
        assert_eq!(stats.most_connected.len(), 5);
        assert_eq!(stats.most_connected[0].business.name, "a");
        assert_eq!(stats.most_connected[0].connections, 3);
        // Degree-1 ties appear in input order
        let tie_names: Vec<&str> = stats.most_connected[1..]
            .iter()
            .map(|c| c.business.name.as_str())
            .collect();
        assert_eq!(tie_names, ["b", "c", "d", "e"]);
    }

    #[test]
    fn test_type_breakdown() {
        let a = business("a", Industry::Technology);
        let b = business("b", Industry::Logistics);
        let edges = vec![
            edge(&a, &b, RelationshipType::Vendor, 60),
            edge(&b, &a, RelationshipType::Vendor, 70),
            edge(&a, &b, RelationshipType::Referral, 80),
        ];

        let stats = network_stats(&[a, b], &edges);
        assert_eq!(stats.type_breakdown[&RelationshipType::Vendor], 2);
        assert_eq!(stats.type_breakdown[&RelationshipType::Referral], 1);
        assert_eq!(stats.type_breakdown.get(&RelationshipType::Partner), None);
    }

    #[test]
    fn test_unique_industries_sorted() {
        let roster = vec![
            business("a", Industry::Technology),
            business("b", Industry::ArtsCreative),
            business("c", Industry::Technology),
        ];

        let industries = unique_industries(&roster);
        assert_eq!(industries, vec![Industry::ArtsCreative, Industry::Technology]);
    }

    #[test]
    fn test_search() {
        let roster = vec![
            business("Acme Robotics", Industry::Technology),
            business("Zen Wellness", Industry::HealthWellness),
        ];

        assert_eq!(search_businesses(&roster, "acme").len(), 1);
        assert_eq!(search_businesses(&roster, "wellness").len(), 1);
        // Industry label matches too
        assert_eq!(search_businesses(&roster, "technology").len(), 1);
        assert_eq!(search_businesses(&roster, "").len(), 2);
        assert!(search_businesses(&roster, "nothing matches this").is_empty());
    }
}
