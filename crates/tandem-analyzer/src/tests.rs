//! Integration tests for the Analyzer

use crate::analyzer::new_businesses;
use crate::{Analyzer, AnalyzerConfig};
use tandem_domain::{BusinessId, BusinessRecord, Industry, RelationshipType};
use tandem_llm::{LlmError, MockProvider};

fn business(name: &str, email: &str) -> BusinessRecord {
    BusinessRecord {
        id: BusinessId::derive(name, email),
        name: name.to_string(),
        contact_name: "Contact".to_string(),
        description: "Not specified".to_string(),
        website: String::new(),
        target_market: "Not specified".to_string(),
        current_needs: "Not specified".to_string(),
        contact_email: email.to_string(),
        contact_phone: String::new(),
        linkedin: String::new(),
        fun_fact: String::new(),
        industry: Industry::Technology,
        services: "Not specified".to_string(),
    }
}

fn analyzer(provider: MockProvider) -> Analyzer<MockProvider> {
    Analyzer::new(provider, AnalyzerConfig::with_delay_ms(0))
}

const ONE_VENDOR_EDGE: &str = r#"{
    "relationships": [
        {
            "from": "Business A",
            "to": "Business B",
            "type": "vendor",
            "confidence": 85,
            "reasoning": "A supplies B",
            "value_prop": "Revenue",
            "collaboration_example": "A builds a tool for B",
            "synergy_potential": "Good fit",
            "action_items": ["Intro call"],
            "estimated_value": "high"
        }
    ],
    "mutual_benefit": true
}"#;

const EMPTY_RESPONSE: &str = r#"{"relationships": [], "mutual_benefit": false}"#;

#[tokio::test]
async fn test_full_batch_visits_every_unordered_pair_once() {
    let provider = MockProvider::new(ONE_VENDOR_EDGE);
    let handle = provider.clone();
    let analyzer = analyzer(provider);

    let roster = vec![
        business("Acme", "a@x.y"),
        business("Beta", "b@x.y"),
        business("Gamma", "c@x.y"),
    ];

    let report = analyzer.analyze_all(&roster).await;

    // 3 businesses -> 3 unordered pairs, one call each
    assert_eq!(handle.call_count(), 3);
    assert_eq!(report.pairs_evaluated, 3);
    assert_eq!(report.pairs_failed, 0);
    assert_eq!(report.relationships.len(), 3);
}

#[tokio::test]
async fn test_endpoints_resolved_to_pair_ids() {
    let provider = MockProvider::new(ONE_VENDOR_EDGE);
    let analyzer = analyzer(provider);

    let a = business("Acme", "a@x.y");
    let b = business("Beta", "b@x.y");
    let report = analyzer.analyze_all(&[a.clone(), b.clone()]).await;

    let edge = &report.relationships[0];
    assert_eq!(edge.from_id, a.id);
    assert_eq!(edge.to_id, b.id);
    assert_eq!(edge.from_name, "Acme");
    assert_eq!(edge.to_name, "Beta");
    assert_eq!(edge.relationship_type, RelationshipType::Vendor);
    assert!(edge.mutual_benefit);
}

#[tokio::test]
async fn test_edges_appended_in_pair_order() {
    let provider = MockProvider::new(EMPTY_RESPONSE);
    provider.push_response(ONE_VENDOR_EDGE); // pair (0, 1)
    provider.push_response(EMPTY_RESPONSE); // pair (0, 2)
    provider.push_response(ONE_VENDOR_EDGE); // pair (1, 2)
    let analyzer = analyzer(provider);

    let roster = vec![
        business("Acme", "a@x.y"),
        business("Beta", "b@x.y"),
        business("Gamma", "c@x.y"),
    ];
    let report = analyzer.analyze_all(&roster).await;

    assert_eq!(report.relationships.len(), 2);
    assert_eq!(report.relationships[0].from_name, "Acme");
    assert_eq!(report.relationships[1].from_name, "Beta");
}

#[tokio::test]
async fn test_pair_failure_does_not_abort_batch() {
    let provider = MockProvider::new(ONE_VENDOR_EDGE);
    provider.push_response("this is not JSON at all");
    let handle = provider.clone();
    let analyzer = analyzer(provider);

    let roster = vec![
        business("Acme", "a@x.y"),
        business("Beta", "b@x.y"),
        business("Gamma", "c@x.y"),
    ];
    let report = analyzer.analyze_all(&roster).await;

    assert_eq!(handle.call_count(), 3);
    assert_eq!(report.pairs_failed, 1);
    assert_eq!(report.pairs_evaluated, 2);
    assert_eq!(report.relationships.len(), 2);
}

#[tokio::test]
async fn test_provider_error_contained_at_pair_boundary() {
    let provider = MockProvider::new(ONE_VENDOR_EDGE);
    provider.push_error(LlmError::RetriesExhausted(3));
    let analyzer = analyzer(provider);

    let roster = vec![business("Acme", "a@x.y"), business("Beta", "b@x.y"), business("Gamma", "c@x.y")];
    let report = analyzer.analyze_all(&roster).await;

    assert_eq!(report.pairs_failed, 1);
    assert_eq!(report.pairs_evaluated, 2);
}

#[tokio::test]
async fn test_malformed_element_discards_whole_pair() {
    // Second relationship is missing its confidence: the whole pair
    // must contribute zero edges, including the valid first element.
    let poisoned = r#"{
        "relationships": [
            {"from": "Business A", "to": "Business B", "type": "vendor", "confidence": 80},
            {"from": "Business B", "to": "Business A", "type": "referral"}
        ]
    }"#;
    let provider = MockProvider::new(poisoned);
    let analyzer = analyzer(provider);

    let report = analyzer
        .analyze_all(&[business("Acme", "a@x.y"), business("Beta", "b@x.y")])
        .await;

    assert_eq!(report.relationships.len(), 0);
    assert_eq!(report.pairs_failed, 1);
}

#[tokio::test]
async fn test_self_edges_dropped_but_pair_counts_as_evaluated() {
    let self_edge = r#"{
        "relationships": [
            {"from": "Business A", "to": "Business A", "type": "partner", "confidence": 70}
        ],
        "mutual_benefit": false
    }"#;
    let provider = MockProvider::new(self_edge);
    let analyzer = analyzer(provider);

    let report = analyzer
        .analyze_all(&[business("Acme", "a@x.y"), business("Beta", "b@x.y")])
        .await;

    assert_eq!(report.relationships.len(), 0);
    assert_eq!(report.pairs_evaluated, 1);
    assert_eq!(report.pairs_failed, 0);
}

#[tokio::test]
async fn test_duplicate_id_pair_skipped_without_api_call() {
    let provider = MockProvider::new(ONE_VENDOR_EDGE);
    let handle = provider.clone();
    let analyzer = analyzer(provider);

    // Identical name+email collapse to one id
    let roster = vec![business("Acme", "a@x.y"), business("Acme", "a@x.y")];
    let report = analyzer.analyze_all(&roster).await;

    assert_eq!(handle.call_count(), 0);
    assert_eq!(report.pairs_skipped, 1);
    assert!(report.relationships.is_empty());
}

#[tokio::test]
async fn test_incremental_pairs_new_against_existing_only() {
    let provider = MockProvider::new(EMPTY_RESPONSE);
    let handle = provider.clone();
    let analyzer = analyzer(provider);

    let existing = vec![business("X", "x@x.y"), business("Y", "y@x.y")];
    let new = vec![business("Z", "z@x.y"), business("W", "w@x.y")];

    let report = analyzer.analyze_incremental(&new, &existing).await;

    // 2 new x 2 existing = 4 pairs; Z<->W is never analyzed
    assert_eq!(handle.call_count(), 4);
    assert_eq!(report.pairs_evaluated, 4);
}

#[tokio::test]
async fn test_empty_roster_produces_empty_report() {
    let provider = MockProvider::new(ONE_VENDOR_EDGE);
    let handle = provider.clone();
    let analyzer = analyzer(provider);

    let report = analyzer.analyze_all(&[]).await;
    assert_eq!(handle.call_count(), 0);
    assert!(report.relationships.is_empty());

    let report = analyzer.analyze_all(&[business("Solo", "s@x.y")]).await;
    assert_eq!(handle.call_count(), 0);
    assert_eq!(report.pairs_evaluated, 0);
}

#[test]
fn test_new_businesses_diff_by_id() {
    let x = business("X", "x@x.y");
    let y = business("Y", "y@x.y");
    let z = business("Z", "z@x.y");

    let fresh = vec![x.clone(), y.clone(), z.clone()];
    let existing = vec![x, y];

    let new = new_businesses(&fresh, &existing);
    assert_eq!(new.len(), 1);
    assert_eq!(new[0].name, "Z");

    // Unchanged roster -> nothing new
    assert!(new_businesses(&existing, &existing).is_empty());
}

#[test]
fn test_empty_report_summaries() {
    let report = crate::AnalysisReport::default();
    assert_eq!(report.avg_confidence(), 0.0);
    assert!(report.type_breakdown().is_empty());
}
