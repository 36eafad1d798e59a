//! Graph command implementation.

use crate::cli::GraphArgs;
use crate::error::CliError;
use crate::output::Formatter;
use anyhow::Result;
use std::fs;
use tandem_domain::{BusinessId, BusinessRecord, Industry};
use tandem_graph::{build_graph, filter_graph_by_node, GraphFilter};
use tandem_store::JsonStore;

/// Execute the graph command: emit renderer-ready `{nodes, links}` JSON.
pub fn execute_graph(args: GraphArgs, store: &JsonStore, formatter: &Formatter) -> Result<()> {
    if !store.has_data() {
        return Err(CliError::MissingData(store.businesses_path().display().to_string()).into());
    }

    let businesses = store.load_businesses()?;
    let relationships = store.load_relationships()?;

    let filter = GraphFilter {
        min_confidence: args.min_confidence,
        types: args.types.into_iter().map(Into::into).collect(),
        industries: parse_industries(&args.industries)?,
    };

    let mut graph = build_graph(&businesses, &relationships, &filter);

    if let Some(focus) = &args.focus {
        let id = resolve_business(focus, &businesses)?;
        graph = filter_graph_by_node(&graph, id);
    }

    let json = serde_json::to_string_pretty(&graph)?;
    match &args.output {
        Some(path) => {
            fs::write(path, &json)?;
            println!(
                "{}",
                formatter.success(&format!(
                    "Wrote graph ({} nodes, {} links) to {}",
                    graph.nodes.len(),
                    graph.links.len(),
                    path.display()
                ))
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Map industry labels to categories, rejecting unknown labels.
fn parse_industries(labels: &[String]) -> Result<Vec<Industry>> {
    labels
        .iter()
        .map(|label| {
            Industry::from_label(label).ok_or_else(|| {
                CliError::InvalidInput(format!(
                    "Unknown industry '{}'. Valid industries: {}",
                    label,
                    Industry::ALL
                        .iter()
                        .map(|i| i.label())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
                .into()
            })
        })
        .collect()
}

/// Resolve a focus argument to a business id, by id first, then by
/// case-insensitive name.
fn resolve_business(focus: &str, businesses: &[BusinessRecord]) -> Result<BusinessId> {
    if let Ok(id) = BusinessId::parse(focus) {
        return Ok(id);
    }

    businesses
        .iter()
        .find(|b| b.name.eq_ignore_ascii_case(focus))
        .map(|b| b.id)
        .ok_or_else(|| CliError::InvalidInput(format!("No business named '{}'", focus)).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_industries_rejects_unknown() {
        assert!(parse_industries(&["Technology".to_string()]).is_ok());
        assert!(parse_industries(&["Blockchain".to_string()]).is_err());
    }

    #[test]
    fn test_resolve_business_by_name_ignores_case() {
        let record = BusinessRecord {
            id: BusinessId::derive("Acme", "a@b.c"),
            name: "Acme".to_string(),
            contact_name: String::new(),
            description: String::new(),
            website: String::new(),
            target_market: String::new(),
            current_needs: String::new(),
            contact_email: "a@b.c".to_string(),
            contact_phone: String::new(),
            linkedin: String::new(),
            fun_fact: String::new(),
            industry: Industry::Technology,
            services: String::new(),
        };

        let id = resolve_business("acme", std::slice::from_ref(&record)).unwrap();
        assert_eq!(id, record.id);
        assert!(resolve_business("nonesuch", std::slice::from_ref(&record)).is_err());
    }

    #[test]
    fn test_resolve_business_by_id_string() {
        let id = BusinessId::derive("Acme", "a@b.c");
        let resolved = resolve_business(&id.to_string(), &[]).unwrap();
        assert_eq!(resolved, id);
    }

    #[test]
    fn test_execute_graph_writes_json_file() {
        use tandem_domain::{EstimatedValue, RelationshipEdge, RelationshipType};

        let record = |name: &str, email: &str| BusinessRecord {
            id: BusinessId::derive(name, email),
            name: name.to_string(),
            contact_name: String::new(),
            description: "Not specified".to_string(),
            website: String::new(),
            target_market: String::new(),
            current_needs: String::new(),
            contact_email: email.to_string(),
            contact_phone: String::new(),
            linkedin: String::new(),
            fun_fact: String::new(),
            industry: Industry::Technology,
            services: String::new(),
        };
        let a = record("Acme", "a@b.c");
        let b = record("Beta", "b@b.c");
        let edge = RelationshipEdge {
            from_id: a.id,
            to_id: b.id,
            from_name: a.name.clone(),
            to_name: b.name.clone(),
            relationship_type: RelationshipType::Vendor,
            confidence: 80,
            reasoning: String::new(),
            value_prop: String::new(),
            collaboration_example: String::new(),
            synergy_potential: String::new(),
            action_items: Vec::new(),
            estimated_value: EstimatedValue::Medium,
            mutual_benefit: true,
        };

        let dir = tempfile::TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());
        store.save_businesses(&[a, b]).unwrap();
        store.save_relationships(&[edge]).unwrap();

        let out = dir.path().join("graph.json");
        let args = GraphArgs {
            min_confidence: 50,
            types: Vec::new(),
            industries: Vec::new(),
            focus: None,
            output: Some(out.clone()),
        };
        execute_graph(args, &store, &Formatter::new(false)).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(json["nodes"].as_array().unwrap().len(), 2);
        assert_eq!(json["links"].as_array().unwrap().len(), 1);
    }
}
