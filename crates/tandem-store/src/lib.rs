//! Tandem Storage Layer
//!
//! Flat JSON persistence for the two collections the pipeline produces:
//! `businesses.json` and `relationships.json`, each a pretty-printed JSON
//! array inside a data directory.
//!
//! Collections are append-only from the pipeline's point of view and are
//! always written wholesale. Writes go to a temporary file in the same
//! directory followed by a rename, so an interrupted write never
//! truncates previously persisted data.
//!
//! # Examples
//!
//! ```no_run
//! use tandem_store::JsonStore;
//!
//! let store = JsonStore::new("data");
//! let businesses = store.load_businesses().unwrap();
//! println!("{} businesses on disk", businesses.len());
//! ```

#![warn(missing_docs)]

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tandem_domain::{BusinessRecord, RelationshipEdge};
use thiserror::Error;
use tracing::info;

const BUSINESSES_FILE: &str = "businesses.json";
const RELATIONSHIPS_FILE: &str = "relationships.json";

/// Errors that can occur during persistence
///
/// All of these are fatal to the caller: the pipeline never continues
/// past a store failure.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem failure
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted file exists but does not parse
    #[error("Corrupt data file {path}: {source}")]
    Corrupt {
        /// File that failed to parse
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Encoding a collection failed
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A required collection has not been persisted yet
    #[error("No persisted data at {0}; run a full analysis first")]
    Missing(PathBuf),
}

/// JSON-file store for business records and relationship edges
#[derive(Debug, Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    /// Create a store rooted at `data_dir`
    ///
    /// The directory is created lazily on first write.
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the business collection
    pub fn businesses_path(&self) -> PathBuf {
        self.data_dir.join(BUSINESSES_FILE)
    }

    /// Path of the relationship collection
    pub fn relationships_path(&self) -> PathBuf {
        self.data_dir.join(RELATIONSHIPS_FILE)
    }

    /// True when both collections have been persisted
    pub fn has_data(&self) -> bool {
        self.businesses_path().exists() && self.relationships_path().exists()
    }

    /// Load the persisted business collection
    pub fn load_businesses(&self) -> Result<Vec<BusinessRecord>, StoreError> {
        self.load_collection(&self.businesses_path())
    }

    /// Load the persisted relationship collection
    pub fn load_relationships(&self) -> Result<Vec<RelationshipEdge>, StoreError> {
        self.load_collection(&self.relationships_path())
    }

    /// Persist the full business collection, replacing any previous file
    pub fn save_businesses(&self, businesses: &[BusinessRecord]) -> Result<(), StoreError> {
        self.write_collection(&self.businesses_path(), businesses)?;
        info!("Saved {} businesses to {}", businesses.len(), self.businesses_path().display());
        Ok(())
    }

    /// Persist the full relationship collection, replacing any previous file
    pub fn save_relationships(&self, relationships: &[RelationshipEdge]) -> Result<(), StoreError> {
        self.write_collection(&self.relationships_path(), relationships)?;
        info!(
            "Saved {} relationships to {}",
            relationships.len(),
            self.relationships_path().display()
        );
        Ok(())
    }

    /// Append new edges to the persisted collection and rewrite it
    ///
    /// Used by incremental mode; existing edges are never dropped or
    /// rewritten in place, only carried forward.
    pub fn append_relationships(
        &self,
        new_edges: &[RelationshipEdge],
    ) -> Result<Vec<RelationshipEdge>, StoreError> {
        let mut merged = self.load_relationships()?;
        merged.extend_from_slice(new_edges);
        self.save_relationships(&merged)?;
        Ok(merged)
    }

    fn load_collection<T: DeserializeOwned>(&self, path: &Path) -> Result<Vec<T>, StoreError> {
        if !path.exists() {
            return Err(StoreError::Missing(path.to_path_buf()));
        }
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|source| StoreError::Corrupt {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_collection<T: Serialize>(&self, path: &Path, items: &[T]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir)?;

        let json = serde_json::to_string_pretty(items)?;

        // Write-then-rename keeps the previous file intact if this
        // process dies mid-write.
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tandem_domain::{
        BusinessId, EstimatedValue, Industry, RelationshipType,
    };
    use tempfile::TempDir;

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

    fn edge(from: &BusinessRecord, to: &BusinessRecord) -> RelationshipEdge {
        RelationshipEdge {
            from_id: from.id,
            to_id: to.id,
            from_name: from.name.clone(),
            to_name: to.name.clone(),
            relationship_type: RelationshipType::Vendor,
            confidence: 70,
            reasoning: "r".to_string(),
            value_prop: "v".to_string(),
            collaboration_example: "c".to_string(),
            synergy_potential: "s".to_string(),
            action_items: vec!["step".to_string()],
            estimated_value: EstimatedValue::Medium,
            mutual_benefit: true,
        }
    }

    #[test]
    fn test_round_trip_businesses() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());

        let businesses = vec![business("Acme", "a@b.c"), business("Zen Co", "z@b.c")];
        store.save_businesses(&businesses).unwrap();

        let loaded = store.load_businesses().unwrap();
        assert_eq!(loaded, businesses);
    }

    #[test]
    fn test_round_trip_relationships() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());

        let a = business("Acme", "a@b.c");
        let b = business("Zen Co", "z@b.c");
        let edges = vec![edge(&a, &b)];
        store.save_relationships(&edges).unwrap();

        let loaded = store.load_relationships().unwrap();
        assert_eq!(loaded, edges);
    }

    #[test]
    fn test_missing_file_error() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());

        assert!(!store.has_data());
        assert!(matches!(
            store.load_businesses(),
            Err(StoreError::Missing(_))
        ));
    }

    #[test]
    fn test_corrupt_file_error() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());
        fs::write(store.businesses_path(), "not json").unwrap();

        assert!(matches!(
            store.load_businesses(),
            Err(StoreError::Corrupt { .. })
        ));
    }

    #[test]
    fn test_append_merges_and_rewrites() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());

        let a = business("Acme", "a@b.c");
        let b = business("Zen Co", "z@b.c");
        let c = business("New Biz", "n@b.c");

        store.save_relationships(&[edge(&a, &b)]).unwrap();
        let merged = store.append_relationships(&[edge(&c, &a)]).unwrap();

        assert_eq!(merged.len(), 2);
        assert_eq!(store.load_relationships().unwrap().len(), 2);
    }

    #[test]
    fn test_save_creates_data_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("deep").join("data");
        let store = JsonStore::new(&nested);

        store.save_businesses(&[business("Acme", "a@b.c")]).unwrap();
        assert!(store.businesses_path().exists());
    }

    #[test]
    fn test_no_tmp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());
        store.save_businesses(&[business("Acme", "a@b.c")]).unwrap();

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map(|x| x == "tmp").unwrap_or(false))
            .collect();
        assert!(leftovers.is_empty());
    }
}
