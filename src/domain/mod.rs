//! Core types shared by the API client, the export engines and output writers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Schema URI stamped on the merged collection.
pub const POSTMAN_COLLECTION_SCHEMA: &str =
    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: String,
    pub name: String,
}

/// Collection reference as listed in a workspace detail payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CollectionSummary {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub uid: Option<String>,
}

impl CollectionSummary {
    /// Identifier for the collection detail endpoint: `uid`, falling back to `id`.
    pub fn reference(&self) -> Option<&str> {
        self.uid.as_deref().or(self.id.as_deref())
    }
}

/// Full collection body. `item` is kept as opaque Postman JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CollectionDetail {
    #[serde(default)]
    pub item: Option<Vec<Value>>,
}

impl CollectionDetail {
    /// Top-level items; a missing or `null` `item` reads as empty.
    pub fn into_items(self) -> Vec<Value> {
        self.item.unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnvironmentSummary {
    pub uid: String,
    pub name: String,
}

/// Per-run counters. Every recorded outcome bumps `total`, so
/// `total == success + failed` holds by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub total: usize,
    pub success: usize,
    pub failed: usize,
}

impl RunStats {
    pub fn record_success(&mut self) {
        self.total += 1;
        self.success += 1;
    }

    pub fn record_failure(&mut self) {
        self.total += 1;
        self.failed += 1;
    }
}

/// A named Postman folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder<T> {
    pub name: String,
    pub item: Vec<T>,
}

impl<T> Folder<T> {
    pub fn new(name: impl Into<String>, item: Vec<T>) -> Self {
        Self { name: name.into(), item }
    }
}

/// One collection's original `item` tree.
pub type CollectionFolder = Folder<Value>;
pub type WorkspaceFolder = Folder<CollectionFolder>;
pub type RootFolder = Folder<WorkspaceFolder>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionInfo {
    pub name: String,
    pub schema: String,
}

/// Synthetic collection: root folder → workspace folders → collection folders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedDocument {
    pub info: CollectionInfo,
    pub item: Vec<RootFolder>,
}

impl MergedDocument {
    pub fn new(root_folder_name: &str, workspaces: Vec<WorkspaceFolder>) -> Self {
        Self {
            info: CollectionInfo {
                name: root_folder_name.to_string(),
                schema: POSTMAN_COLLECTION_SCHEMA.to_string(),
            },
            item: vec![Folder::new(root_folder_name, workspaces)],
        }
    }

    pub fn workspaces(&self) -> &[WorkspaceFolder] {
        self.item.first().map(|root| root.item.as_slice()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reference_prefers_uid() {
        let both: CollectionSummary =
            serde_json::from_value(json!({"name": "X", "id": "c1", "uid": "123-c1"})).unwrap();
        assert_eq!(both.reference(), Some("123-c1"));

        let id_only: CollectionSummary =
            serde_json::from_value(json!({"name": "X", "id": "c1"})).unwrap();
        assert_eq!(id_only.reference(), Some("c1"));

        let neither: CollectionSummary = serde_json::from_value(json!({"name": "X"})).unwrap();
        assert_eq!(neither.reference(), None);
    }

    #[test]
    fn test_null_item_reads_as_empty() {
        let detail: CollectionDetail =
            serde_json::from_value(json!({"name": "X", "item": null})).unwrap();
        assert!(detail.into_items().is_empty());

        let detail: CollectionDetail = serde_json::from_value(json!({"name": "X"})).unwrap();
        assert!(detail.into_items().is_empty());
    }

    #[test]
    fn test_run_stats_totals_add_up() {
        let mut stats = RunStats::default();
        stats.record_success();
        stats.record_failure();
        stats.record_success();
        assert_eq!(stats, RunStats { total: 3, success: 2, failed: 1 });
    }

    #[test]
    fn test_merged_document_shape() {
        let doc = MergedDocument::new(
            "Root",
            vec![Folder::new("WS", vec![Folder::new("Col", vec![json!({"name": "req"})])])],
        );
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            value,
            json!({
                "info": {
                    "name": "Root",
                    "schema": "https://schema.getpostman.com/json/collection/v2.1.0/collection.json"
                },
                "item": [{
                    "name": "Root",
                    "item": [{
                        "name": "WS",
                        "item": [{"name": "Col", "item": [{"name": "req"}]}]
                    }]
                }]
            })
        );
        assert_eq!(doc.workspaces().len(), 1);
    }
}
