//! Serialization and deserialization for layout documents.
//!
//! The canonical exchange format is a JSON document of shape
//! `{ "warehouseId": ..., "components": [...] }`. Files written by the
//! designer additionally carry a `metadata` block; documents without one
//! load unchanged.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::component::{Layout, LayoutComponent};

/// A complete layout exchange document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDocument {
    pub warehouse_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DocumentMetadata>,
    pub components: Vec<LayoutComponent>,
}

/// Optional metadata stamped on saved files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub name: String,
    pub modified: DateTime<Utc>,
}

impl LayoutDocument {
    /// Builds a document from the current layout.
    pub fn new(warehouse_id: impl Into<String>, layout: &Layout) -> Self {
        Self {
            warehouse_id: warehouse_id.into(),
            metadata: None,
            components: layout.components().to_vec(),
        }
    }

    /// The document's components as a layout snapshot.
    pub fn layout(&self) -> Layout {
        Layout::new(self.components.clone())
    }

    /// Serializes to formatted JSON (the downloadable export artifact).
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a document from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Writes the document to disk, stamping the metadata block with the
    /// current timestamp.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let mut doc = self.clone();
        let name = doc
            .metadata
            .take()
            .map(|m| m.name)
            .unwrap_or_else(|| format!("warehouse-{}", self.warehouse_id));
        doc.metadata = Some(DocumentMetadata {
            name,
            modified: Utc::now(),
        });
        let json = doc.to_json().context("Failed to serialize layout document")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write layout file: {}", path.display()))
    }

    /// Reads a document from disk.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read layout file: {}", path.display()))?;
        Self::from_json(&json)
            .with_context(|| format!("Failed to parse layout file: {}", path.display()))
    }
}
