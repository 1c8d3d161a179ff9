//! Pie record types

use super::ids::PieId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A pie in the catalog
///
/// Core fields only. The `type` and `ingredients` attributes live in the
/// record's metadata map, keyed separately — see [`crate::ContentContext`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pie {
    pub id: PieId,
    pub title: String,
    /// Longer free text, the record's native summary field
    #[serde(default)]
    pub description: String,
    /// Assigned at creation, used only for default listing order
    pub created_at: DateTime<Utc>,
}

impl Pie {
    /// Create a new pie with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: PieId::new(),
            title: title.into(),
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A pie together with its metadata map, as produced by the query engine
#[derive(Debug, Clone, Serialize)]
pub struct PieRecord {
    pub pie: Pie,
    pub meta: BTreeMap<String, String>,
}

impl PieRecord {
    pub fn new(pie: Pie, meta: BTreeMap<String, String>) -> Self {
        Self { pie, meta }
    }

    /// Look up a metadata value; absent keys read as the empty string
    pub fn meta(&self, key: &str) -> &str {
        self.meta.get(key).map(String::as_str).unwrap_or("")
    }
}
