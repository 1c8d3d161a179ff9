//! Content-type descriptors and the type registry
//!
//! A [`ContentType`] is a declarative template: it names an entity kind and
//! describes how its admin and public surfaces present it. Registration is
//! pure configuration with no error paths and is safe to repeat on every
//! process start.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The full admin label set for a content type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTypeLabels {
    pub name: String,
    pub singular_name: String,
    pub add_new: String,
    pub add_new_item: String,
    pub edit_item: String,
    pub new_item: String,
    pub all_items: String,
    pub view_item: String,
    pub search_items: String,
    pub not_found: String,
    pub not_found_in_trash: String,
    pub menu_name: String,
}

/// A native field a content type supports (beyond its metadata)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NativeField {
    Title,
    Excerpt,
}

/// A content-type descriptor — pure configuration, no behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentType {
    pub slug: String,
    pub labels: ContentTypeLabels,
    pub public: bool,
    pub has_archive: bool,
    pub supports: Vec<NativeField>,
    /// Visible through the structured-content API
    pub show_in_api: bool,
    pub menu_position: u8,
    pub menu_icon: String,
}

impl ContentType {
    /// The descriptor for the pie catalog's single entity
    pub fn pies() -> Self {
        Self {
            slug: "pies".to_string(),
            labels: ContentTypeLabels {
                name: "Pies".to_string(),
                singular_name: "Pie".to_string(),
                add_new: "Add New Pie".to_string(),
                add_new_item: "Add New Pie".to_string(),
                edit_item: "Edit Pie".to_string(),
                new_item: "New Pie".to_string(),
                all_items: "All Pies".to_string(),
                view_item: "View Pie".to_string(),
                search_items: "Search Pies".to_string(),
                not_found: "No pies found".to_string(),
                not_found_in_trash: "No pies found in Trash".to_string(),
                menu_name: "Pies".to_string(),
            },
            public: true,
            has_archive: true,
            supports: vec![NativeField::Title, NativeField::Excerpt],
            show_in_api: true,
            menu_position: 5,
            menu_icon: "carrot".to_string(),
        }
    }

    /// Whether this type supports the given native field
    pub fn supports(&self, field: NativeField) -> bool {
        self.supports.contains(&field)
    }
}

/// Registry of content types, keyed by slug
///
/// Re-registering a slug replaces the prior descriptor, so registration is
/// idempotent across restarts.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: HashMap<String, ContentType>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a content type, replacing any prior registration of its slug
    pub fn register(&mut self, content_type: ContentType) {
        tracing::debug!("registering content type '{}'", content_type.slug);
        self.types.insert(content_type.slug.clone(), content_type);
    }

    /// Look up a registered type by slug
    pub fn get(&self, slug: &str) -> Option<&ContentType> {
        self.types.get(slug)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.types.contains_key(slug)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pies_descriptor() {
        let ct = ContentType::pies();
        assert_eq!(ct.slug, "pies");
        assert_eq!(ct.labels.singular_name, "Pie");
        assert_eq!(ct.labels.not_found, "No pies found");
        assert!(ct.public);
        assert!(ct.has_archive);
        assert!(ct.show_in_api);
        assert!(ct.supports(NativeField::Title));
        assert!(ct.supports(NativeField::Excerpt));
        assert_eq!(ct.menu_position, 5);
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = TypeRegistry::new();
        registry.register(ContentType::pies());
        registry.register(ContentType::pies());

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("pies"));
    }

    #[test]
    fn test_reregister_replaces() {
        let mut registry = TypeRegistry::new();
        registry.register(ContentType::pies());

        let mut updated = ContentType::pies();
        updated.menu_icon = "cake".to_string();
        registry.register(updated);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("pies").unwrap().menu_icon, "cake");
    }

    #[test]
    fn test_descriptor_serialization() {
        let ct = ContentType::pies();
        let json = serde_json::to_string(&ct).unwrap();
        let parsed: ContentType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ct);
    }
}
