//! AddPie command

use crate::context::ContentContext;
use crate::error::{ContentError, Result};
use crate::execute::Execute;
use crate::sanitize::{sanitize_text_field, sanitize_textarea_field};
use crate::types::Pie;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Add a new pie to the catalog
///
/// Title and description are sanitized on the way in, so every stored
/// record is markup-free.
#[derive(Debug, Deserialize)]
pub struct AddPie {
    /// The pie title (required)
    pub title: String,
    /// Longer free-text description
    pub description: Option<String>,
}

impl AddPie {
    /// Create a new AddPie command with just a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[async_trait]
impl Execute<ContentContext, ContentError> for AddPie {
    async fn execute(&self, ctx: &ContentContext) -> Result<Value> {
        ctx.ensure_directories().await?;

        let title = sanitize_text_field(&self.title);
        if title.is_empty() {
            return Err(ContentError::missing_field("title"));
        }

        let mut pie = Pie::new(title);
        if let Some(description) = &self.description {
            pie = pie.with_description(sanitize_textarea_field(description));
        }

        ctx.write_pie(&pie).await?;
        tracing::debug!(id = %pie.id, "added pie");

        Ok(serde_json::to_value(&pie)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn setup() -> (TempDir, ContentContext) {
        let temp = TempDir::new().unwrap();
        let ctx = ContentContext::new(temp.path().join(".pierack"));
        (temp, ctx)
    }

    #[tokio::test]
    async fn test_add_pie() {
        let (_temp, ctx) = setup().await;

        let result = AddPie::new("Apple Crumble")
            .with_description("A classic")
            .execute(&ctx)
            .await
            .unwrap();

        assert_eq!(result["title"], "Apple Crumble");
        assert_eq!(result["description"], "A classic");
    }

    #[tokio::test]
    async fn test_add_pie_sanitizes_input() {
        let (_temp, ctx) = setup().await;

        let result = AddPie::new("<em>Apple</em>  Crumble")
            .with_description("<p>Buttery</p>\ntopping")
            .execute(&ctx)
            .await
            .unwrap();

        assert_eq!(result["title"], "Apple Crumble");
        assert_eq!(result["description"], "Buttery\ntopping");
    }

    #[tokio::test]
    async fn test_add_pie_requires_title() {
        let (_temp, ctx) = setup().await;

        let result = AddPie::new("<br/>").execute(&ctx).await;
        assert!(matches!(result, Err(ContentError::MissingField { .. })));
    }
}
