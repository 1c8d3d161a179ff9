//! UpdatePie command

use crate::context::ContentContext;
use crate::error::{ContentError, Result};
use crate::execute::Execute;
use crate::sanitize::{sanitize_text_field, sanitize_textarea_field};
use crate::types::PieId;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Update a pie's native fields
///
/// Only the fields that are set are written; omitted fields keep their
/// stored values.
#[derive(Debug, Deserialize)]
pub struct UpdatePie {
    /// The pie ID to update
    pub id: PieId,
    /// New title
    pub title: Option<String>,
    /// New description
    pub description: Option<String>,
}

impl UpdatePie {
    /// Create a new UpdatePie command
    pub fn new(id: impl Into<PieId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[async_trait]
impl Execute<ContentContext, ContentError> for UpdatePie {
    async fn execute(&self, ctx: &ContentContext) -> Result<Value> {
        let mut pie = ctx.read_pie(&self.id).await?;

        if let Some(title) = &self.title {
            let title = sanitize_text_field(title);
            if title.is_empty() {
                return Err(ContentError::missing_field("title"));
            }
            pie.title = title;
        }
        if let Some(description) = &self.description {
            pie.description = sanitize_textarea_field(description);
        }

        ctx.write_pie(&pie).await?;
        tracing::debug!(id = %pie.id, "updated pie");

        Ok(serde_json::to_value(&pie)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pie::AddPie;
    use tempfile::TempDir;

    async fn setup() -> (TempDir, ContentContext, PieId) {
        let temp = TempDir::new().unwrap();
        let ctx = ContentContext::new(temp.path().join(".pierack"));
        let added = AddPie::new("Apple Crumble")
            .with_description("Original")
            .execute(&ctx)
            .await
            .unwrap();
        let id = PieId::from_string(added["id"].as_str().unwrap());
        (temp, ctx, id)
    }

    #[tokio::test]
    async fn test_update_title_only() {
        let (_temp, ctx, id) = setup().await;

        let result = UpdatePie::new(id)
            .with_title("Apple Lattice")
            .execute(&ctx)
            .await
            .unwrap();

        assert_eq!(result["title"], "Apple Lattice");
        // Omitted field untouched
        assert_eq!(result["description"], "Original");
    }

    #[tokio::test]
    async fn test_update_sanitizes() {
        let (_temp, ctx, id) = setup().await;

        let result = UpdatePie::new(id)
            .with_description("<b>Sweet</b>\r\nand crumbly")
            .execute(&ctx)
            .await
            .unwrap();

        assert_eq!(result["description"], "Sweet\nand crumbly");
    }

    #[tokio::test]
    async fn test_update_missing_pie() {
        let temp = TempDir::new().unwrap();
        let ctx = ContentContext::new(temp.path().join(".pierack"));
        ctx.ensure_directories().await.unwrap();

        let result = UpdatePie::new("missing").with_title("X").execute(&ctx).await;
        assert!(matches!(result, Err(ContentError::PieNotFound { .. })));
    }
}
