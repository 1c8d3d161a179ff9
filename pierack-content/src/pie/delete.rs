//! DeletePie command

use crate::context::ContentContext;
use crate::error::{ContentError, Result};
use crate::execute::Execute;
use crate::types::PieId;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

/// Delete a pie and its metadata
#[derive(Debug, Deserialize)]
pub struct DeletePie {
    /// The pie ID to delete
    pub id: PieId,
}

impl DeletePie {
    /// Create a new DeletePie command
    pub fn new(id: impl Into<PieId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<ContentContext, ContentError> for DeletePie {
    async fn execute(&self, ctx: &ContentContext) -> Result<Value> {
        if !ctx.pie_exists(&self.id) {
            return Err(ContentError::not_found(self.id.as_str()));
        }

        ctx.delete_pie_file(&self.id).await?;
        tracing::debug!(id = %self.id, "deleted pie");

        Ok(json!({ "deleted": true, "id": self.id }))
    }
}
