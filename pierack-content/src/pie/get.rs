//! GetPie command

use crate::context::ContentContext;
use crate::error::{ContentError, Result};
use crate::execute::Execute;
use crate::types::PieId;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Get a pie by ID, including its metadata map
#[derive(Debug, Deserialize)]
pub struct GetPie {
    /// The pie ID to retrieve
    pub id: PieId,
}

impl GetPie {
    /// Create a new GetPie command
    pub fn new(id: impl Into<PieId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<ContentContext, ContentError> for GetPie {
    async fn execute(&self, ctx: &ContentContext) -> Result<Value> {
        let pie = ctx.read_pie(&self.id).await?;
        let meta = ctx.read_meta(&self.id).await?;

        let mut result = serde_json::to_value(&pie)?;
        result["meta"] = serde_json::to_value(&meta)?;

        Ok(result)
    }
}
