//! ListPies command

use crate::context::ContentContext;
use crate::error::{ContentError, Result};
use crate::execute::Execute;
use crate::query::PieQuery;
use async_trait::async_trait;
use serde_json::{json, Value};

/// List pies matching a query, with pagination totals
#[derive(Debug, Default)]
pub struct ListPies {
    /// The query to run
    pub query: PieQuery,
}

impl ListPies {
    /// Create a new ListPies command with a default query
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the query
    pub fn with_query(mut self, query: PieQuery) -> Self {
        self.query = query;
        self
    }
}

#[async_trait]
impl Execute<ContentContext, ContentError> for ListPies {
    async fn execute(&self, ctx: &ContentContext) -> Result<Value> {
        let results = self.query.run(ctx).await?;

        Ok(json!({
            "pies": serde_json::to_value(&results.records)?,
            "count": results.records.len(),
            "total": results.total,
            "total_pages": results.total_pages,
            "page": results.page,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pie::AddPie;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_list_pies() {
        let temp = TempDir::new().unwrap();
        let ctx = ContentContext::new(temp.path().join(".pierack"));

        AddPie::new("Apple Crumble").execute(&ctx).await.unwrap();
        AddPie::new("Cherry Lattice").execute(&ctx).await.unwrap();

        let result = ListPies::new().execute(&ctx).await.unwrap();
        assert_eq!(result["count"], 2);
        assert_eq!(result["total"], 2);
        assert_eq!(result["total_pages"], 1);
    }

    #[tokio::test]
    async fn test_list_pies_paged() {
        let temp = TempDir::new().unwrap();
        let ctx = ContentContext::new(temp.path().join(".pierack"));

        for i in 0..5 {
            AddPie::new(format!("Pie {}", i)).execute(&ctx).await.unwrap();
        }

        let result = ListPies::new()
            .with_query(PieQuery::new().with_per_page(2).with_page(3))
            .execute(&ctx)
            .await
            .unwrap();

        assert_eq!(result["count"], 1);
        assert_eq!(result["total"], 5);
        assert_eq!(result["total_pages"], 3);
        assert_eq!(result["page"], 3);
    }
}
