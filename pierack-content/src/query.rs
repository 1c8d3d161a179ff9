//! Query engine for pie records
//!
//! A [`PieQuery`] describes which records to fetch: optional native search,
//! optional metadata filters (combined with AND or OR), and a page window.
//! Execution reads through the [`ContentContext`] and reports pagination
//! totals alongside the page of records.

use crate::context::ContentContext;
use crate::error::Result;
use crate::types::PieRecord;
use serde::{Deserialize, Serialize};

/// Default page size when a query does not set one
pub const DEFAULT_PER_PAGE: usize = 10;

/// How a metadata filter compares values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetaCompare {
    /// Case-insensitive substring match
    Substring,
    /// Case-insensitive whole-value match
    Exact,
}

/// How multiple metadata filters combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetaRelation {
    And,
    Or,
}

/// A single metadata condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaFilter {
    pub key: String,
    pub value: String,
    pub compare: MetaCompare,
}

impl MetaFilter {
    /// Substring-match condition on a metadata key
    pub fn substring(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            compare: MetaCompare::Substring,
        }
    }

    /// Whole-value condition on a metadata key
    pub fn exact(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            compare: MetaCompare::Exact,
        }
    }

    /// Test the condition against a stored value
    pub fn matches(&self, actual: &str) -> bool {
        let needle = self.value.to_lowercase();
        let haystack = actual.to_lowercase();
        match self.compare {
            MetaCompare::Substring => haystack.contains(&needle),
            MetaCompare::Exact => haystack == needle,
        }
    }
}

/// Where a query originates - the admin list screen or a public listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryScope {
    AdminList,
    #[default]
    Listing,
}

/// A query over pie records
#[derive(Debug, Clone)]
pub struct PieQuery {
    pub scope: QueryScope,
    /// 1-based page number, clamped to a minimum of 1
    pub page: u32,
    pub per_page: usize,
    /// Native search term, matched against titles
    pub search: Option<String>,
    pub meta_filters: Vec<MetaFilter>,
    pub relation: MetaRelation,
}

impl Default for PieQuery {
    fn default() -> Self {
        Self {
            scope: QueryScope::default(),
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            search: None,
            meta_filters: Vec::new(),
            relation: MetaRelation::And,
        }
    }
}

impl PieQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scope(mut self, scope: QueryScope) -> Self {
        self.scope = scope;
        self
    }

    /// Set the page number, clamped to a minimum of 1
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// Set the native search term. Empty strings are treated as no search.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = if term.is_empty() { None } else { Some(term) };
        self
    }

    pub fn with_meta_filter(mut self, filter: MetaFilter) -> Self {
        self.meta_filters.push(filter);
        self
    }

    pub fn with_relation(mut self, relation: MetaRelation) -> Self {
        self.relation = relation;
        self
    }

    /// Execute the query against the store
    ///
    /// Matching records are ordered newest first, then windowed to the
    /// requested page. Totals always reflect the full match set.
    pub async fn run(&self, ctx: &ContentContext) -> Result<QueryResults> {
        let pies = ctx.read_all_pies().await?;

        let mut matched = Vec::new();
        for pie in pies {
            let meta = ctx.read_meta(&pie.id).await?;
            let record = PieRecord::new(pie, meta);
            if self.matches(&record) {
                matched.push(record);
            }
        }

        // Newest first; IDs are ULIDs so they tie-break in creation order
        matched.sort_by(|a, b| {
            b.pie
                .created_at
                .cmp(&a.pie.created_at)
                .then_with(|| b.pie.id.cmp(&a.pie.id))
        });

        let total = matched.len();
        let total_pages = total.div_ceil(self.per_page) as u32;

        let start = (self.page as usize - 1) * self.per_page;
        let records: Vec<PieRecord> = if start >= total {
            Vec::new()
        } else {
            matched
                .into_iter()
                .skip(start)
                .take(self.per_page)
                .collect()
        };

        Ok(QueryResults {
            records,
            total,
            total_pages,
            page: self.page,
            per_page: self.per_page,
        })
    }

    fn matches(&self, record: &PieRecord) -> bool {
        if let Some(term) = &self.search {
            if !record
                .pie
                .title
                .to_lowercase()
                .contains(&term.to_lowercase())
            {
                return false;
            }
        }

        if self.meta_filters.is_empty() {
            return true;
        }

        match self.relation {
            MetaRelation::And => self
                .meta_filters
                .iter()
                .all(|f| f.matches(record.meta(&f.key))),
            MetaRelation::Or => self
                .meta_filters
                .iter()
                .any(|f| f.matches(record.meta(&f.key))),
        }
    }
}

/// One page of query results plus pagination totals
#[derive(Debug, Serialize)]
pub struct QueryResults {
    pub records: Vec<PieRecord>,
    /// Total matches across all pages
    pub total: usize,
    pub total_pages: u32,
    pub page: u32,
    pub per_page: usize,
}

impl QueryResults {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{META_INGREDIENTS, META_PIE_TYPE};
    use crate::types::Pie;
    use tempfile::TempDir;

    async fn setup() -> (TempDir, ContentContext) {
        let temp = TempDir::new().unwrap();
        let ctx = ContentContext::new(temp.path().join(".pierack"));
        ctx.create_directories().await.unwrap();
        (temp, ctx)
    }

    async fn add_pie(ctx: &ContentContext, title: &str, pie_type: &str, ingredients: &str) {
        let pie = Pie::new(title);
        ctx.write_pie(&pie).await.unwrap();
        if !pie_type.is_empty() {
            ctx.update_meta(&pie.id, META_PIE_TYPE, pie_type).await.unwrap();
        }
        if !ingredients.is_empty() {
            ctx.update_meta(&pie.id, META_INGREDIENTS, ingredients)
                .await
                .unwrap();
        }
    }

    #[test]
    fn test_filter_matching() {
        let f = MetaFilter::substring(META_PIE_TYPE, "apple");
        assert!(f.matches("Apple Pie"));
        assert!(f.matches("crabapple"));
        assert!(!f.matches("cherry"));

        let f = MetaFilter::exact(META_PIE_TYPE, "Fruit");
        assert!(f.matches("fruit"));
        assert!(!f.matches("fruity"));
    }

    #[test]
    fn test_empty_search_is_no_search() {
        let q = PieQuery::new().with_search("");
        assert!(q.search.is_none());
    }

    #[test]
    fn test_page_clamps_to_one() {
        let q = PieQuery::new().with_page(0);
        assert_eq!(q.page, 1);
    }

    #[tokio::test]
    async fn test_substring_filter_selects_matching_records() {
        let (_temp, ctx) = setup().await;
        add_pie(&ctx, "Apple Crumble", "Apple", "Apples, sugar").await;
        add_pie(&ctx, "Cherry Lattice", "Cherry", "Cherries, sugar").await;

        let results = PieQuery::new()
            .with_meta_filter(MetaFilter::substring(META_PIE_TYPE, "Apple"))
            .run(&ctx)
            .await
            .unwrap();

        assert_eq!(results.total, 1);
        assert_eq!(results.records[0].pie.title, "Apple Crumble");
    }

    #[tokio::test]
    async fn test_and_relation_requires_both() {
        let (_temp, ctx) = setup().await;
        add_pie(&ctx, "Apple Crumble", "Apple", "Apples, cinnamon").await;
        add_pie(&ctx, "Apple Plain", "Apple", "Apples only").await;

        let results = PieQuery::new()
            .with_meta_filter(MetaFilter::substring(META_PIE_TYPE, "Apple"))
            .with_meta_filter(MetaFilter::substring(META_INGREDIENTS, "cinnamon"))
            .with_relation(MetaRelation::And)
            .run(&ctx)
            .await
            .unwrap();

        assert_eq!(results.total, 1);
        assert_eq!(results.records[0].pie.title, "Apple Crumble");
    }

    #[tokio::test]
    async fn test_or_relation_accepts_either() {
        let (_temp, ctx) = setup().await;
        add_pie(&ctx, "Apple Crumble", "Apple", "Apples").await;
        add_pie(&ctx, "Mystery Pie", "Unknown", "Cinnamon, nutmeg").await;
        add_pie(&ctx, "Cherry Lattice", "Cherry", "Cherries").await;

        let results = PieQuery::new()
            .with_meta_filter(MetaFilter::substring(META_PIE_TYPE, "cinnamon"))
            .with_meta_filter(MetaFilter::substring(META_INGREDIENTS, "cinnamon"))
            .with_relation(MetaRelation::Or)
            .run(&ctx)
            .await
            .unwrap();

        assert_eq!(results.total, 1);
        assert_eq!(results.records[0].pie.title, "Mystery Pie");
    }

    #[tokio::test]
    async fn test_search_matches_titles_only() {
        let (_temp, ctx) = setup().await;
        add_pie(&ctx, "Apple Crumble", "Apple", "cinnamon").await;
        add_pie(&ctx, "Cinnamon Swirl", "Pastry", "flour").await;

        let results = PieQuery::new().with_search("cinnamon").run(&ctx).await.unwrap();

        assert_eq!(results.total, 1);
        assert_eq!(results.records[0].pie.title, "Cinnamon Swirl");
    }

    #[tokio::test]
    async fn test_pagination_windows_and_totals() {
        let (_temp, ctx) = setup().await;
        for i in 0..7 {
            add_pie(&ctx, &format!("Pie {}", i), "Fruit", "fruit").await;
        }

        let page1 = PieQuery::new()
            .with_per_page(3)
            .with_page(1)
            .run(&ctx)
            .await
            .unwrap();
        assert_eq!(page1.records.len(), 3);
        assert_eq!(page1.total, 7);
        assert_eq!(page1.total_pages, 3);

        let page3 = PieQuery::new()
            .with_per_page(3)
            .with_page(3)
            .run(&ctx)
            .await
            .unwrap();
        assert_eq!(page3.records.len(), 1);

        let page9 = PieQuery::new()
            .with_per_page(3)
            .with_page(9)
            .run(&ctx)
            .await
            .unwrap();
        assert!(page9.is_empty());
        assert_eq!(page9.total, 7);
    }

    #[tokio::test]
    async fn test_empty_store_reports_zero_pages() {
        let (_temp, ctx) = setup().await;
        let results = PieQuery::new().run(&ctx).await.unwrap();
        assert!(results.is_empty());
        assert_eq!(results.total_pages, 0);
    }
}
