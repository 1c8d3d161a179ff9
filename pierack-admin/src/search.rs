//! Admin search rewrite
//!
//! The native search only matches titles. On the admin list screen that is
//! too narrow: people search for what's *in* a pie. This rewrite trades the
//! native title match for an OR across the two metadata fields — metadata
//! search supersedes rather than supplements native search.

use pierack_content::{MetaFilter, MetaRelation, PieQuery, QueryScope, META_INGREDIENTS, META_PIE_TYPE};

/// Rewrite an admin list query's search into metadata conditions
///
/// Only acts when the query is the admin list query AND a search term is
/// present; anything else passes through untouched. When active, the native
/// term is cleared and the query's filters are replaced with substring
/// conditions on `_pie_type` OR `_ingredients`.
pub fn apply_search(query: &mut PieQuery) {
    if query.scope != QueryScope::AdminList {
        return;
    }
    let Some(term) = query.search.take() else {
        return;
    };
    if term.is_empty() {
        return;
    }

    query.meta_filters = vec![
        MetaFilter::substring(META_PIE_TYPE, &term),
        MetaFilter::substring(META_INGREDIENTS, term),
    ];
    query.relation = MetaRelation::Or;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrites_admin_search_to_meta_or() {
        let mut query = PieQuery::new()
            .with_scope(QueryScope::AdminList)
            .with_search("cinnamon");

        apply_search(&mut query);

        assert!(query.search.is_none(), "native term cleared");
        assert_eq!(query.relation, MetaRelation::Or);
        assert_eq!(query.meta_filters.len(), 2);
        assert_eq!(query.meta_filters[0].key, META_PIE_TYPE);
        assert_eq!(query.meta_filters[1].key, META_INGREDIENTS);
        assert_eq!(query.meta_filters[0].value, "cinnamon");
    }

    #[test]
    fn test_replaces_existing_filters() {
        let mut query = PieQuery::new()
            .with_scope(QueryScope::AdminList)
            .with_search("cherry")
            .with_meta_filter(MetaFilter::substring(META_PIE_TYPE, "apple"));

        apply_search(&mut query);

        assert_eq!(query.meta_filters.len(), 2);
        assert!(query.meta_filters.iter().all(|f| f.value == "cherry"));
    }

    #[test]
    fn test_listing_queries_pass_through() {
        let mut query = PieQuery::new().with_search("cinnamon");

        apply_search(&mut query);

        assert_eq!(query.search.as_deref(), Some("cinnamon"));
        assert!(query.meta_filters.is_empty());
    }

    #[test]
    fn test_admin_query_without_term_passes_through() {
        let mut query = PieQuery::new().with_scope(QueryScope::AdminList);

        apply_search(&mut query);

        assert!(query.search.is_none());
        assert!(query.meta_filters.is_empty());
    }
}
