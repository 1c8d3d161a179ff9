//! The listing renderer

use crate::pagination::paginate_links;
use crate::parse::DirectiveAttrs;
use pierack_content::{
    ContentContext, MetaFilter, PieQuery, QueryResults, Result, META_INGREDIENTS, META_PIE_TYPE,
};

/// Query the catalog for a directive and render the listing
///
/// Non-empty `lookup` and `ingredients` attributes become substring
/// conditions; when both are present a pie must match both. `page` is the
/// page parameter from the surrounding request, clamped to a minimum of 1
/// by the query. Pagination links point back at `base_path`.
pub async fn render_directive(
    ctx: &ContentContext,
    attrs: &DirectiveAttrs,
    page: u32,
    base_path: &str,
) -> Result<String> {
    let mut query = PieQuery::new()
        .with_page(page)
        .with_per_page(attrs.posts_per_page);

    if !attrs.lookup.is_empty() {
        query = query.with_meta_filter(MetaFilter::substring(META_PIE_TYPE, &attrs.lookup));
    }
    if !attrs.ingredients.is_empty() {
        query = query.with_meta_filter(MetaFilter::substring(META_INGREDIENTS, &attrs.ingredients));
    }

    let results = query.run(ctx).await?;
    tracing::debug!(
        total = results.total,
        page = results.page,
        "rendering pie listing"
    );

    Ok(render_listing(&results, base_path))
}

/// Render one page of results as a collapsible list
///
/// Each item pairs a clickable `.pie-title` header with a `.pie-details`
/// panel the client script toggles. Type and ingredients are HTML-escaped;
/// the description was sanitized on write and renders as-is.
pub fn render_listing(results: &QueryResults, base_path: &str) -> String {
    let mut out = String::from("<div class=\"pie-list\">\n");

    if results.is_empty() {
        out.push_str("<p>No pies found.</p>\n");
    } else {
        out.push_str("<ul>\n");
        for record in &results.records {
            let title = html_escape::encode_text(&record.pie.title);
            let pie_type = html_escape::encode_text(record.meta(META_PIE_TYPE));
            let ingredients = html_escape::encode_text(record.meta(META_INGREDIENTS));

            out.push_str("<li>\n");
            out.push_str(&format!(
                "<h3 class=\"pie-title\"><span class=\"toggle-arrow\">\u{25b6}</span> {}</h3>\n",
                title
            ));
            out.push_str("<div class=\"pie-details\">\n");
            out.push_str(&format!(
                "<p class=\"pie-type\"><strong>Pie Type:</strong> {}</p>\n",
                pie_type
            ));
            out.push_str(&format!(
                "<p class=\"pie-ingredients\"><strong>Ingredients:</strong> {}</p>\n",
                ingredients
            ));
            out.push_str(&format!(
                "<p class=\"pie-description\"><strong>Description:</strong> {}</p>\n",
                record.pie.description
            ));
            out.push_str("</div>\n</li>\n");
        }
        out.push_str("</ul>\n");
        out.push_str(&paginate_links(
            base_path,
            &[],
            results.page,
            results.total_pages,
        ));
    }

    out.push_str("</div>\n");
    out
}
