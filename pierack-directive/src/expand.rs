//! Content expansion
//!
//! Walks a content string, replacing each `[pies ...]` marker with its
//! rendered listing. Text outside markers passes through byte-for-byte.

use crate::parse::{find_directive, parse_attrs};
use crate::render::render_directive;
use pierack_content::{ContentContext, Result};

/// Expand every directive in `content`
///
/// `page` is the surrounding request's pagination parameter and applies to
/// each directive on the page; `base_path` is where pagination links point.
pub async fn expand_content(
    ctx: &ContentContext,
    content: &str,
    page: u32,
    base_path: &str,
) -> Result<String> {
    let mut out = String::with_capacity(content.len());
    let mut pos = 0;

    while let Some(directive) = find_directive(content, pos) {
        out.push_str(&content[pos..directive.start]);

        let attrs = parse_attrs(&directive.raw_attrs);
        out.push_str(&render_directive(ctx, &attrs, page, base_path).await?);

        pos = directive.end;
    }

    out.push_str(&content[pos..]);
    Ok(out)
}
