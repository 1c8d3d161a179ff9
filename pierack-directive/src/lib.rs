//! The embeddable `[pies]` listing directive
//!
//! A directive is a text marker embedded in page content, expanded into
//! markup at display time:
//!
//! ```text
//! [pies lookup="Apple" ingredients="cinnamon" posts_per_page="5"]
//! ```
//!
//! Expansion parses the marker's attributes, queries the catalog, and emits
//! a collapsible listing with pagination controls. The renderer consumes
//! explicit query results — nothing here mutates ambient state, so content
//! rendered after a directive on the same page is unaffected.

mod expand;
mod pagination;
mod parse;
mod render;

pub use expand::expand_content;
pub use pagination::paginate_links;
pub use parse::{parse_attrs, DirectiveAttrs, DEFAULT_POSTS_PER_PAGE, DIRECTIVE_NAME};
pub use render::{render_directive, render_listing};
