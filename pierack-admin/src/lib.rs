//! Admin affordances for the pie catalog
//!
//! Everything the admin screens need beyond raw storage: the list-table
//! column layout and cell rendering, the search rewrite that widens admin
//! search to metadata, row-action customization, and the "Pie Details"
//! editor panel with its token-guarded save path.
//!
//! Components here are plain values and functions. The composition root
//! constructs them and calls them directly with an [`AdminContext`]; there is
//! no global registry.

mod columns;
mod context;
mod details;
mod nonce;
mod principal;
mod row_actions;
mod search;

pub use columns::{
    default_columns, list_columns, render_column, Column, COL_DATE, COL_EXCERPT, COL_INGREDIENTS,
    COL_PIE_TYPE, COL_TITLE,
};
pub use context::AdminContext;
pub use details::{render_details_panel, SavePieDetails, SAVE_PIE_DETAILS};
pub use nonce::Nonces;
pub use principal::{Capability, Principal};
pub use row_actions::{customize_row_actions, RowAction, ACTION_TRASH};
pub use search::apply_search;
