//! Admin list-table columns
//!
//! The column transform is pure: it takes whatever columns the list screen
//! already has, slots the pie columns in, and keeps `date` last no matter
//! where it sat in the input.

use pierack_content::sanitize::{excerpt_words, EXCERPT_WORD_COUNT};
use pierack_content::{PieRecord, META_INGREDIENTS, META_PIE_TYPE};

pub const COL_TITLE: &str = "title";
pub const COL_DATE: &str = "date";
pub const COL_PIE_TYPE: &str = "pie_type";
pub const COL_INGREDIENTS: &str = "ingredients";
pub const COL_EXCERPT: &str = "excerpt";

/// A list-table column: a stable key and a display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub key: String,
    pub label: String,
}

impl Column {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// The columns a plain list screen starts with
pub fn default_columns() -> Vec<Column> {
    vec![
        Column::new(COL_TITLE, "Title"),
        Column::new(COL_DATE, "Date"),
    ]
}

/// Insert the pie columns, keeping `date` last
///
/// The `date` column is removed and re-appended after the custom columns so
/// it stays last regardless of its position in the input; `pie_type`,
/// `ingredients`, and `excerpt` slot in before it, in that fixed order.
pub fn list_columns(existing: Vec<Column>) -> Vec<Column> {
    let mut date = None;
    let mut columns: Vec<Column> = existing
        .into_iter()
        .filter_map(|c| {
            if c.key == COL_DATE {
                date = Some(c);
                None
            } else {
                Some(c)
            }
        })
        .collect();

    columns.push(Column::new(COL_PIE_TYPE, "Pie Type"));
    columns.push(Column::new(COL_INGREDIENTS, "Ingredients"));
    columns.push(Column::new(COL_EXCERPT, "Description"));
    columns.push(date.unwrap_or_else(|| Column::new(COL_DATE, "Date")));

    columns
}

/// Render one cell for a pie row
///
/// Metadata cells are HTML-escaped; the excerpt cell shows the escaped
/// computed summary of the description. Unknown keys render empty so extra
/// columns from elsewhere pass through harmlessly.
pub fn render_column(key: &str, record: &PieRecord) -> String {
    match key {
        COL_PIE_TYPE => html_escape::encode_text(record.meta(META_PIE_TYPE)).into_owned(),
        COL_INGREDIENTS => html_escape::encode_text(record.meta(META_INGREDIENTS)).into_owned(),
        COL_EXCERPT => {
            let summary = excerpt_words(&record.pie.description, EXCERPT_WORD_COUNT);
            html_escape::encode_text(&summary).into_owned()
        }
        _ => String::new(),
    }
}
