//! Row-action customization for the admin list

/// Key of the stock "move to trash" action
pub const ACTION_TRASH: &str = "trash";

/// One inline action on a list row: a stable key and its markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowAction {
    pub key: String,
    pub markup: String,
}

impl RowAction {
    pub fn new(key: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            markup: markup.into(),
        }
    }
}

/// Replace the stock trash action with a confirm-guarded Delete link
///
/// Rows without a trash action, and every other action (edit, view), pass
/// through unchanged.
pub fn customize_row_actions(actions: Vec<RowAction>, delete_url: &str) -> Vec<RowAction> {
    actions
        .into_iter()
        .map(|action| {
            if action.key == ACTION_TRASH {
                RowAction::new(ACTION_TRASH, delete_markup(delete_url))
            } else {
                action
            }
        })
        .collect()
}

fn delete_markup(delete_url: &str) -> String {
    format!(
        "<a href=\"{}\" onclick=\"return confirm('Are you sure you want to delete this pie?');\" class=\"submitdelete\" aria-label=\"Delete this pie\">Delete</a>",
        html_escape::encode_double_quoted_attribute(delete_url)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock_actions() -> Vec<RowAction> {
        vec![
            RowAction::new("edit", "<a href=\"/admin/pies/1\">Edit</a>"),
            RowAction::new(ACTION_TRASH, "<a href=\"/trash/1\">Bin</a>"),
            RowAction::new("view", "<a href=\"/pies/1\">View</a>"),
        ]
    }

    #[test]
    fn test_trash_replaced_with_delete() {
        let actions = customize_row_actions(stock_actions(), "/admin/pies/1/delete?_nonce=abc");

        let trash = actions.iter().find(|a| a.key == ACTION_TRASH).unwrap();
        assert!(trash.markup.contains(">Delete</a>"));
        assert!(trash.markup.contains("return confirm("));
        assert!(trash.markup.contains("/admin/pies/1/delete?_nonce=abc"));
    }

    #[test]
    fn test_other_actions_pass_through() {
        let actions = customize_row_actions(stock_actions(), "/delete");

        assert_eq!(actions.len(), 3);
        assert_eq!(actions[0], RowAction::new("edit", "<a href=\"/admin/pies/1\">Edit</a>"));
        assert_eq!(actions[2].key, "view");
    }

    #[test]
    fn test_no_trash_action_no_change() {
        let actions = vec![RowAction::new("edit", "<a>Edit</a>")];
        let result = customize_row_actions(actions.clone(), "/delete");
        assert_eq!(result, actions);
    }

    #[test]
    fn test_delete_url_is_attribute_escaped() {
        let actions = customize_row_actions(
            vec![RowAction::new(ACTION_TRASH, "x")],
            "/delete?a=1&b=\"2\"",
        );
        assert!(actions[0].markup.contains("&amp;"));
        assert!(!actions[0].markup.contains("=\"2\"\""));
    }
}
