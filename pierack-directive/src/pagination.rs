//! Pagination controls

/// Build the pagination navigation list
///
/// Emits numbered page links with the current page as plain text, plus
/// "« Prev" and "Next »" links when there is somewhere to go. Returns an
/// empty string when everything fits on one page. `extra_query` pairs (for
/// example a search term) are carried on every link.
pub fn paginate_links(
    base_path: &str,
    extra_query: &[(&str, &str)],
    current: u32,
    total_pages: u32,
) -> String {
    if total_pages <= 1 {
        return String::new();
    }

    let mut items = Vec::new();

    if current > 1 {
        items.push(link_item(
            base_path,
            extra_query,
            current - 1,
            "« Prev",
            "page-numbers prev",
        ));
    }

    for n in 1..=total_pages {
        if n == current {
            items.push(format!(
                "<li><span class=\"page-numbers current\">{}</span></li>",
                n
            ));
        } else {
            items.push(link_item(
                base_path,
                extra_query,
                n,
                &n.to_string(),
                "page-numbers",
            ));
        }
    }

    if current < total_pages {
        items.push(link_item(
            base_path,
            extra_query,
            current + 1,
            "Next »",
            "page-numbers next",
        ));
    }

    format!(
        "<nav class=\"pagination\"><ul>{}</ul></nav>\n",
        items.join("")
    )
}

fn link_item(
    base_path: &str,
    extra_query: &[(&str, &str)],
    page: u32,
    text: &str,
    class: &str,
) -> String {
    let url = page_url(base_path, extra_query, page);
    format!(
        "<li><a class=\"{}\" href=\"{}\">{}</a></li>",
        class,
        html_escape::encode_double_quoted_attribute(&url),
        text
    )
}

fn page_url(base_path: &str, extra_query: &[(&str, &str)], page: u32) -> String {
    let mut url = String::from(base_path);
    let mut sep = '?';
    for (key, value) in extra_query {
        url.push(sep);
        url.push_str(&urlencoding::encode(key));
        url.push('=');
        url.push_str(&urlencoding::encode(value));
        sep = '&';
    }
    url.push(sep);
    url.push_str("paged=");
    url.push_str(&page.to_string());
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_page_renders_nothing() {
        assert_eq!(paginate_links("/pies", &[], 1, 1), "");
        assert_eq!(paginate_links("/pies", &[], 1, 0), "");
    }

    #[test]
    fn test_three_pages_three_numbered_links() {
        let nav = paginate_links("/pies", &[], 1, 3);
        // One entry per page, plus Next
        assert_eq!(nav.matches("<li>").count(), 4);
        assert!(nav.contains("<span class=\"page-numbers current\">1</span>"));
        assert!(nav.contains("paged=2"));
        assert!(nav.contains("paged=3"));
    }

    #[test]
    fn test_first_page_has_next_but_no_prev() {
        let nav = paginate_links("/pies", &[], 1, 3);
        assert!(!nav.contains("« Prev"));
        assert!(nav.contains("Next »"));
    }

    #[test]
    fn test_last_page_has_prev_but_no_next() {
        let nav = paginate_links("/pies", &[], 3, 3);
        assert!(nav.contains("« Prev"));
        assert!(!nav.contains("Next »"));
    }

    #[test]
    fn test_middle_page_links_both_neighbors() {
        let nav = paginate_links("/pies", &[], 2, 3);
        assert!(nav.contains("paged=1"));
        assert!(nav.contains("paged=3"));
        assert!(nav.contains("« Prev"));
        assert!(nav.contains("Next »"));
    }

    #[test]
    fn test_extra_query_carried_and_encoded() {
        let nav = paginate_links("/admin/pies", &[("s", "brown sugar")], 1, 2);
        assert!(nav.contains("s=brown%20sugar&amp;paged=2"));
    }
}
