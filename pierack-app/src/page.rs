//! Page chrome shared by every HTML response
//!
//! The stylesheet and script load on every page, so a directive can render
//! anywhere without the handler knowing about assets.

/// Wrap a body fragment in the standard document shell
pub fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{} — Pierack</title>
<link rel="stylesheet" href="/assets/pie-directive.css">
</head>
<body>
{}
<script src="/assets/pie-directive.js"></script>
</body>
</html>
"#,
        html_escape::encode_text(title),
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_wraps_body_and_escapes_title() {
        let html = page("Pies & More", "<p>body</p>");
        assert!(html.contains("<title>Pies &amp; More — Pierack</title>"));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains("pie-directive.css"));
        assert!(html.contains("pie-directive.js"));
    }
}
