//! Sanitization of submitted field values
//!
//! Two flavors: plain-text for single-line fields (markup stripped, all
//! whitespace collapsed) and multi-line-safe for textarea fields (markup
//! stripped, newlines preserved). Both run on every write path, so stored
//! values can be trusted not to contain markup.

/// Word count for computed excerpts
pub const EXCERPT_WORD_COUNT: usize = 55;

/// Sanitize a single-line text field
///
/// Strips markup and control characters, collapses whitespace runs to a
/// single space, and trims.
pub fn sanitize_text_field(input: &str) -> String {
    let stripped = strip_tags(input);

    let mut out = String::with_capacity(stripped.len());
    let mut pending_space = false;
    for ch in stripped.chars() {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if ch.is_control() {
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(ch);
    }
    out
}

/// Sanitize a multi-line textarea field
///
/// Strips markup and control characters but keeps newlines and tabs, so
/// ingredient lists survive intact. CRLF normalizes to LF.
pub fn sanitize_textarea_field(input: &str) -> String {
    let stripped = strip_tags(input);

    let mut out = String::with_capacity(stripped.len());
    for ch in stripped.replace("\r\n", "\n").chars() {
        if ch == '\r' {
            out.push('\n');
            continue;
        }
        if ch.is_control() && ch != '\n' && ch != '\t' {
            continue;
        }
        out.push(ch);
    }
    out.trim().to_string()
}

/// Compute a short summary: the first `max_words` words, with an ellipsis
/// when the text was longer
pub fn excerpt_words(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words {
        return words.join(" ");
    }
    let mut out = words[..max_words].join(" ");
    out.push('…');
    out
}

/// Remove `<...>` spans. An unclosed `<` drops the remainder of the input.
fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(ch) = chars.next() {
        if ch != '<' {
            out.push(ch);
            continue;
        }
        // Inside a tag: consume up to and including the closing '>'
        for inner in chars.by_ref() {
            if inner == '>' {
                break;
            }
        }
    }
    out
}
