//! HTML text extraction utilities for article pages.

use once_cell::sync::Lazy;
use regex::Regex;

/// Find the element whose `id` attribute equals `id` and return its inner
/// HTML.
///
/// Nested elements with the same tag name are balanced, so a `div` inside
/// the target `div` does not end the region early. An element that never
/// closes extends to the end of the document.
pub fn extract_element_by_id<'a>(html: &'a str, id: &str) -> Option<&'a str> {
    let open_re = Regex::new(&format!(
        r#"(?is)<([a-z][a-z0-9]*)\b[^>]*?\sid\s*=\s*["']{}["'][^>]*>"#,
        regex::escape(id)
    ))
    .ok()?;
    let open = open_re.captures(html)?;
    let whole = open.get(0)?;
    let tag = open.get(1)?.as_str();

    if whole.as_str().ends_with("/>") {
        return Some("");
    }

    let start = whole.end();
    let tag_re =
        Regex::new(&format!(r"(?is)<(/?){}\b[^>]*?(/?)>", regex::escape(tag))).ok()?;
    let mut depth = 1usize;
    for caps in tag_re.captures_iter(&html[start..]) {
        let closing = !caps[1].is_empty();
        let self_closing = !caps[2].is_empty();
        if closing {
            depth -= 1;
            if depth == 0 {
                let end = start + caps.get(0)?.start();
                return Some(&html[start..end]);
            }
        } else if !self_closing {
            depth += 1;
        }
    }

    Some(&html[start..])
}

static SCRIPT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("valid script pattern"));
static STYLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style>").expect("valid style pattern"));
static COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid comment pattern"));
// Block boundaries must stay word boundaries
static BLOCK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)</?(div|p|br|h[1-6]|li|ul|ol|dl|dt|dd|tr|td|th|table|blockquote|section",
        r"|article|header|footer|main|aside|figure|figcaption|details|summary)\b[^>]*>"
    ))
    .expect("valid block pattern")
});
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid tag pattern"));
static SPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t\u{a0}]+").expect("valid space pattern"));
static NEWLINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n+").expect("valid newline pattern"));

/// Extract plain text from HTML content.
///
/// Strips `<script>`, `<style>`, comments and all remaining tags, turns
/// block elements into line breaks, decodes HTML entities, and normalizes
/// whitespace.
pub fn html_to_text(html: &str) -> String {
    let text = SCRIPT_RE.replace_all(html, "");
    let text = STYLE_RE.replace_all(&text, "");
    let text = COMMENT_RE.replace_all(&text, "");
    let text = BLOCK_RE.replace_all(&text, "\n");
    let text = TAG_RE.replace_all(&text, "");
    let text = html_escape::decode_html_entities(&text);
    let text = SPACE_RE.replace_all(&text, " ");
    let text = NEWLINE_RE.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Text of an inline fragment such as a table cell: tags removed, entities
/// decoded, whitespace collapsed to single spaces.
pub fn inline_text(html: &str) -> String {
    let text = TAG_RE.replace_all(html, " ");
    html_escape::decode_html_entities(&text)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
