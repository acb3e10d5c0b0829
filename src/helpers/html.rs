//! HTML helper functions

/// Characters kept by [`excerpt`] unless configured otherwise
pub const DEFAULT_EXCERPT_LENGTH: usize = 150;

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Strip HTML tags from a string
///
/// A `<` only opens a tag when followed by a letter, `/` or `!`; any other
/// `<` (as in `x < 5`) is kept as text. A tag left open at the end of the
/// input swallows the rest of it.
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '<' if !in_tag && chars.peek().is_some_and(|&n| starts_tag(n)) => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

fn starts_tag(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '/' || c == '!'
}

/// Short plain-text preview of raw post content
///
/// Takes the first `length` characters (markup included), strips tags from
/// that prefix and always appends `...`.
///
/// # Examples
/// ```ignore
/// excerpt("<p>Hello</p> world", 9) // -> "Hello..."
/// ```
pub fn excerpt(content: &str, length: usize) -> String {
    let prefix: String = content.chars().take(length).collect();
    format!("{}...", strip_html(&prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html("<p>Hello <b>World</b></p>"), "Hello World");
        assert_eq!(strip_html("a > b"), "a > b");
        assert_eq!(strip_html("cut <a hre"), "cut ");
        assert_eq!(strip_html("if x < 5 && y <= 3"), "if x < 5 && y <= 3");
        assert_eq!(strip_html("a<!-- note -->b</p>"), "ab");
    }

    #[test]
    fn test_excerpt_plain_text() {
        let content: String = "abcdefghij".repeat(20);
        assert_eq!(content.chars().count(), 200);

        let out = excerpt(&content, DEFAULT_EXCERPT_LENGTH);
        assert_eq!(out, format!("{}...", &content[..150]));
    }

    #[test]
    fn test_excerpt_short_content_still_gets_marker() {
        assert_eq!(excerpt("short", 150), "short...");
        assert_eq!(excerpt("", 150), "...");
    }

    #[test]
    fn test_excerpt_strips_tags_after_truncation() {
        assert_eq!(excerpt("<p>Hello</p> world", 9), "Hello...");
        // Markdown markup is not touched
        assert_eq!(excerpt("# Title\n**bold**", 16), "# Title\n**bold**...");
    }

    #[test]
    fn test_excerpt_keeps_comparisons() {
        let content = "If x < 5 then the loop exits early and we print the result.";
        assert_eq!(excerpt(content, DEFAULT_EXCERPT_LENGTH), format!("{}...", content));
    }

    #[test]
    fn test_excerpt_counts_characters() {
        assert_eq!(excerpt("héllo wörld", 5), "héllo...");
    }
}
