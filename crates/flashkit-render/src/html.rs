//! HTML escaping.

/// Escapes a string for safe interpolation into HTML text and attribute
/// values.
///
/// Every caller-supplied string in this crate (message text, titles, button
/// labels, passthrough category names) must go through this before being
/// pushed into a fragment.
#[must_use]
pub fn html_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_significant_characters() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("a&b"), "a&amp;b");
        assert_eq!(html_escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(html_escape("it's"), "it&#39;s");
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(html_escape("Saved successfully"), "Saved successfully");
        assert_eq!(html_escape("ünïcodé ✓"), "ünïcodé ✓");
    }
}
