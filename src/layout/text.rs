//! Count-based truncation and placeholder text
//!
//! Lists are cut by item count, never by measured width. Whatever is cut is
//! reported with a trailing `+N more`.

/// Shown in place of an empty text node
pub const TEXT_PLACEHOLDER: &str = "Text not available";

/// `+N more`, or `None` when nothing was hidden
pub fn more(hidden: usize) -> Option<String> {
    (hidden > 0).then(|| format!("+{} more", hidden))
}

/// Split off the first `limit` items; returns them and the hidden count
pub fn visible<T>(items: &[T], limit: usize) -> (&[T], usize) {
    let shown = items.len().min(limit);
    (&items[..shown], items.len() - shown)
}

/// One `• item` per line, up to `limit`
pub fn bullets(items: &[String], limit: Option<usize>) -> String {
    let (shown, hidden) = visible(items, limit.unwrap_or(usize::MAX));
    let mut lines: Vec<String> = shown.iter().map(|item| format!("• {}", item)).collect();
    lines.extend(more(hidden));
    lines.join("\n")
}

/// Bullets, or `placeholder` for an empty list
pub fn bullets_or(items: &[String], placeholder: &str) -> String {
    if items.is_empty() {
        placeholder.to_string()
    } else {
        bullets(items, None)
    }
}

/// Items joined by `sep`, up to `limit`, with the indicator appended
pub fn joined(items: &[String], sep: &str, limit: Option<usize>) -> String {
    let (shown, hidden) = visible(items, limit.unwrap_or(usize::MAX));
    let mut text = shown.join(sep);
    if let Some(indicator) = more(hidden) {
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(&indicator);
    }
    text
}

/// `text`, or `placeholder` when blank
pub fn or_placeholder<'a>(text: &'a str, placeholder: &'a str) -> &'a str {
    if text.trim().is_empty() {
        placeholder
    } else {
        text
    }
}

/// `Title · N noun`
pub fn count_heading(title: &str, count: usize, noun: &str) -> String {
    format!("{} · {} {}", title, count, noun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_bullets_truncate_with_indicator() {
        let items = list(&["a", "b", "c", "d"]);
        assert_eq!(bullets(&items, Some(2)), "• a\n• b\n+2 more");
        assert_eq!(bullets(&items[..2], Some(2)), "• a\n• b");
        assert_eq!(bullets(&items, None), "• a\n• b\n• c\n• d");
    }

    #[test]
    fn test_joined() {
        let items = list(&["web", "email", "sms"]);
        assert_eq!(joined(&items, ", ", Some(2)), "web, email +1 more");
        assert_eq!(joined(&items, " · ", None), "web · email · sms");
        assert_eq!(joined(&[], ", ", Some(2)), "");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(or_placeholder("  ", "No vision specified"), "No vision specified");
        assert_eq!(or_placeholder("x", "unused"), "x");
        assert_eq!(bullets_or(&[], "No risks identified"), "No risks identified");
    }

    #[test]
    fn test_visible_counts() {
        let items = [1, 2, 3];
        assert_eq!(visible(&items, 5), (&items[..], 0));
        assert_eq!(visible(&items, 1), (&items[..1], 2));
        assert_eq!(more(0), None);
    }
}
