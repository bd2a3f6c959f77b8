//! Small HTML-building helpers shared by every template.
//!
//! All user-entered text passes through `esc` before it reaches a page.
//! Markup-significant characters in form data must render as literal text.

/// Escapes text for interpolation into element content or attribute values.
pub fn esc(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// `<ul>` of escaped items. Blank items are dropped; an all-blank input
/// produces no list at all.
pub fn bullet_list(items: &[String], class: &str) -> String {
    let bullets: String = items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(|item| format!("<li>{}</li>", esc(item)))
        .collect();
    if bullets.is_empty() {
        String::new()
    } else {
        format!("<ul class=\"{class}\">{bullets}</ul>")
    }
}

/// Inline run of escaped fragments joined by a separator, blanks dropped.
/// Used for contact rows and title/organization/date lines.
pub fn meta_line(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .map(esc)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Escaped `<span>` chips, one per non-blank item.
pub fn tag_list(items: &[String], class: &str) -> String {
    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(|item| format!("<span class=\"{class}\">{}</span>", esc(item)))
        .collect()
}
