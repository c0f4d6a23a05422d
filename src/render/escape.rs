//! HTML escaping for string templates.

#[cfg(test)]
#[path = "escape_test.rs"]
mod escape_test;

/// Escape the five HTML-significant characters.
///
/// Every user-supplied value interpolated into dashboard markup goes through
/// here, attributes included.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape an optional value, substituting `fallback` when absent or blank.
pub fn escape_or(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => escape_html(v),
        _ => escape_html(fallback),
    }
}

/// Human label for a snake_case status (`in_progress` -> `in progress`).
pub fn status_label(status: &str) -> String {
    status.replace('_', " ")
}

/// CSS modifier for a status badge (`status-in_progress`).
pub fn status_class(status: &str) -> String {
    escape_html(&status.to_lowercase())
}

const PENDING: &str = "Pending";

fn present(status: Option<&str>) -> Option<&str> {
    status.filter(|s| !s.trim().is_empty())
}

/// Escaped display text for a status; missing or blank reads "Pending".
pub fn status_text(status: Option<&str>) -> String {
    present(status).map_or_else(|| PENDING.to_owned(), |s| escape_html(&status_label(s)))
}

/// Status badge span. A missing status gets the `status-pending` class and
/// the "Pending" label.
pub fn status_badge(status: Option<&str>) -> String {
    let class = present(status).map_or_else(|| "pending".to_owned(), status_class);
    format!(r#"<span class="status-badge status-{class}">{}</span>"#, status_text(status))
}
