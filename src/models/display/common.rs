//! Common display utilities and helpers

use chrono::{DateTime, NaiveDateTime, Utc};

/// Placeholder for absent values
pub const EMPTY: &str = "-";

/// Truncate string to max characters with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Optional text or the placeholder
pub fn or_empty(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => EMPTY.to_string(),
    }
}

/// Yes/no for the active flag
pub fn active_label(active: bool) -> String {
    if active { "yes" } else { "no" }.to_string()
}

/// Format a server timestamp as `YYYY-MM-DD HH:MM` (UTC).
///
/// The server sends ISO 8601, sometimes without an offset. Unparseable
/// input is shown as-is.
pub fn format_timestamp(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return EMPTY.to_string();
    };

    if let Ok(dt) = raw.parse::<DateTime<Utc>>() {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }

    raw.to_string()
}

/// Date part (`YYYY-MM-DD`) of a server timestamp
pub fn format_date(value: Option<&str>) -> String {
    match value.map(str::trim).filter(|v| v.len() >= 10) {
        Some(v) => v.chars().take(10).collect(),
        None => or_empty(value),
    }
}
