//! Shared cell formatting helpers

use chrono::{DateTime, Utc};

/// Cut `s` to at most `max_len` characters, ending with `...` when shortened
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}

/// Compact age of `then` relative to `now` (`45m`, `3h`, `2d`)
pub fn format_age(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let age = now.signed_duration_since(then);
    if age.num_minutes() < 1 {
        "now".to_string()
    } else if age.num_hours() < 1 {
        format!("{}m", age.num_minutes())
    } else if age.num_days() < 1 {
        format!("{}h", age.num_hours())
    } else {
        format!("{}d", age.num_days())
    }
}
