use chrono::{DateTime, Datelike, Utc};

/// Format a todo's creation time relative to now
pub fn format_created(created_at: &DateTime<Utc>) -> String {
    format_created_at(created_at, &Utc::now())
}

/// Tiered display:
/// - Relative for <1 day: "just now", "5m ago", "2h ago"
/// - Absolute after that: "Jan 15", "Dec 3, 2024"
fn format_created_at(created_at: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(*created_at).num_seconds().max(0);
    let minutes = seconds / 60;
    let hours = minutes / 60;

    if hours >= 24 {
        format_absolute(created_at, now)
    } else if hours > 0 {
        format!("{}h ago", hours)
    } else if minutes > 0 {
        format!("{}m ago", minutes)
    } else {
        "just now".to_string()
    }
}

fn format_absolute(created_at: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    if created_at.year() == now.year() {
        created_at.format("%b %-d").to_string()
    } else {
        created_at.format("%b %-d, %Y").to_string()
    }
}
