use chrono::{DateTime, Utc};

/// "15 Dec 2024" style date used on result and certificate cards.
#[must_use]
pub fn format_date(value: DateTime<Utc>) -> String {
    value.format("%-d %b %Y").to_string()
}
