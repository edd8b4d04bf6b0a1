//! Display formatting for dates and prices

use chrono::{DateTime, Local, Utc};

/// Compact age for activity feeds: `5m ago`, `3h ago`, `2d ago`
pub fn time_ago(date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(date) = date else {
        return "Unknown".to_string();
    };
    let elapsed = now.signed_duration_since(date);
    let minutes = elapsed.num_minutes().max(0);
    let hours = elapsed.num_hours().max(0);
    let days = elapsed.num_days().max(0);

    if minutes < 60 {
        format!("{}m ago", minutes)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else {
        format!("{}d ago", days)
    }
}

/// Day-granular age for listings: `Today`, `Yesterday`, `N days ago`
pub fn days_ago(date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(date) = date else {
        return "Unknown".to_string();
    };
    match now.signed_duration_since(date).num_days().max(0) {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        days => format!("{} days ago", days),
    }
}

/// Rupee amount rounded to whole units with thousands separators
pub fn format_rupees(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{}", rounded.abs() as u64);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("₹{}{}", sign, grouped)
}

/// Local calendar date, or `fallback` when absent
pub fn format_date(date: Option<DateTime<Utc>>, fallback: &str) -> String {
    date.map(|d| d.with_timezone(&Local).format("%d %b %Y").to_string())
        .unwrap_or_else(|| fallback.to_string())
}

/// Local date and time, or `fallback` when absent
pub fn format_datetime(date: Option<DateTime<Utc>>, fallback: &str) -> String {
    date.map(|d| d.with_timezone(&Local).format("%d %b %Y, %H:%M").to_string())
        .unwrap_or_else(|| fallback.to_string())
}
