//! Display formatting shared across screens.

use chrono::NaiveDate;

use crate::transform::parse_timestamp;

/// Buckets a raw timestamp relative to `today`: "Today", "Yesterday",
/// "`N` days ago" under a week, otherwise a short locale date such as
/// "Mar 1, 2024". An unparseable input is returned as-is.
pub fn relative_date_label(raw: &str, today: NaiveDate) -> String {
    let Some(instant) = parse_timestamp(raw) else {
        return raw.to_string();
    };
    let days = (today - instant.date()).num_days();
    match days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{days} days ago"),
        _ => instant.format("%b %-d, %Y").to_string(),
    }
}

pub fn format_page_count(pages: i64) -> String {
    if pages == 1 {
        "1 page".to_string()
    } else {
        format!("{pages} pages")
    }
}

/// One decimal place, or "N/A" when the value is unknown.
pub fn format_page_length(pages: Option<f64>) -> String {
    match pages {
        Some(value) => format!("{value:.1}"),
        None => "N/A".to_string(),
    }
}

/// "301.4 pages", or "N/A" when the backend has no average.
pub fn format_avg_pages(avg: Option<f64>) -> String {
    match avg {
        Some(value) => format!("{value:.1} pages"),
        None => "N/A".to_string(),
    }
}

/// "Title (N pages)" for a known book, "N/A" otherwise.
pub fn format_book_info(title: Option<&str>, pages: Option<i64>) -> String {
    match title {
        Some(title) => match pages {
            Some(pages) => format!("{} ({})", title, format_page_count(pages)),
            None => title.to_string(),
        },
        None => "N/A".to_string(),
    }
}
