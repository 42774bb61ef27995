//! Text formatting and escaping helpers shared by the renderers.

use chrono::NaiveDateTime;

/// Compact ISO-8601 form used by iCalendar: `YYYYMMDDTHHMMSS`.
pub fn compact_timestamp(dt: &NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}

/// Local ISO-8601 form used for CSV cells: `YYYY-MM-DDTHH:MM:SS`.
pub fn local_timestamp(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Zero-padded time of day: `HH:MM:SS`.
pub fn time_of_day(dt: &NaiveDateTime) -> String {
    dt.format("%H:%M:%S").to_string()
}

/// `"{text} (index/total)"`
pub fn titled(text: &str, index: usize, total: usize) -> String {
    format!("{} ({}/{})", text, index, total)
}

/// Quote a CSV field, doubling embedded double quotes.
pub fn csv_quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Escape text for embedding in HTML element content.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
