//! HTML preview rendering.

use crate::slot::TimeSlot;
use crate::text::{html_escape, time_of_day};

/// One `<tr>` per slot with start, end, summary and description cells.
/// Rows are concatenated without separators.
pub fn render_rows(slots: &[TimeSlot]) -> String {
    slots.iter().map(render_row).collect()
}

/// Rows wrapped in a `<table>` with a header row.
pub fn render_table(slots: &[TimeSlot]) -> String {
    format!(
        "<table>\n<thead><tr><th>Start</th><th>End</th><th>Summary</th><th>Description</th></tr></thead>\n<tbody>{}</tbody>\n</table>",
        render_rows(slots)
    )
}

fn render_row(slot: &TimeSlot) -> String {
    let cells: String = [
        time_of_day(&slot.start),
        time_of_day(&slot.end),
        html_escape(&slot.summary),
        html_escape(&slot.description),
    ]
    .iter()
    .map(|cell| format!("<td>{}</td>", cell))
    .collect();

    format!("<tr>{}</tr>", cells)
}
