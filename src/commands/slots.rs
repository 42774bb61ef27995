use anyhow::{Context, Result};
use meetslice_core::TimeSlot;
use owo_colors::OwoColorize;

use super::Plan;

pub fn run(plan: &Plan, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(&plan.slots).context("Failed to serialize slots")?;
        println!("{}", out);
        return Ok(());
    }

    if plan.slots.is_empty() {
        plan.report_empty();
        return Ok(());
    }

    for slot in &plan.slots {
        println!("{}", render_line(slot));
    }

    Ok(())
}

fn render_line(slot: &TimeSlot) -> String {
    format!("  {}  {}  {}", position(slot).dimmed(), slot.label(), slot.summary)
}

/// `index/total`, with the index padded to the width of the total.
fn position(slot: &TimeSlot) -> String {
    let width = slot.total.to_string().len();
    format!("{:>width$}/{}", slot.index, slot.total, width = width)
}
