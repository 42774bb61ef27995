use anyhow::Result;
use owo_colors::OwoColorize;

use super::Plan;

pub fn run(plan: &Plan, quiet: bool) -> Result<()> {
    let count = plan.slots.len();

    if quiet {
        println!("{}", quiet_line(count));
        return Ok(());
    }

    if count == 0 {
        println!("{}", summary_line(count).yellow());
        plan.report_empty();
    } else {
        println!("{}", summary_line(count).green());
    }

    Ok(())
}

/// Bare number for scripts.
fn quiet_line(count: usize) -> String {
    count.to_string()
}

fn summary_line(count: usize) -> String {
    let label = if count == 1 { "meeting" } else { "meetings" };
    format!("  {} {}", count, label)
}
