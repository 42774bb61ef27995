//! Slicing a meeting window into back-to-back time slots.

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use crate::config::{Configuration, RawConfiguration};
use crate::error::{SlotError, SlotResult};
use crate::text::{time_of_day, titled};

/// One meeting carved out of the configured window.
///
/// A slot lasts `step - 1` seconds so that the end of one meeting and the
/// start of the next never share an instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// 1-based position in the list
    pub index: usize,
    pub total: usize,
    pub summary: String,
    pub description: String,
}

impl TimeSlot {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// `HH:MM:SS–HH:MM:SS`
    pub fn label(&self) -> String {
        format!("{}–{}", time_of_day(&self.start), time_of_day(&self.end))
    }
}

/// Generate the slots for `config`.
///
/// An invalid window yields an empty list; see [`try_generate`] to learn why.
pub fn generate(config: &Configuration) -> Vec<TimeSlot> {
    try_generate(config).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "no slots generated");
        Vec::new()
    })
}

/// Generate slots from unparsed input. Missing or malformed fields yield an
/// empty list.
pub fn generate_raw(raw: &RawConfiguration) -> Vec<TimeSlot> {
    match raw.parse() {
        Ok(config) => generate(&config),
        Err(e) => {
            tracing::debug!(error = %e, "configuration rejected");
            Vec::new()
        }
    }
}

/// Generate the slots for `config`, reporting why a window holds no slots.
///
/// A slot starting at `t` is emitted only while `t + step <= window end`,
/// so a window of `W` seconds holds `floor(W / step)` slots.
pub fn try_generate(config: &Configuration) -> SlotResult<Vec<TimeSlot>> {
    let step = config.step_seconds;
    if step < 1 {
        return Err(SlotError::InvalidWindow(format!(
            "step must be at least 1 second, got {}",
            step
        )));
    }

    let window_start = config.window_start();
    let window_end = config.window_end();
    if window_start >= window_end {
        return Err(SlotError::InvalidWindow(format!(
            "end {} is not after start {}",
            time_of_day(&window_end),
            time_of_day(&window_start)
        )));
    }

    // Bounded by one day, so the multiplications below stay in range.
    let window = (window_end - window_start).num_seconds();
    let total = window / step;
    if total == 0 {
        return Err(SlotError::NoRoom { window, step });
    }

    let total = total as usize;
    let slots: Vec<TimeSlot> = (0..total)
        .map(|i| {
            let start = window_start + Duration::seconds(i as i64 * step);
            let end = start + Duration::seconds(step - 1);
            let index = i + 1;
            TimeSlot {
                start,
                end,
                index,
                total,
                summary: titled(&config.summary, index, total),
                description: titled(&config.description, index, total),
            }
        })
        .collect();

    tracing::debug!(count = slots.len(), step, "generated slots");
    Ok(slots)
}
