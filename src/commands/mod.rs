pub mod config;
pub mod count;
pub mod render;
pub mod slots;

use anyhow::Result;
use meetslice_core::{Organizer, RawConfiguration, SlotError, TimeSlot, try_generate};
use owo_colors::OwoColorize;

use crate::args::MeetingArgs;
use crate::config::Defaults;

/// A generated slot list plus what rendering needs alongside it.
pub struct Plan {
    pub summary: String,
    pub organizer: Organizer,
    pub slots: Vec<TimeSlot>,
    /// Why no slots were produced, when that is the case
    pub empty_reason: Option<SlotError>,
}

impl Plan {
    pub fn build(args: &MeetingArgs, defaults: &Defaults) -> Result<Self> {
        let raw = args.to_raw(defaults)?;
        Ok(Self::from_raw(&raw))
    }

    /// Never fails: bad or missing input yields an empty plan with a reason.
    pub fn from_raw(raw: &RawConfiguration) -> Self {
        let organizer = Organizer::new(
            raw.organizer_name.clone().unwrap_or_default(),
            raw.organizer_email.clone().unwrap_or_default(),
        );
        let summary = raw.summary.clone().unwrap_or_default();

        let result = raw.parse().and_then(|config| try_generate(&config));
        let (slots, empty_reason) = match result {
            Ok(slots) => (slots, None),
            Err(e) => {
                tracing::info!(reason = %e, "no meetings fit");
                (Vec::new(), Some(e))
            }
        };

        Plan {
            summary,
            organizer,
            slots,
            empty_reason,
        }
    }

    /// Tell the user why nothing was generated.
    pub fn report_empty(&self) {
        if let Some(reason) = &self.empty_reason {
            eprintln!("{}", format!("  No meetings fit: {}", reason).dimmed());
        }
    }
}
