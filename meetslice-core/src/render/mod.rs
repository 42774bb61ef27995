//! Document renderers for a slot list.
//!
//! Every renderer is a pure function of the organizer and the slots, so the
//! same input always renders the same document.

pub mod csv;
pub mod html;
pub mod ics;

use std::fmt;
use std::str::FromStr;

use crate::config::Organizer;
use crate::slot::TimeSlot;

pub use ics::IcsDialect;

/// Output format of a rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Ics,
    Csv,
    Html,
}

/// Per-format rendering knobs.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub ics_dialect: IcsDialect,
    /// Wrap HTML rows in a complete `<table>`
    pub html_table: bool,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Ics, Format::Csv, Format::Html];

    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Ics => "ics",
            Format::Csv => "csv",
            Format::Html => "html",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Format::Ics => "text/calendar",
            Format::Csv => "text/csv",
            Format::Html => "text/html",
        }
    }

    /// Render with default options.
    pub fn render(&self, organizer: &Organizer, slots: &[TimeSlot]) -> String {
        self.render_with(organizer, slots, &RenderOptions::default())
    }

    pub fn render_with(
        &self,
        organizer: &Organizer,
        slots: &[TimeSlot],
        options: &RenderOptions,
    ) -> String {
        match self {
            Format::Ics => ics::render(organizer, slots, &options.ics_dialect),
            Format::Csv => csv::render(organizer, slots),
            Format::Html if options.html_table => html::render_table(slots),
            Format::Html => html::render_rows(slots),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ics" | "ical" | "icalendar" => Ok(Format::Ics),
            "csv" => Ok(Format::Csv),
            "html" | "htm" => Ok(Format::Html),
            other => Err(format!(
                "Unknown format '{}'. Expected one of: ics, csv, html",
                other
            )),
        }
    }
}
