//! Meeting configuration.
//!
//! `RawConfiguration` mirrors what a form or command line hands over: every
//! field is an optional string. `Configuration` is the typed, validated
//! record the slot generator works from.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{Field, SlotError, SlotResult};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// Meeting organizer, carried through to the rendered documents as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organizer {
    pub name: String,
    pub email: String,
}

impl Organizer {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Organizer {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Unparsed configuration, one optional string per input field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawConfiguration {
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub step_seconds: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub organizer_name: Option<String>,
    pub organizer_email: Option<String>,
}

impl RawConfiguration {
    /// Parse into a typed `Configuration`.
    ///
    /// Blank fields count as missing. Summary, description and organizer
    /// fields are optional and default to empty strings.
    pub fn parse(&self) -> SlotResult<Configuration> {
        let start_time = parse_time(
            required(&self.start_time, Field::StartTime)?,
            Field::StartTime,
        )?;
        let end_time = parse_time(required(&self.end_time, Field::EndTime)?, Field::EndTime)?;
        let step_seconds = parse_step(required(&self.step_seconds, Field::StepSeconds)?)?;
        let date = parse_date(required(&self.date, Field::Date)?)?;

        Ok(Configuration {
            date,
            start_time,
            end_time,
            step_seconds,
            summary: self.summary.clone().unwrap_or_default(),
            description: self.description.clone().unwrap_or_default(),
            organizer: Organizer {
                name: self.organizer_name.clone().unwrap_or_default(),
                email: self.organizer_email.clone().unwrap_or_default(),
            },
        })
    }
}

fn required(value: &Option<String>, field: Field) -> SlotResult<&str> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(SlotError::MissingField(field)),
    }
}

fn malformed(field: Field, value: &str) -> SlotError {
    SlotError::Malformed {
        field,
        value: value.to_string(),
    }
}

fn parse_date(s: &str) -> SlotResult<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| malformed(Field::Date, s))
}

fn parse_time(s: &str, field: Field) -> SlotResult<NaiveTime> {
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| malformed(field, s))
}

fn parse_step(s: &str) -> SlotResult<i64> {
    s.parse::<i64>().map_err(|_| malformed(Field::StepSeconds, s))
}

/// A validated meeting configuration. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub step_seconds: i64,
    pub summary: String,
    pub description: String,
    pub organizer: Organizer,
}

impl Configuration {
    /// Configuration with empty summary, description and organizer.
    pub fn new(
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        step_seconds: i64,
    ) -> Self {
        Configuration {
            date,
            start_time,
            end_time,
            step_seconds,
            summary: String::new(),
            description: String::new(),
            organizer: Organizer::default(),
        }
    }

    pub fn with_text(mut self, summary: impl Into<String>, description: impl Into<String>) -> Self {
        self.summary = summary.into();
        self.description = description.into();
        self
    }

    pub fn with_organizer(mut self, organizer: Organizer) -> Self {
        self.organizer = organizer;
        self
    }

    /// Start of the window as a naive local instant.
    pub fn window_start(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }

    /// End of the window as a naive local instant.
    pub fn window_end(&self) -> NaiveDateTime {
        self.date.and_time(self.end_time)
    }
}
