//! Error types for slot generation.
//!
//! None of these are fatal: `slot::generate` and `slot::generate_raw` fold
//! every variant into an empty slot list. `try_generate` and
//! `RawConfiguration::parse` surface them for callers that want to explain
//! why nothing fits.

use std::fmt;

use thiserror::Error;

/// Input fields of a meeting configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Date,
    StartTime,
    EndTime,
    StepSeconds,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Date => "date",
            Field::StartTime => "start time",
            Field::EndTime => "end time",
            Field::StepSeconds => "step",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("Missing required field: {0}")]
    MissingField(Field),

    #[error("Invalid {field}: '{value}'")]
    Malformed { field: Field, value: String },

    /// Non-positive step, or an end that is not after the start.
    #[error("Invalid window: {0}")]
    InvalidWindow(String),

    /// A well-formed window that is shorter than one step.
    #[error("No room: a {window} second window cannot hold a {step} second slot")]
    NoRoom { window: i64, step: i64 },
}

pub type SlotResult<T> = Result<T, SlotError>;
