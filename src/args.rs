//! Meeting flags shared by every subcommand.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Args;
use meetslice_core::RawConfiguration;

use crate::config::Defaults;

#[derive(Args, Debug, Clone, Default)]
pub struct MeetingArgs {
    /// Day of the meetings (YYYY-MM-DD, or e.g. "tomorrow"); defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Start of the window (HH:MM or HH:MM:SS)
    #[arg(short, long)]
    pub start: Option<String>,

    /// End of the window (HH:MM or HH:MM:SS)
    #[arg(short, long)]
    pub end: Option<String>,

    /// Meeting length: seconds, or a duration such as "30m" or "1h 15m"
    #[arg(long)]
    pub step: Option<String>,

    /// Meeting title; each slot gets a " (n/total)" suffix
    #[arg(long)]
    pub summary: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Organizer name
    #[arg(long)]
    pub name: Option<String>,

    /// Organizer email
    #[arg(long)]
    pub email: Option<String>,
}

impl MeetingArgs {
    /// Merge flags over config defaults into the form-shaped record the core
    /// parses. Required fields left unset stay `None`.
    pub fn to_raw(&self, defaults: &Defaults) -> Result<RawConfiguration> {
        let date = match &self.date {
            Some(d) => resolve_date(d)?,
            None => Local::now().date_naive(),
        };

        let step = match self.step.as_ref().or(defaults.step.as_ref()) {
            Some(s) => Some(step_seconds(s)?),
            None => None,
        };

        Ok(RawConfiguration {
            date: Some(date.format("%Y-%m-%d").to_string()),
            start_time: self.start.clone(),
            end_time: self.end.clone(),
            step_seconds: step,
            summary: self.summary.clone().or_else(|| defaults.summary.clone()),
            description: self.description.clone().or_else(|| defaults.description.clone()),
            organizer_name: self.name.clone().or_else(|| defaults.organizer_name.clone()),
            organizer_email: self.email.clone().or_else(|| defaults.organizer_email.clone()),
        })
    }
}

/// Accept YYYY-MM-DD directly, otherwise fall back to fuzzy phrases.
fn resolve_date(input: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d") {
        return Ok(date);
    }

    let dt = fuzzydate::parse(input)
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\"", input))?;
    Ok(dt.date())
}

/// Normalize a step to whole seconds as text.
///
/// Plain numbers pass through untouched (so "0" or "-5" still reach the
/// generator and produce zero slots); anything else must be a duration.
fn step_seconds(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.parse::<i64>().is_ok() {
        return Ok(trimmed.to_string());
    }

    let duration = humantime::parse_duration(trimmed)
        .with_context(|| format!("Could not parse step: \"{}\"", input))?;
    Ok(duration.as_secs().to_string())
}
