use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;
use meetslice_core::{Format, IcsDialect, RenderOptions};
use owo_colors::OwoColorize;

use super::Plan;
use crate::config::Defaults;

/// Output flags for `meetslice render`.
#[derive(Debug, Clone, Default)]
pub struct Output {
    /// RFC 5545 strict ICS instead of the compatible layout
    pub strict: bool,
    /// Wrap HTML rows in a full table
    pub standalone: bool,
    /// Emit a base64 `data:` URI instead of the raw document
    pub data_uri: bool,
    /// Write to a file named after the summary
    pub save: bool,
    /// Write to this file
    pub path: Option<PathBuf>,
}

pub fn run(format: Format, plan: &Plan, output: &Output, defaults: &Defaults) -> Result<()> {
    let options = RenderOptions {
        ics_dialect: if output.strict {
            IcsDialect::Rfc5545 { stamp: Utc::now() }
        } else {
            IcsDialect::Compat
        },
        html_table: output.standalone,
    };

    let document = format.render_with(&plan.organizer, &plan.slots, &options);
    let document = if output.data_uri {
        data_uri(format, &document)
    } else {
        document
    };

    tracing::info!(%format, slots = plan.slots.len(), bytes = document.len(), "rendered document");

    if plan.slots.is_empty() {
        plan.report_empty();
    }

    let target = match (&output.path, output.save) {
        (Some(path), _) => Some(path.clone()),
        (None, true) => Some(defaults.output_dir().join(file_name(&plan.summary, format))),
        (None, false) => None,
    };

    match target {
        Some(path) => write_document(&path, &document),
        None => {
            print!("{}", document);
            if !document.ends_with('\n') {
                println!();
            }
            Ok(())
        }
    }
}

/// `data:<mime>;base64,<payload>`
pub fn data_uri(format: Format, document: &str) -> String {
    format!("data:{};base64,{}", format.mime_type(), STANDARD.encode(document))
}

/// File name derived from the meeting summary, e.g. `team-standup.ics`.
pub fn file_name(summary: &str, format: Format) -> String {
    let stem = slug::slugify(summary);
    let stem = if stem.is_empty() { "meetings".to_string() } else { stem };
    format!("{}.{}", stem, format.extension())
}

fn write_document(path: &Path, document: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Could not create directory {}", parent.display()))?;
    }

    std::fs::write(path, document).with_context(|| format!("Could not write {}", path.display()))?;
    println!("{}", format!("  Saved: {}", path.display()).green());
    Ok(())
}
