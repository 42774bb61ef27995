//! User defaults at ~/.config/meetslice/config.toml.
//!
//! Every field is optional. Command-line flags always win over the file,
//! and `MEETSLICE_*` environment variables win over the file too.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "MEETSLICE";

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Organizer display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer_name: Option<String>,

    /// Organizer email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer_email: Option<String>,

    /// Default meeting length, seconds or a duration such as "30m"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Where `render --save` writes files (defaults to the current directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
}

impl Defaults {
    /// Get the config file path (~/.config/meetslice/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("meetslice");
        Ok(config_dir.join("config.toml"))
    }

    /// Load defaults, creating a commented-out config file on first use.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            // A read-only home directory is no reason to refuse to run.
            if let Err(e) = create_default_config(&path) {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "could not create default config"
                );
            }
        }

        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "loading config");

        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .with_context(|| format!("Failed to read config file at {}", path.display()))?
            .try_deserialize()
            .with_context(|| format!("Failed to parse config file at {}", path.display()))
    }

    /// Output directory with `~` expanded.
    pub fn output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => PathBuf::from(shellexpand::tilde(dir).into_owned()),
            None => PathBuf::from("."),
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

/// Write a config file with every option commented out.
fn create_default_config(path: &Path) -> Result<()> {
    let contents = "\
# meetslice configuration

# Organizer written into every exported meeting:
# organizer_name = \"Ada Lovelace\"
# organizer_email = \"ada@example.com\"

# Default meeting length (seconds, or a duration such as \"30m\"):
# step = \"30m\"

# Default meeting text:
# summary = \"Office hours\"
# description = \"\"

# Where `meetslice render --save` writes files:
# output_dir = \"~/Downloads\"
";

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("Could not create config directory")?;
    }

    std::fs::write(path, contents).context("Could not write config file")?;
    Ok(())
}
