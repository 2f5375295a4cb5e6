//! Layered settings.
//!
//! Values come from, in increasing priority: built-in defaults, a TOML file,
//! `GLUCOWATCH_*` environment variables, then command-line flags (applied by
//! the binary). Nested keys use `__`, e.g. `GLUCOWATCH_MONITOR__WINDOW_CAPACITY=30`.
//!
//! ```toml
//! [monitor]
//! window_capacity = 20
//! ledger_capacity = 5
//!
//! [monitor.thresholds]
//! low = 70.0
//! elevated = 140.0
//! critical = 180.0
//!
//! [ui]
//! interval = "5s"
//! export_path = "blood_sugar_data.csv"
//! mute = false
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use glucowatch_core::{MonitorConfig, DEFAULT_EXPORT_FILE};
use serde::Deserialize;

use crate::data::duration::parse_duration;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "GLUCOWATCH";

/// Settings file looked up in the working directory when none is given.
pub const DEFAULT_SETTINGS_FILE: &str = "glucowatch.toml";

/// Everything the binary needs to start.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub monitor: MonitorConfig,
    pub ui: UiSettings,
}

/// Presentation-side settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Time between readings, e.g. "5s" or "500ms".
    pub interval: String,
    /// Where `e` writes the window snapshot.
    pub export_path: PathBuf,
    /// Start with the alert bell silenced.
    pub mute: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            interval: "5s".to_string(),
            export_path: PathBuf::from(DEFAULT_EXPORT_FILE),
            mute: false,
        }
    }
}

impl Settings {
    /// Load settings from `path` (required) or from [`DEFAULT_SETTINGS_FILE`]
    /// if it exists, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, environment())
    }

    fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self> {
        let file = match path {
            Some(p) => File::from(p).required(true),
            None => File::from(Path::new(DEFAULT_SETTINGS_FILE)).required(false),
        };

        let settings: Settings = Config::builder()
            .add_source(file)
            .add_source(env)
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Invalid settings")?;

        Ok(settings)
    }

    /// Parsed tick interval.
    pub fn interval(&self) -> Result<Duration> {
        let interval = parse_duration(&self.ui.interval)
            .with_context(|| format!("Invalid interval: {}", self.ui.interval))?;
        if interval.is_zero() {
            anyhow::bail!("Interval must be greater than zero");
        }
        Ok(interval)
    }

    /// Validate the monitor section and the interval together.
    pub fn validate(&self) -> Result<()> {
        self.monitor.validate()?;
        self.interval()?;
        Ok(())
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
