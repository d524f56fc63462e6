//! Application configuration management.
//!
//! This module handles loading and saving the application configuration:
//! where the roster CSV lives, how long the upcoming-birthday window is,
//! and the century pivot used for two-digit birth years.
//!
//! Configuration is stored at `~/.config/ioc-birthdays/config.json`.
//! `IOC_ROSTER_PATH` and `IOC_WINDOW_DAYS` override the file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::classify::DEFAULT_WINDOW_DAYS;
use crate::normalize::{BirthDateFormat, DEFAULT_CENTURY_PIVOT};
use crate::store::RosterSource;

/// Application name used for config/cache directory paths
const APP_NAME: &str = "ioc-birthdays";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Roster file used when nothing else is configured
pub const DEFAULT_ROSTER_FILE: &str = "ioc_members_detailed.csv";

pub const ROSTER_PATH_ENV: &str = "IOC_ROSTER_PATH";
pub const WINDOW_DAYS_ENV: &str = "IOC_WINDOW_DAYS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub roster_path: Option<PathBuf>,
    pub window_days: u32,
    /// `YY` at or above this is 19YY, below it 20YY. 0 puts every year in
    /// the 1900s, 100 every year in the 2000s.
    pub century_pivot: u8,
    /// Free-form note on how current the roster is, e.g. "Updated: July 2025"
    pub roster_caption: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster_path: None,
            window_days: DEFAULT_WINDOW_DAYS,
            century_pivot: DEFAULT_CENTURY_PIVOT,
            roster_caption: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Invalid config file {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    /// Load the config file, falling back to defaults if it is unreadable.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Directory for log files.
    pub fn cache_dir() -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }

    /// Apply `IOC_ROSTER_PATH` / `IOC_WINDOW_DAYS` from the environment.
    pub fn apply_env(&mut self) {
        self.apply_overrides(
            std::env::var(ROSTER_PATH_ENV).ok(),
            std::env::var(WINDOW_DAYS_ENV).ok(),
        );
    }

    fn apply_overrides(&mut self, roster_path: Option<String>, window_days: Option<String>) {
        if let Some(path) = roster_path.filter(|p| !p.trim().is_empty()) {
            self.roster_path = Some(PathBuf::from(path.trim()));
        }

        if let Some(raw) = window_days {
            match raw.trim().parse::<u32>() {
                Ok(days) => self.window_days = days,
                Err(e) => warn!(value = %raw, error = %e, "Ignoring invalid {}", WINDOW_DAYS_ENV),
            }
        }
    }

    pub fn roster_path(&self) -> PathBuf {
        self.roster_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ROSTER_FILE))
    }

    pub fn birth_date_format(&self) -> BirthDateFormat {
        BirthDateFormat::new(self.century_pivot)
    }

    pub fn roster_source(&self) -> RosterSource {
        RosterSource {
            path: self.roster_path(),
            format: self.birth_date_format(),
        }
    }
}
