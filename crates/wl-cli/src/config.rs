//! Configuration loading and management.

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use wl_core::{DEFAULT_STREAK_THRESHOLD_MINUTES, WeekLabelStyle};

use crate::zone::Zone;

/// Where `TomatoBar` writes its transition log, relative to the home directory.
const TOMATOBAR_LOG: &str =
    "Library/Containers/com.github.ivoronin.TomatoBar/Data/Library/Caches/TomatoBar.log";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the JSONL transition log.
    pub log_path: PathBuf,

    /// IANA timezone used for day boundaries. Local time when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// Minutes a day must exceed to extend a streak.
    pub streak_threshold_minutes: u32,

    /// How weekly labels are rendered.
    pub week_label: WeekLabelStyle,

    /// Sort events by timestamp before aggregating.
    pub sort_events: bool,

    /// Append an empty entry for today to the daily series.
    pub pad_today: bool,
}

impl Default for Config {
    fn default() -> Self {
        let log_path = dirs::home_dir().map_or_else(
            || PathBuf::from("TomatoBar.log"),
            |home| home.join(TOMATOBAR_LOG),
        );
        Self {
            log_path,
            timezone: None,
            streak_threshold_minutes: DEFAULT_STREAK_THRESHOLD_MINUTES,
            week_label: WeekLabelStyle::default(),
            sort_events: false,
            pad_today: true,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (WL_*)
        figment = figment.merge(Env::prefixed("WL_"));

        figment.extract()
    }

    /// Resolves the configured timezone.
    pub fn zone(&self) -> Result<Zone> {
        match self.timezone.as_deref() {
            None => Ok(Zone::Local),
            Some(name) => name
                .parse::<chrono_tz::Tz>()
                .map(Zone::Named)
                .map_err(|err| anyhow!("invalid timezone '{name}': {err}")),
        }
    }
}

/// Returns the platform-specific config directory for wl.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("wl"))
}
