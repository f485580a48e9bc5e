//! The observer's timezone.

use chrono::{Local, NaiveDateTime, Utc};
use chrono_tz::Tz;
use wl_core::{DayKey, Summary, SummaryOptions};

/// Timezone used for day boundaries and "today".
#[derive(Debug, Clone, Copy)]
pub enum Zone {
    /// The system's local timezone.
    Local,
    /// A configured IANA timezone.
    Named(Tz),
}

impl Zone {
    /// IANA name for display, falling back to UTC if the system zone is unknown.
    pub fn name(&self) -> String {
        match self {
            Self::Local => iana_time_zone::get_timezone().unwrap_or_else(|_| "UTC".to_string()),
            Self::Named(tz) => tz.name().to_string(),
        }
    }

    pub fn today(&self) -> DayKey {
        match self {
            Self::Local => DayKey::today(&Local),
            Self::Named(tz) => DayKey::today(tz),
        }
    }

    /// Current wall-clock time in this zone.
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Self::Local => Local::now().naive_local(),
            Self::Named(tz) => Utc::now().with_timezone(tz).naive_local(),
        }
    }

    /// Summarizes the log at `path` with day boundaries in this zone.
    pub fn summarize_log(
        &self,
        path: &std::path::Path,
        options: &SummaryOptions,
    ) -> Result<Summary, wl_core::Error> {
        match self {
            Self::Local => Summary::from_log(path, &Local, options),
            Self::Named(tz) => Summary::from_log(path, tz, options),
        }
    }
}
