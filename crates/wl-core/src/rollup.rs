//! Plot-ready daily series and weekly totals.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::daily::DailyLedger;
use crate::day::DayKey;
use crate::error::Error;

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3600.0;

/// How week labels are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekLabelStyle {
    /// Both ends show the Monday, e.g. `04 Mar - 04 Mar`.
    #[default]
    Legacy,
    /// Monday through Sunday, e.g. `04 Mar - 10 Mar`.
    Range,
}

impl WeekLabelStyle {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Range => "range",
        }
    }

    /// Renders the label for the week starting on `monday`.
    ///
    /// A `Range` end past the calendar range is clamped to [`NaiveDate::MAX`].
    pub fn label(self, monday: NaiveDate) -> String {
        let end = match self {
            Self::Legacy => monday,
            Self::Range => monday
                .checked_add_signed(Duration::days(6))
                .unwrap_or(NaiveDate::MAX),
        };
        format!("{} - {}", monday.format("%d %b"), end.format("%d %b"))
    }
}

impl fmt::Display for WeekLabelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeekLabelStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "legacy" => Ok(Self::Legacy),
            "range" => Ok(Self::Range),
            _ => Err(format!("invalid week label style: {s}")),
        }
    }
}

/// Index-aligned per-day series.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DailySeries {
    pub days: Vec<DayKey>,
    pub minutes: Vec<f64>,
    pub cumulative_hours: Vec<f64>,
}

impl DailySeries {
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Minutes on the last entry.
    pub fn last_minutes(&self) -> Option<f64> {
        self.minutes.last().copied()
    }

    /// Cumulative hours on the last entry.
    pub fn last_cumulative_hours(&self) -> Option<f64> {
        self.cumulative_hours.last().copied()
    }

    fn push(&mut self, day: DayKey, minutes: f64, cumulative_hours: f64) {
        self.days.push(day);
        self.minutes.push(minutes);
        self.cumulative_hours.push(cumulative_hours);
    }
}

/// Hours per week, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeeklySeries {
    pub labels: Vec<String>,
    pub hours: Vec<f64>,
}

impl WeeklySeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Daily and weekly series derived from a ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rollup {
    pub daily: DailySeries,
    pub weekly: WeeklySeries,
}

impl Rollup {
    /// Appends a zero-minute entry for `today` if it has no entry yet.
    ///
    /// The cumulative value of the previous last entry is repeated so a
    /// cumulative line plot stays flat up to today. Weekly totals are left
    /// alone. Returns whether an entry was added.
    pub fn pad_today(&mut self, today: DayKey) -> bool {
        if self.daily.days.contains(&today) {
            return false;
        }
        let cumulative = self.daily.last_cumulative_hours().unwrap_or(0.0);
        self.daily.push(today, 0.0, cumulative);
        true
    }
}

/// Builds the per-day and per-week series, walking days in ledger order.
///
/// Weeks are Monday-start and keyed by their rendered label.
#[allow(clippy::cast_precision_loss)]
pub fn rollup(ledger: &DailyLedger, style: WeekLabelStyle) -> Result<Rollup, Error> {
    if ledger.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut daily = DailySeries::default();
    let mut weeks: IndexMap<String, f64> = IndexMap::new();

    for (day, aggregate) in ledger {
        daily.push(
            *day,
            aggregate.seconds as f64 / SECONDS_PER_MINUTE,
            aggregate.cumulative_seconds as f64 / SECONDS_PER_HOUR,
        );

        *weeks.entry(style.label(day.week_start())).or_insert(0.0) +=
            aggregate.seconds as f64 / SECONDS_PER_HOUR;
    }

    let (labels, hours) = weeks.into_iter().unzip();
    Ok(Rollup {
        daily,
        weekly: WeeklySeries { labels, hours },
    })
}
