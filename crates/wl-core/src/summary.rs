//! End-to-end summary of a work log.

use std::path::Path;

use chrono::TimeZone;

use crate::daily::{DailyLedger, aggregate, aggregate_sorted};
use crate::day::DayKey;
use crate::error::Error;
use crate::event::Event;
use crate::rollup::{Rollup, WeekLabelStyle, rollup};
use crate::source::load_events;
use crate::streak::{DEFAULT_STREAK_THRESHOLD_MINUTES, longest_streak};

/// Knobs for [`Summary::compute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryOptions {
    /// Minutes a day must exceed to extend a streak.
    pub streak_threshold_minutes: u32,
    pub week_label: WeekLabelStyle,
    /// Sort events by timestamp before aggregating.
    pub sort_events: bool,
    /// Pad the daily series with this day if it has no entry.
    pub today: Option<DayKey>,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            streak_threshold_minutes: DEFAULT_STREAK_THRESHOLD_MINUTES,
            week_label: WeekLabelStyle::default(),
            sort_events: false,
            today: None,
        }
    }
}

/// Everything a presentation layer needs.
#[derive(Debug, Clone)]
pub struct Summary {
    pub ledger: DailyLedger,
    pub rollup: Rollup,
    pub streak: u32,
}

impl Summary {
    /// Aggregates `events`, rolls them up and computes the streak.
    ///
    /// Returns [`Error::EmptyInput`] when no day holds a work start.
    pub fn compute<Tz: TimeZone>(
        events: &[Event],
        tz: &Tz,
        options: &SummaryOptions,
    ) -> Result<Self, Error> {
        let ledger = if options.sort_events {
            aggregate_sorted(events, tz)
        } else {
            aggregate(events, tz)
        };

        let mut rollup = rollup(&ledger, options.week_label)?;
        if let Some(today) = options.today {
            if rollup.pad_today(today) {
                tracing::debug!(%today, "padded daily series with today");
            }
        }

        let streak = longest_streak(&ledger, options.streak_threshold_minutes);

        Ok(Self {
            ledger,
            rollup,
            streak,
        })
    }

    /// Reads the JSONL log at `path` and summarizes it.
    pub fn from_log<Tz: TimeZone>(
        path: &Path,
        tz: &Tz,
        options: &SummaryOptions,
    ) -> Result<Self, Error> {
        let events = load_events(path)?;
        Self::compute(&events, tz, options)
    }

    /// Total work across the log in hours.
    #[allow(clippy::cast_precision_loss)]
    pub fn total_hours(&self) -> f64 {
        self.ledger.total_seconds() as f64 / 3600.0
    }

    /// Minutes on the last entry of the daily series (today, when padded).
    pub fn latest_minutes(&self) -> f64 {
        self.rollup.daily.last_minutes().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::TimerState::{Idle, Rest, Work};
    use chrono::Utc;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const T0: i64 = 1_709_629_200; // 2024-03-05 09:00:00 UTC
    const DAY: i64 = 86_400;

    fn key(s: &str) -> DayKey {
        s.parse().unwrap()
    }

    #[test]
    fn summarizes_single_session() {
        let events = [Event::new(Idle, Work, T0), Event::new(Work, Rest, T0 + 400)];
        let summary = Summary::compute(&events, &Utc, &SummaryOptions::default()).unwrap();

        assert_eq!(summary.streak, 1);
        assert_eq!(summary.ledger.total_seconds(), 400);
        assert_eq!(summary.rollup.daily.days, vec![key("05-03-2024")]);
        assert!((summary.latest_minutes() - 400.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn empty_log_is_empty_input() {
        let result = Summary::compute(&[], &Utc, &SummaryOptions::default());
        assert!(matches!(result, Err(Error::EmptyInput)));
    }

    #[test]
    fn only_inert_events_is_empty_input() {
        let events = [Event::default(), Event::new(Work, Idle, T0)];
        let result = Summary::compute(&events, &Utc, &SummaryOptions::default());
        assert!(matches!(result, Err(Error::EmptyInput)));
    }

    #[test]
    fn today_padding_leaves_ledger_and_streak_alone() {
        let events = [Event::new(Idle, Work, T0), Event::new(Work, Rest, T0 + 900)];
        let options = SummaryOptions {
            today: Some(key("09-03-2024")),
            ..SummaryOptions::default()
        };
        let summary = Summary::compute(&events, &Utc, &options).unwrap();

        assert_eq!(summary.rollup.daily.len(), 2);
        assert_eq!(summary.ledger.len(), 1);
        assert_eq!(summary.rollup.weekly.len(), 1);
        assert_eq!(summary.streak, 1);
        assert!(summary.latest_minutes().abs() < f64::EPSILON);
    }

    #[test]
    fn sort_option_fixes_cumulative_order() {
        let events = [
            Event::new(Idle, Work, T0 + DAY),
            Event::new(Work, Idle, T0 + DAY + 600),
            Event::new(Idle, Work, T0),
            Event::new(Work, Idle, T0 + 1200),
        ];
        let options = SummaryOptions {
            sort_events: true,
            ..SummaryOptions::default()
        };
        let summary = Summary::compute(&events, &Utc, &options).unwrap();

        assert_eq!(
            summary.rollup.daily.days,
            vec![key("05-03-2024"), key("06-03-2024")]
        );
        assert!((summary.rollup.daily.cumulative_hours[1] - 0.5).abs() < 1e-9);
        assert!((summary.total_hours() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn from_log_reads_jsonl() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"type":"appstart"}}"#).unwrap();
        writeln!(
            file,
            r#"{{"type":"transition","fromState":"idle","toState":"work","timestamp":{}}}"#,
            T0
        )
        .unwrap();
        writeln!(
            file,
            r#"{{"type":"transition","fromState":"work","toState":"rest","timestamp":{}}}"#,
            T0 + 1500
        )
        .unwrap();

        let summary = Summary::from_log(file.path(), &Utc, &SummaryOptions::default()).unwrap();

        assert_eq!(summary.ledger.total_seconds(), 1500);
        assert_eq!(summary.ledger.stats().skipped, 1);
    }

    #[test]
    fn from_log_missing_file_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let result = Summary::from_log(
            &dir.path().join("TomatoBar.log"),
            &Utc,
            &SummaryOptions::default(),
        );
        assert!(matches!(result, Err(Error::SourceUnavailable(_))));
    }
}
