//! CLI subcommand implementations.

pub mod days;
pub mod streak;
pub mod summary;
pub mod weeks;

use anyhow::{Context, Result};
use wl_core::{Summary, SummaryOptions};

use crate::{Config, Zone};

/// Printed when the log holds no work start.
pub const NO_WORK_MESSAGE: &str = "No work recorded.";

/// Loads the configured log and summarizes it.
///
/// Returns `Ok(None)` when the log holds no work, so callers can skip
/// rendering instead of failing.
pub fn load_summary(config: &Config, zone: Zone) -> Result<Option<Summary>> {
    let options = SummaryOptions {
        streak_threshold_minutes: config.streak_threshold_minutes,
        week_label: config.week_label,
        sort_events: config.sort_events,
        today: config.pad_today.then(|| zone.today()),
    };

    match zone.summarize_log(&config.log_path, &options) {
        Ok(summary) => {
            tracing::debug!(
                days = summary.ledger.len(),
                streak = summary.streak,
                stats = ?summary.ledger.stats(),
                "summarized work log"
            );
            Ok(Some(summary))
        }
        Err(wl_core::Error::EmptyInput) => Ok(None),
        Err(err) => Err(err).with_context(|| {
            format!("failed to summarize {}", config.log_path.display())
        }),
    }
}

/// Three days across two weeks: 30m Tue 5 Mar, 90m Wed 6 Mar, 15m Mon 11 Mar 2024.
#[cfg(test)]
pub(crate) fn fixture_summary() -> Summary {
    use chrono::Utc;
    use wl_core::{Event, TimerState};

    const T0: i64 = 1_709_629_200; // 2024-03-05 09:00:00 UTC
    const DAY: i64 = 86_400;

    let events: Vec<Event> = [(T0, 1800), (T0 + DAY, 5400), (T0 + 6 * DAY, 900)]
        .into_iter()
        .flat_map(|(start, secs)| {
            [
                Event::new(TimerState::Idle, TimerState::Work, start),
                Event::new(TimerState::Work, TimerState::Rest, start + secs),
            ]
        })
        .collect();
    Summary::compute(&events, &Utc, &SummaryOptions::default()).unwrap()
}
