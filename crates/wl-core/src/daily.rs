//! Per-day work totals.

use chrono::TimeZone;
use indexmap::IndexMap;
use serde::Serialize;

use crate::day::DayKey;
use crate::event::Event;
use crate::interval::{ExtractionStats, IntervalExtractor, Segment};

/// Work recorded for one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DayAggregate {
    /// Seconds of work in intervals that started this day.
    pub seconds: i64,
    /// Running total across the whole log when this day was last updated.
    ///
    /// A day first seen through an unclosed start is seeded with the running
    /// total at that point, not zero.
    pub cumulative_seconds: i64,
}

impl DayAggregate {
    /// True if the day holds strictly more than `minutes` of work.
    pub fn exceeds_minutes(&self, minutes: u32) -> bool {
        self.seconds > i64::from(minutes) * 60
    }
}

/// Day buckets in the order their first work start was seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyLedger {
    days: IndexMap<DayKey, DayAggregate>,
    total_seconds: i64,
    stats: ExtractionStats,
}

impl DailyLedger {
    pub const fn days(&self) -> &IndexMap<DayKey, DayAggregate> {
        &self.days
    }

    pub fn get(&self, day: &DayKey) -> Option<&DayAggregate> {
        self.days.get(day)
    }

    pub fn contains(&self, day: &DayKey) -> bool {
        self.days.contains_key(day)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, DayKey, DayAggregate> {
        self.days.iter()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Sum of every closed interval.
    pub const fn total_seconds(&self) -> i64 {
        self.total_seconds
    }

    pub const fn stats(&self) -> ExtractionStats {
        self.stats
    }

    fn apply(&mut self, segment: Segment) {
        match segment {
            Segment::Opened { day, .. } => {
                let total = self.total_seconds;
                self.days.entry(day).or_insert(DayAggregate {
                    seconds: 0,
                    cumulative_seconds: total,
                });
            }
            Segment::Closed(interval) => {
                self.total_seconds = self.total_seconds.saturating_add(interval.duration_secs());
                let entry = self.days.entry(interval.day).or_default();
                entry.seconds = entry.seconds.saturating_add(interval.duration_secs());
                entry.cumulative_seconds = self.total_seconds;
            }
        }
    }
}

impl<'a> IntoIterator for &'a DailyLedger {
    type Item = (&'a DayKey, &'a DayAggregate);
    type IntoIter = indexmap::map::Iter<'a, DayKey, DayAggregate>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}

/// Folds events, in the order given, into per-day totals.
///
/// The cumulative field is cumulative in processing order; see
/// [`aggregate_sorted`] for logs that may be out of order.
pub fn aggregate<'a, I, Tz>(events: I, tz: &Tz) -> DailyLedger
where
    I: IntoIterator<Item = &'a Event>,
    Tz: TimeZone,
{
    let mut extractor = IntervalExtractor::new(tz);
    let mut ledger = DailyLedger::default();

    for event in events {
        if let Some(segment) = extractor.feed(event) {
            ledger.apply(segment);
        }
    }

    ledger.stats = extractor.stats();
    tracing::debug!(
        days = ledger.len(),
        total_seconds = ledger.total_seconds,
        events = ledger.stats.events,
        skipped = ledger.stats.skipped,
        intervals = ledger.stats.intervals,
        "aggregated work log"
    );
    ledger
}

/// Like [`aggregate`], but stably sorts events by timestamp first.
///
/// Events without a timestamp are inert and are moved to the end.
pub fn aggregate_sorted<Tz: TimeZone>(events: &[Event], tz: &Tz) -> DailyLedger {
    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by_key(|event| (event.timestamp.is_none(), event.timestamp));
    aggregate(sorted, tz)
}
