//! Work interval reconstruction.
//!
//! The log records transitions, not intervals. A work interval is the span
//! between an idle/rest→work transition and the next work→idle/rest
//! transition. The extractor is a plain fold accumulator: feed it events in
//! log order and it reports when an interval opens or closes.
//!
//! Rules:
//! - A second start before any stop replaces the first (last start wins).
//! - A start outside the calendar range is skipped but still discards the
//!   open start.
//! - A stop with no open start does nothing.
//! - Durations are signed; out-of-order timestamps yield negative intervals.
//! - An open start at the end of the log is never emitted as an interval.

use chrono::TimeZone;
use serde::Serialize;

use crate::day::DayKey;
use crate::event::{Event, Transition};

/// A reconstructed work period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interval {
    /// Local day of the start timestamp. The whole interval belongs to it.
    pub day: DayKey,
    pub start: i64,
    pub end: i64,
}

impl Interval {
    /// Signed length in seconds.
    pub const fn duration_secs(&self) -> i64 {
        self.end.saturating_sub(self.start)
    }
}

/// What a single event did to the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// A work period started on `day`.
    Opened { day: DayKey, start: i64 },
    /// A work period finished.
    Closed(Interval),
}

/// Counters describing one extraction pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    /// Events fed in.
    pub events: usize,
    /// Events that were not a usable work boundary.
    pub skipped: usize,
    /// Intervals closed.
    pub intervals: usize,
    /// Starts discarded because another start arrived first.
    pub overwritten_starts: usize,
    /// Stops that arrived with no open start.
    pub orphan_stops: usize,
    /// Closed intervals whose stop was not after their start.
    pub non_positive_intervals: usize,
}

/// Fold state for interval reconstruction.
#[derive(Debug)]
pub struct IntervalExtractor<'tz, Tz: TimeZone> {
    tz: &'tz Tz,
    open: Option<(DayKey, i64)>,
    stats: ExtractionStats,
}

impl<'tz, Tz: TimeZone> IntervalExtractor<'tz, Tz> {
    /// Creates an extractor that assigns days in `tz`.
    pub fn new(tz: &'tz Tz) -> Self {
        Self {
            tz,
            open: None,
            stats: ExtractionStats::default(),
        }
    }

    /// Feeds the next event in log order.
    pub fn feed(&mut self, event: &Event) -> Option<Segment> {
        self.stats.events += 1;

        match event.transition() {
            Some(Transition::WorkStarted(start)) => {
                let Some(day) = DayKey::from_timestamp(start, self.tz) else {
                    tracing::trace!(start, "skipping work start outside calendar range");
                    self.stats.skipped += 1;
                    // An unusable start still discards the one it follows.
                    if self.open.take().is_some() {
                        self.stats.overwritten_starts += 1;
                    }
                    return None;
                };
                if self.open.replace((day, start)).is_some() {
                    self.stats.overwritten_starts += 1;
                }
                Some(Segment::Opened { day, start })
            }
            Some(Transition::WorkStopped(end)) => {
                let Some((day, start)) = self.open.take() else {
                    self.stats.orphan_stops += 1;
                    return None;
                };
                let interval = Interval { day, start, end };
                self.stats.intervals += 1;
                if interval.duration_secs() <= 0 {
                    self.stats.non_positive_intervals += 1;
                    tracing::debug!(start, end, "work interval with non-positive duration");
                }
                Some(Segment::Closed(interval))
            }
            None => {
                tracing::trace!(?event, "skipping inert event");
                self.stats.skipped += 1;
                None
            }
        }
    }

    /// Start timestamp of the interval currently open, if any.
    pub fn open_start(&self) -> Option<i64> {
        self.open.map(|(_, start)| start)
    }

    pub const fn stats(&self) -> ExtractionStats {
        self.stats
    }
}

/// Collects every closed interval from `events`, in log order.
pub fn extract_intervals<'a, I, Tz>(events: I, tz: &Tz) -> Vec<Interval>
where
    I: IntoIterator<Item = &'a Event>,
    Tz: TimeZone,
{
    let mut extractor = IntervalExtractor::new(tz);
    events
        .into_iter()
        .filter_map(|event| match extractor.feed(event)? {
            Segment::Closed(interval) => Some(interval),
            Segment::Opened { .. } => None,
        })
        .collect()
}
