//! Core domain logic for the work log.
//!
//! This crate turns a pomodoro timer's transition log into:
//! - Work intervals, paired from idle/rest→work and work→idle/rest events
//! - Per-day totals with a running cumulative total
//! - Weekly rollups and plot-ready daily series
//! - The longest streak of days above a work threshold

pub mod daily;
pub mod day;
mod error;
pub mod event;
pub mod interval;
pub mod rollup;
pub mod source;
pub mod streak;
mod summary;

pub use daily::{DailyLedger, DayAggregate, aggregate, aggregate_sorted};
pub use day::DayKey;
pub use error::{Error, SourceError};
pub use event::{Event, TimerState, Transition};
pub use interval::{ExtractionStats, Interval, IntervalExtractor, Segment, extract_intervals};
pub use rollup::{DailySeries, Rollup, WeekLabelStyle, WeeklySeries, rollup};
pub use source::{load_events, read_events};
pub use streak::{DEFAULT_STREAK_THRESHOLD_MINUTES, longest_streak};
pub use summary::{Summary, SummaryOptions};
