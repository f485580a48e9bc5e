//! Summary command: streak, total time and today's time.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use chrono::{NaiveDateTime, Utc};
use serde::Serialize;
use wl_core::{DailySeries, ExtractionStats, Summary, WeeklySeries};

use crate::Zone;

/// Formats the headline summary.
///
/// "Today's time" is the last entry of the daily series, which is today
/// when the series was padded.
pub fn format_summary(summary: &Summary, updated: NaiveDateTime) -> String {
    let mut output = String::new();
    writeln!(output, "Streak for {} days", summary.streak).unwrap();
    writeln!(output, "Total time: {:.2} hours", summary.total_hours()).unwrap();
    writeln!(output, "Today's time: {:.2} minutes", summary.latest_minutes()).unwrap();
    writeln!(output, "Updated {}", updated.format("%H:%M:%S - %d/%m/%Y")).unwrap();
    output
}

/// JSON summary for presentation layers.
#[derive(Debug, Serialize)]
pub struct JsonSummary<'a> {
    pub generated_at: String,
    pub timezone: String,
    pub streak: u32,
    pub streak_threshold_minutes: u32,
    pub total_hours: f64,
    pub today_minutes: f64,
    pub daily: &'a DailySeries,
    pub weekly: &'a WeeklySeries,
    pub stats: ExtractionStats,
}

/// Formats the summary and both series as JSON.
pub fn format_summary_json(
    summary: &Summary,
    timezone: String,
    streak_threshold_minutes: u32,
) -> Result<String> {
    let report = JsonSummary {
        generated_at: Utc::now().to_rfc3339(),
        timezone,
        streak: summary.streak,
        streak_threshold_minutes,
        total_hours: summary.total_hours(),
        today_minutes: summary.latest_minutes(),
        daily: &summary.rollup.daily,
        weekly: &summary.rollup.weekly,
        stats: summary.ledger.stats(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Runs the summary command.
pub fn run<W: Write>(
    writer: &mut W,
    summary: &Summary,
    zone: Zone,
    streak_threshold_minutes: u32,
    json: bool,
) -> Result<()> {
    if json {
        let output = format_summary_json(summary, zone.name(), streak_threshold_minutes)?;
        writeln!(writer, "{output}")?;
    } else {
        write!(writer, "{}", format_summary(summary, zone.now()))?;
    }
    Ok(())
}
