//! Days command: per-day minutes and cumulative hours.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use wl_core::DailySeries;

/// Formats one row per day.
pub fn format_days(daily: &DailySeries) -> String {
    let mut output = String::new();
    writeln!(output, "{:<10}  {:>8}  {:>11}", "DAY", "MINUTES", "TOTAL HOURS").unwrap();
    for ((day, minutes), hours) in daily
        .days
        .iter()
        .zip(&daily.minutes)
        .zip(&daily.cumulative_hours)
    {
        writeln!(output, "{:<10}  {minutes:>8.2}  {hours:>11.2}", day.to_string()).unwrap();
    }
    output
}

/// Runs the days command.
pub fn run<W: Write>(writer: &mut W, daily: &DailySeries, json: bool) -> Result<()> {
    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(daily)?)?;
    } else {
        write!(writer, "{}", format_days(daily))?;
    }
    Ok(())
}
