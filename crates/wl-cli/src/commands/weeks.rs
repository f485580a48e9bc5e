//! Weeks command: hours per Monday-start week.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use wl_core::WeeklySeries;

/// Formats one row per week, in order of first appearance.
pub fn format_weeks(weekly: &WeeklySeries) -> String {
    let mut output = String::new();
    writeln!(output, "{:<15}  {:>7}", "WEEK", "HOURS").unwrap();
    for (label, hours) in weekly.labels.iter().zip(&weekly.hours) {
        writeln!(output, "{label:<15}  {hours:>7.2}").unwrap();
    }
    output
}

/// Runs the weeks command.
pub fn run<W: Write>(writer: &mut W, weekly: &WeeklySeries, json: bool) -> Result<()> {
    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(weekly)?)?;
    } else {
        write!(writer, "{}", format_weeks(weekly))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixture_summary;

    use insta::assert_snapshot;

    #[test]
    fn test_format_weeks() {
        let summary = fixture_summary();

        assert_snapshot!(format_weeks(&summary.rollup.weekly), @r"
        WEEK               HOURS
        04 Mar - 04 Mar     2.00
        11 Mar - 11 Mar     0.25
        ");
    }
}
