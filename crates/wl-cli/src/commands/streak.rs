//! Streak command.

use std::io::Write;

use anyhow::Result;
use wl_core::Summary;

/// Runs the streak command.
pub fn run<W: Write>(writer: &mut W, summary: &Summary, threshold_minutes: u32) -> Result<()> {
    writeln!(
        writer,
        "Longest streak: {} days (more than {threshold_minutes} minutes per day)",
        summary.streak
    )?;
    Ok(())
}
