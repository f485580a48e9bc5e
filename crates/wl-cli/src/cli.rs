//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Work log summaries.
///
/// Reads a pomodoro timer's transition log and reports daily and weekly
/// work time and the longest streak of working days.
#[derive(Debug, Parser)]
#[command(name = "wl", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the transition log (overrides `log_path`).
    #[arg(long, global = true)]
    pub log: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum Commands {
    /// Show streak, total time and today's time (default).
    Summary {
        /// Output the full daily and weekly series as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show minutes and cumulative hours per day.
    Days {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show hours per week.
    Weeks {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the longest streak of working days.
    Streak {
        /// Minutes a day must exceed to count (overrides config).
        #[arg(long)]
        threshold: Option<u32>,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Summary { json: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn subcommand_is_optional() {
        let cli = Cli::try_parse_from(["wl", "--log", "/tmp/x.log"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.log, Some(PathBuf::from("/tmp/x.log")));
    }

    #[test]
    fn streak_threshold_parses() {
        let cli = Cli::try_parse_from(["wl", "streak", "--threshold", "25"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Streak {
                threshold: Some(25)
            })
        ));
    }
}
