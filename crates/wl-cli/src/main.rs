use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wl_cli::commands::{self, NO_WORK_MESSAGE, days, streak, summary, weeks};
use wl_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr, output to stdout
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let mut config =
        Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(log) = cli.log {
        config.log_path = log;
    }
    let command = cli.command.unwrap_or_default();
    if let Commands::Streak {
        threshold: Some(threshold),
    } = command
    {
        config.streak_threshold_minutes = threshold;
    }
    tracing::debug!(?config, "loaded configuration");

    let zone = config.zone()?;
    let Some(summary) = commands::load_summary(&config, zone)? else {
        println!("{NO_WORK_MESSAGE}");
        return Ok(());
    };

    let mut stdout = std::io::stdout().lock();
    match command {
        Commands::Summary { json } => {
            summary::run(&mut stdout, &summary, zone, config.streak_threshold_minutes, json)?;
        }
        Commands::Days { json } => days::run(&mut stdout, &summary.rollup.daily, json)?,
        Commands::Weeks { json } => weeks::run(&mut stdout, &summary.rollup.weekly, json)?,
        Commands::Streak { .. } => {
            streak::run(&mut stdout, &summary, config.streak_threshold_minutes)?;
        }
    }

    Ok(())
}
