//! Work log CLI library.
//!
//! This crate provides the CLI interface for the work log.

mod cli;
pub mod commands;
mod config;
mod zone;

pub use cli::{Cli, Commands};
pub use config::Config;
pub use zone::Zone;
