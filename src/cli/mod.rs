//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod commands;
pub mod output;

/// Packlight - plan the lightest loadout that still clears the value floor
#[derive(Parser, Debug)]
#[command(name = "packlight")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable JSON output for machine consumption
    #[arg(long, global = true)]
    pub robot: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Data directory (default: $PACKLIGHT_ROOT or the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the candidate item table
    Items(commands::items::ItemsArgs),

    /// Show or update the stored value floor and weight ceiling
    Config(commands::config::ConfigArgs),

    /// Find the lightest selection that clears the value floor
    Optimize(commands::optimize::OptimizeArgs),

    /// Descriptive statistics over the stored items
    Stats(commands::stats::StatsArgs),

    /// Inspect or clear archived results
    History(commands::history::HistoryArgs),

    /// Export items, constraints and history as a JSON snapshot
    Export(commands::export::ExportArgs),

    /// Import a JSON snapshot
    Import(commands::import::ImportArgs),

    /// Restore the default data set
    Reset(commands::reset::ResetArgs),
}
