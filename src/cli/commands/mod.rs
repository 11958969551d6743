//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub mod config;
pub mod export;
pub mod history;
pub mod import;
pub mod items;
pub mod optimize;
pub mod reset;
pub mod stats;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Items(args) => items::run(ctx, args),
        Commands::Config(args) => config::run(ctx, args),
        Commands::Optimize(args) => optimize::run(ctx, args),
        Commands::Stats(args) => stats::run(ctx, args),
        Commands::History(args) => history::run(ctx, args),
        Commands::Export(args) => export::run(ctx, args),
        Commands::Import(args) => import::run(ctx, args),
        Commands::Reset(args) => reset::run(ctx, args),
    }
}
