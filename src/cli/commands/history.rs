//! packlight history - Inspect or clear archived results

use clap::{Args, Subcommand};

use crate::app::AppContext;
use crate::cli::output;
use crate::error::Result;
use crate::output::render_history;

#[derive(Args, Debug)]
pub struct HistoryArgs {
    #[command(subcommand)]
    pub command: Option<HistoryCommand>,
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommand {
    /// List archived results, newest first (default)
    Show {
        /// Show at most this many records
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Drop all archived results
    Clear,
}

pub fn run(ctx: &AppContext, args: &HistoryArgs) -> Result<()> {
    match &args.command {
        None | Some(HistoryCommand::Show { limit: None }) => show(ctx, None),
        Some(HistoryCommand::Show { limit }) => show(ctx, *limit),
        Some(HistoryCommand::Clear) => {
            ctx.store.clear_history()?;
            if ctx.robot_mode {
                return output::emit_json(&output::robot_ok(serde_json::json!({
                    "cleared": true
                })));
            }
            println!("history cleared");
            Ok(())
        }
    }
}

fn show(ctx: &AppContext, limit: Option<usize>) -> Result<()> {
    let mut records = ctx.store.history()?;
    if let Some(limit) = limit {
        records.truncate(limit);
    }
    if ctx.robot_mode {
        return output::emit_json(&output::robot_ok(&records));
    }
    print!("{}", render_history(&records));
    Ok(())
}
