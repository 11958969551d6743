//! packlight optimize - Run the loadout optimizer

use clap::Args;
use tracing::info;

use crate::app::AppContext;
use crate::cli::output;
use crate::core::{self, Constraints};
use crate::error::Result;
use crate::output::render_result;

#[derive(Args, Debug)]
pub struct OptimizeArgs {
    /// Override the stored value floor for this run
    #[arg(long)]
    pub floor: Option<f64>,

    /// Override the stored weight ceiling for this run
    #[arg(long)]
    pub ceiling: Option<f64>,

    /// Do not archive the outcome to history
    #[arg(long)]
    pub no_archive: bool,
}

pub fn run(ctx: &AppContext, args: &OptimizeArgs) -> Result<()> {
    let stored = ctx.store.constraints()?;
    let constraints = Constraints::new(
        args.floor.unwrap_or(stored.min_value),
        args.ceiling.unwrap_or(stored.max_weight),
    );
    let items = ctx.store.list_items()?;

    let result = core::optimize(&constraints, &items);
    info!(
        success = result.success,
        candidates = items.len(),
        total_weight = result.total_weight,
        "optimization finished"
    );

    // Mirrors the interactive flow: only successful outcomes are archived.
    if result.success && !args.no_archive {
        ctx.store
            .append_history(&constraints, &result, ctx.config.history_limit)?;
    }

    if ctx.robot_mode {
        return output::emit_json(&output::robot_ok(&result));
    }
    print!("{}", render_result(&result));
    Ok(())
}
