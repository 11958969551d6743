//! packlight stats - Descriptive statistics over the stored items

use clap::Args;

use crate::app::AppContext;
use crate::cli::output;
use crate::core::statistics;
use crate::error::Result;
use crate::output::render_stats;

#[derive(Args, Debug)]
pub struct StatsArgs {}

pub fn run(ctx: &AppContext, _args: &StatsArgs) -> Result<()> {
    let items = ctx.store.list_items()?;
    let stats = statistics(&items);
    if ctx.robot_mode {
        return output::emit_json(&output::robot_ok(&stats));
    }
    print!("{}", render_stats(&stats));
    Ok(())
}
