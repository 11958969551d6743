//! packlight reset - Restore the default data set

use clap::Args;

use crate::app::AppContext;
use crate::cli::output;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Wipe everything instead of restoring the defaults
    #[arg(long)]
    pub all: bool,
}

pub fn run(ctx: &AppContext, args: &ResetArgs) -> Result<()> {
    if args.all {
        ctx.store.clear_all()?;
    } else {
        ctx.store.reset_defaults()?;
    }

    if ctx.robot_mode {
        return output::emit_json(&output::robot_ok(serde_json::json!({
            "reset": true,
            "wiped": args.all,
        })));
    }
    if args.all {
        println!("store wiped");
    } else {
        println!("defaults restored");
    }
    Ok(())
}
