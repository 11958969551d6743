//! packlight config - Show or update the stored constraints

use clap::{Args, Subcommand};

use crate::app::AppContext;
use crate::cli::output;
use crate::core::Constraints;
use crate::error::{PacklightError, Result};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the stored value floor and weight ceiling
    Show,

    /// Update one or both thresholds
    Set {
        /// Minimum total value a selection must reach
        #[arg(long)]
        floor: Option<f64>,

        /// Maximum total weight a selection may carry
        #[arg(long)]
        ceiling: Option<f64>,
    },
}

pub fn run(ctx: &AppContext, args: &ConfigArgs) -> Result<()> {
    match &args.command {
        ConfigCommand::Show => show(ctx),
        ConfigCommand::Set { floor, ceiling } => {
            if floor.is_none() && ceiling.is_none() {
                return Err(PacklightError::Config(
                    "nothing to set; pass --floor and/or --ceiling".to_string(),
                ));
            }
            let current = ctx.store.constraints()?;
            let updated = Constraints::new(
                floor.unwrap_or(current.min_value),
                ceiling.unwrap_or(current.max_weight),
            );
            if updated.min_value <= 0.0 || updated.max_weight <= 0.0 {
                return Err(PacklightError::Config(
                    "floor and ceiling must be positive".to_string(),
                ));
            }
            ctx.store.set_constraints(&updated)?;
            show(ctx)
        }
    }
}

fn show(ctx: &AppContext) -> Result<()> {
    let constraints = ctx.store.constraints()?;
    if ctx.robot_mode {
        return output::emit_json(&output::robot_ok(&constraints));
    }
    println!("value floor:    {:.2}", constraints.min_value);
    println!("weight ceiling: {:.2}", constraints.max_weight);
    Ok(())
}
