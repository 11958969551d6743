//! packlight items - Manage the candidate item table

use clap::{Args, Subcommand};

use crate::app::AppContext;
use crate::cli::output;
use crate::core::Item;
use crate::error::Result;
use crate::output::render_items;

#[derive(Args, Debug)]
pub struct ItemsArgs {
    #[command(subcommand)]
    pub command: ItemsCommand,
}

#[derive(Subcommand, Debug)]
pub enum ItemsCommand {
    /// List candidate items
    List,

    /// Add a new item
    Add {
        /// Unique item identifier
        id: String,

        /// Weight carried (kg)
        #[arg(long)]
        weight: f64,

        /// Value delivered (kcal)
        #[arg(long)]
        value: f64,
    },

    /// Edit an existing item
    Edit {
        /// Identifier of the item to change
        id: String,

        /// New identifier
        #[arg(long)]
        rename: Option<String>,

        /// New weight (kg)
        #[arg(long)]
        weight: Option<f64>,

        /// New value (kcal)
        #[arg(long)]
        value: Option<f64>,
    },

    /// Remove an item
    Remove {
        /// Identifier of the item to delete
        id: String,
    },
}

pub fn run(ctx: &AppContext, args: &ItemsArgs) -> Result<()> {
    match &args.command {
        ItemsCommand::List => list(ctx),
        ItemsCommand::Add { id, weight, value } => {
            ctx.store.add_item(&Item::new(id.clone(), *weight, *value))?;
            list(ctx)
        }
        ItemsCommand::Edit {
            id,
            rename,
            weight,
            value,
        } => {
            let current = ctx
                .store
                .list_items()?
                .into_iter()
                .find(|item| item.id == *id)
                .ok_or_else(|| crate::error::PacklightError::ItemNotFound(id.clone()))?;
            let updated = Item::new(
                rename.clone().unwrap_or_else(|| current.id.clone()),
                weight.unwrap_or(current.weight),
                value.unwrap_or(current.value),
            );
            ctx.store.update_item(id, &updated)?;
            list(ctx)
        }
        ItemsCommand::Remove { id } => {
            ctx.store.remove_item(id)?;
            list(ctx)
        }
    }
}

fn list(ctx: &AppContext) -> Result<()> {
    let items = ctx.store.list_items()?;
    if ctx.robot_mode {
        return output::emit_json(&output::robot_ok(&items));
    }
    print!("{}", render_items(&items));
    Ok(())
}
