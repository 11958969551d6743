//! packlight import - Load a JSON snapshot into the store

use std::path::PathBuf;

use clap::Args;

use crate::app::AppContext;
use crate::cli::output;
use crate::error::{PacklightError, Result};
use crate::storage::ExportBundle;

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Snapshot file produced by `packlight export`
    pub file: PathBuf,
}

pub fn run(ctx: &AppContext, args: &ImportArgs) -> Result<()> {
    let raw = std::fs::read_to_string(&args.file)?;
    let bundle: ExportBundle = serde_json::from_str(&raw)
        .map_err(|err| PacklightError::ImportFailed(format!("{}: {err}", args.file.display())))?;

    ctx.store.import_bundle(&bundle)?;

    if ctx.robot_mode {
        return output::emit_json(&output::robot_ok(serde_json::json!({
            "imported": true,
            "items": bundle.items.as_ref().map(Vec::len),
            "history": bundle.history.as_ref().map(Vec::len),
        })));
    }
    println!("imported {}", args.file.display());
    Ok(())
}
