//! packlight export - Write a JSON snapshot of the store

use std::path::PathBuf;

use clap::Args;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Write the snapshot to this file instead of stdout
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(ctx: &AppContext, args: &ExportArgs) -> Result<()> {
    let bundle = ctx.store.export_bundle()?;
    let rendered = serde_json::to_string_pretty(&bundle)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            if !ctx.robot_mode {
                println!("exported to {}", path.display());
            }
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
