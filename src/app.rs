//! Shared per-invocation context for CLI commands.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{self, Config};
use crate::error::Result;
use crate::storage::Store;

/// Everything a command handler needs: the open store, the loaded config,
/// and the output mode.
pub struct AppContext {
    pub store: Store,
    pub config: Config,
    pub root: PathBuf,
    pub robot_mode: bool,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let root = config::resolve_root(cli.data_dir.as_deref());
        let config = Config::load(&root.join("config.toml"))?;
        let store = Store::open(root.join("packlight.db"))?;
        Ok(Self {
            store,
            config,
            root,
            robot_mode: cli.robot,
        })
    }
}
