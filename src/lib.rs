pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod storage;

pub use error::{PacklightError, Result};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
