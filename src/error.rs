use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PacklightError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Item already exists: {0}")]
    DuplicateItem(String),

    #[error("Invalid item: {0}")]
    InvalidItem(String),

    #[error("Import failed: {0}")]
    ImportFailed(String),
}

pub type Result<T> = std::result::Result<T, PacklightError>;
