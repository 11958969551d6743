//! Storage layer for packlight
//!
//! SQLite persistence for candidate items, the stored constraints, and the
//! archived result history, plus the JSON snapshot used by export/import.

pub mod migrations;
pub mod sqlite;

pub use sqlite::{
    DEFAULT_CONSTRAINTS, ExportBundle, HistoryRecord, Store, default_items,
};
