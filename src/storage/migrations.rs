//! Database migrations

use rusqlite::Connection;

use crate::error::{PacklightError, Result};

const MIGRATIONS: [&str; 2] = [
    // 001: items, stored constraints, result history
    "CREATE TABLE items (
        id TEXT PRIMARY KEY,
        weight REAL NOT NULL CHECK (weight > 0),
        value REAL NOT NULL CHECK (value > 0),
        position INTEGER NOT NULL
    );
    CREATE TABLE config (
        key TEXT PRIMARY KEY,
        value REAL NOT NULL
    );
    CREATE TABLE history (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        saved_at TEXT NOT NULL,
        min_value REAL NOT NULL,
        max_weight REAL NOT NULL,
        total_weight REAL NOT NULL,
        total_value REAL NOT NULL,
        message TEXT NOT NULL,
        selected_json TEXT NOT NULL
    );",
    // 002: newest-first history scans
    "CREATE INDEX idx_history_saved_at ON history (saved_at DESC, id DESC);",
];

pub const SCHEMA_VERSION: u32 = MIGRATIONS.len() as u32;

/// Run all migrations on the database
pub fn run_migrations(conn: &Connection) -> Result<u32> {
    let current_version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .map_err(PacklightError::Database)?;

    for (idx, sql) in MIGRATIONS.iter().enumerate() {
        let target_version = (idx + 1) as u32;
        if current_version >= target_version {
            continue;
        }

        conn.execute_batch(sql).map_err(|err| {
            PacklightError::Config(format!("migration {target_version} failed: {err}"))
        })?;
        conn.pragma_update(None, "user_version", target_version)
            .map_err(|err| {
                PacklightError::Config(format!(
                    "failed to set user_version {target_version}: {err}"
                ))
            })?;
    }

    Ok(SCHEMA_VERSION)
}
