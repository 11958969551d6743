//! SQLite persistence for items, constraints and result history

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, Row, params};
use serde::{Deserialize, Serialize};

use crate::core::{Constraints, Item, SolutionResult};
use crate::error::{PacklightError, Result};
use crate::storage::migrations;

/// Snapshot format version, carried in exported bundles.
pub const BUNDLE_VERSION: &str = "1.0";

/// Stored constraints seeded on first open.
pub const DEFAULT_CONSTRAINTS: Constraints = Constraints::new(15.0, 10.0);

/// Seed candidate set for a fresh database.
#[must_use]
pub fn default_items() -> Vec<Item> {
    vec![
        Item::new("E1", 5.0, 3.0),
        Item::new("E2", 3.0, 5.0),
        Item::new("E3", 5.0, 2.0),
        Item::new("E4", 1.0, 8.0),
        Item::new("E5", 2.0, 3.0),
    ]
}

/// One archived optimization outcome, newest first in listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub saved_at: DateTime<Utc>,
    pub constraints: Constraints,
    pub selected_items: Vec<Item>,
    pub total_weight: f64,
    pub total_value: f64,
    pub message: String,
}

/// Everything the store holds, as one JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportBundle {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Item>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Constraints>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<HistoryRecord>>,
}

/// SQLite-backed store for the loadout planner.
pub struct Store {
    conn: Connection,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}

impl Store {
    /// Open (or create) the store at the given path, running migrations and
    /// seeding default data on first use.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// In-memory store, used by tests.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "journal_mode", "WAL").ok();
        conn.pragma_update(None, "foreign_keys", "ON")?;
        migrations::run_migrations(&conn)?;

        let store = Self { conn };
        store.seed_defaults()?;
        Ok(store)
    }

    /// Seed the original default data on a fresh database. Keyed off the
    /// config table so that a deliberately emptied item list stays empty.
    fn seed_defaults(&self) -> Result<()> {
        let config_rows: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM config", [], |row| row.get(0))?;
        if config_rows > 0 {
            return Ok(());
        }

        self.set_constraints(&DEFAULT_CONSTRAINTS)?;
        self.replace_items(&default_items())?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Items
    // ------------------------------------------------------------------

    /// All candidate items in insertion order.
    pub fn list_items(&self) -> Result<Vec<Item>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, weight, value FROM items ORDER BY position")?;
        let rows = stmt.query_map([], map_item_row)?;
        let mut items = Vec::new();
        for row in rows {
            items.push(row?);
        }
        Ok(items)
    }

    pub fn add_item(&self, item: &Item) -> Result<()> {
        ensure_well_formed(item)?;
        if self.item_exists(&item.id)? {
            return Err(PacklightError::DuplicateItem(item.id.clone()));
        }
        self.conn.execute(
            "INSERT INTO items (id, weight, value, position) \
             VALUES (?1, ?2, ?3, (SELECT COALESCE(MAX(position) + 1, 0) FROM items))",
            params![item.id, item.weight, item.value],
        )?;
        Ok(())
    }

    /// Update the item stored under `old_id`, optionally renaming it. The
    /// item keeps its position in the table.
    pub fn update_item(&self, old_id: &str, item: &Item) -> Result<()> {
        ensure_well_formed(item)?;
        if !self.item_exists(old_id)? {
            return Err(PacklightError::ItemNotFound(old_id.to_string()));
        }
        if old_id != item.id && self.item_exists(&item.id)? {
            return Err(PacklightError::DuplicateItem(item.id.clone()));
        }
        self.conn.execute(
            "UPDATE items SET id = ?1, weight = ?2, value = ?3 WHERE id = ?4",
            params![item.id, item.weight, item.value, old_id],
        )?;
        Ok(())
    }

    pub fn remove_item(&self, id: &str) -> Result<()> {
        let changed = self
            .conn
            .execute("DELETE FROM items WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(PacklightError::ItemNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Replace the whole candidate table, preserving the given order.
    pub fn replace_items(&self, items: &[Item]) -> Result<()> {
        for item in items {
            ensure_well_formed(item)?;
        }
        self.conn.execute("DELETE FROM items", [])?;
        let mut stmt = self
            .conn
            .prepare("INSERT INTO items (id, weight, value, position) VALUES (?1, ?2, ?3, ?4)")?;
        for (position, item) in items.iter().enumerate() {
            stmt.execute(params![item.id, item.weight, item.value, position as i64])?;
        }
        Ok(())
    }

    fn item_exists(&self, id: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM items WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    // ------------------------------------------------------------------
    // Constraints
    // ------------------------------------------------------------------

    pub fn constraints(&self) -> Result<Constraints> {
        let min_value = self.config_value("min_value")?;
        let max_weight = self.config_value("max_weight")?;
        Ok(Constraints::new(min_value, max_weight))
    }

    pub fn set_constraints(&self, constraints: &Constraints) -> Result<()> {
        self.set_config_value("min_value", constraints.min_value)?;
        self.set_config_value("max_weight", constraints.max_weight)?;
        Ok(())
    }

    fn config_value(&self, key: &str) -> Result<f64> {
        self.conn
            .query_row(
                "SELECT value FROM config WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .map_err(|_| PacklightError::Config(format!("missing stored value for {key}")))
    }

    fn set_config_value(&self, key: &str, value: f64) -> Result<()> {
        self.conn.execute(
            "INSERT INTO config (key, value) VALUES (?1, ?2) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // History
    // ------------------------------------------------------------------

    /// Archive a successful result, stamped now, keeping at most `limit`
    /// records (newest win).
    pub fn append_history(
        &self,
        constraints: &Constraints,
        result: &SolutionResult,
        limit: usize,
    ) -> Result<HistoryRecord> {
        let record = HistoryRecord {
            saved_at: Utc::now(),
            constraints: *constraints,
            selected_items: result.selected_items.clone(),
            total_weight: result.total_weight,
            total_value: result.total_value,
            message: result.message.clone(),
        };
        self.insert_history(&record)?;
        self.trim_history(limit)?;
        Ok(record)
    }

    fn insert_history(&self, record: &HistoryRecord) -> Result<()> {
        let selected_json = serde_json::to_string(&record.selected_items)?;
        self.conn.execute(
            "INSERT INTO history \
             (saved_at, min_value, max_weight, total_weight, total_value, message, selected_json) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                record.saved_at.to_rfc3339(),
                record.constraints.min_value,
                record.constraints.max_weight,
                record.total_weight,
                record.total_value,
                record.message,
                selected_json,
            ],
        )?;
        Ok(())
    }

    fn trim_history(&self, limit: usize) -> Result<()> {
        self.conn.execute(
            "DELETE FROM history WHERE id NOT IN \
             (SELECT id FROM history ORDER BY saved_at DESC, id DESC LIMIT ?1)",
            params![limit as i64],
        )?;
        Ok(())
    }

    /// Archived results, newest first.
    pub fn history(&self) -> Result<Vec<HistoryRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT saved_at, min_value, max_weight, total_weight, total_value, message, \
             selected_json FROM history ORDER BY saved_at DESC, id DESC",
        )?;
        let rows = stmt.query_map([], map_history_row)?;
        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    pub fn clear_history(&self) -> Result<()> {
        self.conn.execute("DELETE FROM history", [])?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Snapshot / reset
    // ------------------------------------------------------------------

    pub fn export_bundle(&self) -> Result<ExportBundle> {
        Ok(ExportBundle {
            version: BUNDLE_VERSION.to_string(),
            exported_at: Utc::now(),
            items: Some(self.list_items()?),
            constraints: Some(self.constraints()?),
            history: Some(self.history()?),
        })
    }

    /// Apply whichever sections the bundle carries; absent sections leave
    /// the stored data untouched.
    pub fn import_bundle(&self, bundle: &ExportBundle) -> Result<()> {
        if let Some(items) = &bundle.items {
            self.replace_items(items)
                .map_err(|err| PacklightError::ImportFailed(err.to_string()))?;
        }
        if let Some(constraints) = &bundle.constraints {
            self.set_constraints(constraints)?;
        }
        if let Some(history) = &bundle.history {
            self.clear_history()?;
            // Oldest first so the newest-first listing order survives.
            for record in history.iter().rev() {
                self.insert_history(record)?;
            }
        }
        Ok(())
    }

    /// Restore the seed items and constraints and drop the history.
    pub fn reset_defaults(&self) -> Result<()> {
        self.replace_items(&default_items())?;
        self.set_constraints(&DEFAULT_CONSTRAINTS)?;
        self.clear_history()?;
        Ok(())
    }

    /// Wipe everything, leaving empty tables and no stored constraints.
    pub fn clear_all(&self) -> Result<()> {
        self.conn.execute("DELETE FROM items", [])?;
        self.conn.execute("DELETE FROM history", [])?;
        self.conn.execute("DELETE FROM config", [])?;
        Ok(())
    }
}

fn ensure_well_formed(item: &Item) -> Result<()> {
    if !item.is_well_formed() {
        return Err(PacklightError::InvalidItem(format!(
            "{}: id must be non-empty and weight/value positive",
            item.id
        )));
    }
    Ok(())
}

fn map_item_row(row: &Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        weight: row.get(1)?,
        value: row.get(2)?,
    })
}

fn map_history_row(row: &Row<'_>) -> rusqlite::Result<HistoryRecord> {
    let saved_at: String = row.get(0)?;
    let selected_json: String = row.get(6)?;
    Ok(HistoryRecord {
        saved_at: saved_at
            .parse::<DateTime<Utc>>()
            .unwrap_or_else(|_| Utc::now()),
        constraints: Constraints::new(row.get(1)?, row.get(2)?),
        selected_items: serde_json::from_str(&selected_json).unwrap_or_default(),
        total_weight: row.get(3)?,
        total_value: row.get(4)?,
        message: row.get(5)?,
    })
}
