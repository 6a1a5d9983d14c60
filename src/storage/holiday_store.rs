use rusqlite::Connection;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::holidays::rules::HolidayRule;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Durable store for user-created holidays: one row per rule, JSON payload.
pub struct HolidayStore {
    conn: Connection,
}

impl HolidayStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let store = Self::new(Connection::open(path)?);
        store.initialize()?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let store = Self::new(Connection::open_in_memory()?);
        store.initialize()?;
        Ok(store)
    }

    pub fn initialize(&self) -> Result<(), StoreError> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS custom_holidays (
                id TEXT PRIMARY KEY,
                data TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    pub fn store_rule(&self, rule: &HolidayRule) -> Result<(), StoreError> {
        let data = serde_json::to_string(rule)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO custom_holidays (id, data) VALUES (?1, ?2)",
            rusqlite::params![&rule.id, &data],
        )?;
        Ok(())
    }

    pub fn delete_rule(&self, id: &str) -> Result<(), StoreError> {
        self.conn.execute("DELETE FROM custom_holidays WHERE id = ?1", [id])?;
        Ok(())
    }

    /// Loads every persisted rule. Rows that fail to parse are logged and
    /// skipped so a corrupt entry can never take the whole set down.
    pub fn load_all(&self) -> Result<HashMap<String, HolidayRule>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT id, data FROM custom_holidays")?;
        let mut rows = stmt.query([])?;

        let mut rules = HashMap::new();
        while let Some(row) = rows.next()? {
            let id: String = row.get(0)?;
            let data: String = row.get(1)?;
            match serde_json::from_str::<HolidayRule>(&data) {
                Ok(rule) => {
                    rules.insert(id, rule);
                }
                Err(err) => {
                    tracing::warn!("Skipping malformed custom holiday {}: {}", id, err);
                }
            }
        }
        Ok(rules)
    }
}
