// src/repositories/state_repository.rs
//
// Keyed-record storage. Each record is one serialized JSON value.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use rusqlite::{params, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::db::{get_connection, initialize_database, verify_database_integrity, ConnectionPool};
use crate::error::{AppError, AppResult};

pub trait StateRepository: Send + Sync {
    fn load(&self, key: &str) -> AppResult<Option<String>>;
    fn save(&self, key: &str, value: &str) -> AppResult<()>;
}

pub struct SqliteStateRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteStateRepository {
    /// Wraps the pool, makes sure the schema exists and the file is sound
    pub fn new(pool: Arc<ConnectionPool>) -> AppResult<Self> {
        {
            let conn = get_connection(&pool)?;
            initialize_database(&conn)?;
            verify_database_integrity(&conn)?;
        }
        Ok(Self { pool })
    }
}

impl StateRepository for SqliteStateRepository {
    fn load(&self, key: &str) -> AppResult<Option<String>> {
        let conn = get_connection(&self.pool)?;

        let value = conn
            .query_row(
                "SELECT value FROM state_records WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(value)
    }

    fn save(&self, key: &str, value: &str) -> AppResult<()> {
        let conn = get_connection(&self.pool)?;

        conn.execute(
            "INSERT INTO state_records (key, value, updated_at)
             VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value],
        )?;

        Ok(())
    }
}

/// Process-local storage for sessions that need no durability
#[derive(Default)]
pub struct InMemoryStateRepository {
    records: RwLock<HashMap<String, String>>,
}

impl InMemoryStateRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateRepository for InMemoryStateRepository {
    fn load(&self, key: &str) -> AppResult<Option<String>> {
        let records = self
            .records
            .read()
            .map_err(|_| AppError::Other("State records lock poisoned".to_string()))?;
        Ok(records.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> AppResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| AppError::Other("State records lock poisoned".to_string()))?;
        records.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read a JSON record; absent, unreadable or unparsable data yields None.
/// Failures are logged and never propagated.
pub(crate) fn load_json<T: DeserializeOwned>(repo: &dyn StateRepository, key: &str) -> Option<T> {
    let raw = match repo.load(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("Could not read stored record '{}': {}", key, e);
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Discarding corrupt stored record '{}': {}", key, e);
            None
        }
    }
}

pub(crate) fn save_json<T: Serialize>(
    repo: &dyn StateRepository,
    key: &str,
    value: &T,
) -> AppResult<()> {
    let raw = serde_json::to_string(value)?;
    repo.save(key, &raw)
}
