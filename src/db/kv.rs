//! SQLite-backed implementation of the state storage port.

use crate::core::store::StateStorage;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub struct SqliteStorage<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteStorage<'a> {
    /// The `kv_store` table must exist (see `db::migrate`).
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl StateStorage for SqliteStorage<'_> {
    fn load(&self, namespace: &str) -> AppResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE namespace = ?1",
                [namespace],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn save(&mut self, namespace: &str, snapshot: &str) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (namespace, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(namespace) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at",
            params![namespace, snapshot, Local::now().to_rfc3339()],
        )?;
        Ok(())
    }
}
