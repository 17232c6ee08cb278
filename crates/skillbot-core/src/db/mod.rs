//! SQLite database module for skillbot

mod marks;
mod results;
mod schema;

use crate::error::{Result, SkillbotError};
use rusqlite::Connection;
use std::path::Path;

pub use schema::{create_schema, CURRENT_SCHEMA_VERSION};

/// Database filename inside the store directory
pub const DB_FILE: &str = "skillbot.db";

/// SQLite database for skillbot
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create the database at the given store root
    #[tracing::instrument(skip(store_root), fields(path = %store_root.display()))]
    pub fn open(store_root: &Path) -> Result<Self> {
        let db_path = store_root.join(DB_FILE);

        let conn = Connection::open(&db_path).map_err(|e| {
            SkillbotError::Other(format!(
                "failed to open database at {}: {}",
                db_path.display(),
                e
            ))
        })?;

        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| SkillbotError::Other(format!("failed to enable WAL mode: {}", e)))?;

        Self::with_connection(conn)
    }

    /// Database held entirely in memory
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| SkillbotError::db_operation("open in-memory database", e))?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        create_schema(&conn).map_err(|e| {
            SkillbotError::Other(format!("failed to create database schema: {}", e))
        })?;
        Ok(Database { conn })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}
