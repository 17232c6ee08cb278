//! SQLite database schema for skillbot

use rusqlite::{Connection, Result};

pub const CURRENT_SCHEMA_VERSION: i32 = 1;

const SCHEMA_SQL: &str = r#"
-- Questionnaire outcomes, one row per completed pair of tests
CREATE TABLE IF NOT EXISTS test_results (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    riasec_R REAL NOT NULL DEFAULT 0,
    riasec_I REAL NOT NULL DEFAULT 0,
    riasec_A REAL NOT NULL DEFAULT 0,
    riasec_S REAL NOT NULL DEFAULT 0,
    riasec_E REAL NOT NULL DEFAULT 0,
    riasec_C REAL NOT NULL DEFAULT 0,
    tci_NoveltySeeking REAL NOT NULL DEFAULT 0,
    tci_HarmAvoidance REAL NOT NULL DEFAULT 0,
    tci_RewardDependence REAL NOT NULL DEFAULT 0,
    tci_Persistence REAL NOT NULL DEFAULT 0,
    tci_SelfDirectedness REAL NOT NULL DEFAULT 0,
    tci_Cooperativeness REAL NOT NULL DEFAULT 0,
    tci_SelfTranscendence REAL NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_results_user ON test_results(user_id, created_at);

-- Parsed transcript rows; replaced wholesale per user
CREATE TABLE IF NOT EXISTS marks (
    user_id TEXT NOT NULL,
    subject TEXT NOT NULL,
    maximum INTEGER NOT NULL,
    obtained INTEGER NOT NULL,
    position INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_marks_user ON marks(user_id);

CREATE TABLE IF NOT EXISTS store_meta (
    key TEXT PRIMARY KEY,
    value TEXT
);
"#;

fn drop_all_tables(conn: &Connection) -> Result<()> {
    conn.execute("DROP TABLE IF EXISTS test_results", [])?;
    conn.execute("DROP TABLE IF EXISTS marks", [])?;
    conn.execute("DROP TABLE IF EXISTS store_meta", [])?;
    Ok(())
}

/// Create tables if missing. A database written by an unknown schema
/// version is dropped and recreated.
pub fn create_schema(conn: &Connection) -> Result<()> {
    let current_version: Option<i32> = conn
        .query_row(
            "SELECT value FROM store_meta WHERE key = 'schema_version'",
            [],
            |r| r.get::<_, String>(0).map(|s| s.parse().unwrap_or(0)),
        )
        .ok();

    match current_version {
        Some(v) if v == CURRENT_SCHEMA_VERSION => {}
        Some(v) => {
            drop_all_tables(conn)?;
            conn.execute_batch(SCHEMA_SQL)?;
            set_version(conn)?;
            tracing::info!(
                "Database schema recreated from version {} to {}",
                v,
                CURRENT_SCHEMA_VERSION
            );
        }
        None => {
            conn.execute_batch(SCHEMA_SQL)?;
            set_version(conn)?;
        }
    }

    Ok(())
}

fn set_version(conn: &Connection) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO store_meta (key, value) VALUES ('schema_version', ?1)",
        [&CURRENT_SCHEMA_VERSION.to_string()],
    )?;
    Ok(())
}

#[cfg(test)]
pub fn force_set_schema_version(conn: &Connection, version: i32) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO store_meta (key, value) VALUES ('schema_version', ?1)",
        [&version.to_string()],
    )?;
    Ok(())
}
