use chrono::Utc;
use rusqlite::params;

use super::Database;
use crate::error::{Result, SkillbotError};
use crate::transcript::MarkRow;

impl Database {
    /// Replace a user's stored marks with `rows`
    pub fn save_marks(&self, user_id: &str, rows: &[MarkRow]) -> Result<()> {
        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(|e| SkillbotError::Other(format!("failed to start transaction: {}", e)))?;

        tx.execute("DELETE FROM marks WHERE user_id = ?1", params![user_id])
            .map_err(|e| SkillbotError::db_operation("clear marks", e))?;

        let created_at = Utc::now().to_rfc3339();
        for (position, row) in rows.iter().enumerate() {
            tx.execute(
                "INSERT INTO marks (user_id, subject, maximum, obtained, position, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    user_id,
                    row.subject,
                    row.maximum,
                    row.obtained,
                    position as i64,
                    created_at
                ],
            )
            .map_err(|e| SkillbotError::db_operation("insert mark", e))?;
        }

        tx.commit()
            .map_err(|e| SkillbotError::Other(format!("failed to commit transaction: {}", e)))?;

        tracing::debug!(user = user_id, rows = rows.len(), "saved marks");
        Ok(())
    }

    /// A user's stored marks in their original order
    pub fn load_marks(&self, user_id: &str) -> Result<Vec<MarkRow>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT subject, maximum, obtained FROM marks
                 WHERE user_id = ?1 ORDER BY position",
            )
            .map_err(|e| SkillbotError::db_operation("prepare marks query", e))?;

        let rows = stmt
            .query_map(params![user_id], |r| {
                Ok(MarkRow::new(
                    &r.get::<_, String>(0)?,
                    r.get(1)?,
                    r.get(2)?,
                ))
            })
            .map_err(|e| SkillbotError::db_operation("query marks", e))?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| SkillbotError::db_operation("read marks", e))
    }
}
