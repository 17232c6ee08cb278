use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension};

use super::Database;
use crate::error::{Result, SkillbotError};
use crate::results::ResultRecord;

impl Database {
    /// Store a result record, returning its generated id
    pub fn save_result(&self, record: &ResultRecord) -> Result<String> {
        let id = ulid::Ulid::new().to_string();
        let v = record.columns();

        self.conn
            .execute(
                "INSERT INTO test_results (id, user_id,
                    riasec_R, riasec_I, riasec_A, riasec_S, riasec_E, riasec_C,
                    tci_NoveltySeeking, tci_HarmAvoidance, tci_RewardDependence, tci_Persistence,
                    tci_SelfDirectedness, tci_Cooperativeness, tci_SelfTranscendence, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)",
                params![
                    id,
                    record.user_id,
                    v[0],
                    v[1],
                    v[2],
                    v[3],
                    v[4],
                    v[5],
                    v[6],
                    v[7],
                    v[8],
                    v[9],
                    v[10],
                    v[11],
                    v[12],
                    record.created_at.to_rfc3339(),
                ],
            )
            .map_err(|e| SkillbotError::db_operation("insert test result", e))?;

        tracing::debug!(id = %id, user = %record.user_id, "saved test result");
        Ok(id)
    }

    /// Most recent result for a user, if any. Results stamped with the
    /// same time resolve to the one inserted last.
    pub fn latest_result(&self, user_id: &str) -> Result<Option<ResultRecord>> {
        let row = self
            .conn
            .query_row(
                "SELECT riasec_R, riasec_I, riasec_A, riasec_S, riasec_E, riasec_C,
                    tci_NoveltySeeking, tci_HarmAvoidance, tci_RewardDependence, tci_Persistence,
                    tci_SelfDirectedness, tci_Cooperativeness, tci_SelfTranscendence, created_at
                 FROM test_results WHERE user_id = ?1
                 ORDER BY created_at DESC, rowid DESC LIMIT 1",
                params![user_id],
                |r| {
                    let mut values = [0.0; 13];
                    for (i, slot) in values.iter_mut().enumerate() {
                        *slot = r.get(i)?;
                    }
                    let created: String = r.get(13)?;
                    Ok((values, created))
                },
            )
            .optional()
            .map_err(|e| SkillbotError::db_operation("query latest test result", e))?;

        row.map(|(values, created)| {
            Ok(ResultRecord::from_columns(
                user_id,
                &values,
                parse_timestamp(&created)?,
            ))
        })
        .transpose()
    }
}

pub(super) fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| SkillbotError::invalid_value("stored timestamp", format!("{value}: {e}")))
}
