//! Flat result record handed to persistence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::questionnaire::{CategoryScores, Questionnaire};
use crate::recommend::TraitScores;

/// RIASEC trait columns, in storage order
pub const RIASEC_COLUMNS: [&str; 6] = [
    "riasec_R", "riasec_I", "riasec_A", "riasec_S", "riasec_E", "riasec_C",
];

/// TCI trait columns, in storage order
pub const TCI_COLUMNS: [&str; 7] = [
    "tci_NoveltySeeking",
    "tci_HarmAvoidance",
    "tci_RewardDependence",
    "tci_Persistence",
    "tci_SelfDirectedness",
    "tci_Cooperativeness",
    "tci_SelfTranscendence",
];

/// One user's questionnaire outcome with a fixed column per trait
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub user_id: String,
    pub riasec_r: f64,
    pub riasec_i: f64,
    pub riasec_a: f64,
    pub riasec_s: f64,
    pub riasec_e: f64,
    pub riasec_c: f64,
    pub tci_novelty_seeking: f64,
    pub tci_harm_avoidance: f64,
    pub tci_reward_dependence: f64,
    pub tci_persistence: f64,
    pub tci_self_directedness: f64,
    pub tci_cooperativeness: f64,
    pub tci_self_transcendence: f64,
    pub created_at: DateTime<Utc>,
}

impl ResultRecord {
    /// Record for `user_id` stamped with the current time. Traits missing
    /// from either mapping are stored as 0.
    pub fn new(user_id: impl Into<String>, riasec: &CategoryScores, tci: &CategoryScores) -> Self {
        let traits = TraitScores::from_scores(riasec, tci);
        Self::from_columns(user_id, &trait_values(&traits), Utc::now())
    }

    /// Record carrying `scores` for one questionnaire and the previous
    /// record's values for the other
    pub fn updated(
        previous: Option<&ResultRecord>,
        user_id: impl Into<String>,
        kind: Questionnaire,
        scores: &CategoryScores,
    ) -> Self {
        let mut traits = previous.map(ResultRecord::to_trait_scores).unwrap_or_default();
        traits.replace(kind, scores);
        Self::from_columns(user_id, &trait_values(&traits), Utc::now())
    }

    /// Rebuild from stored values in [`RIASEC_COLUMNS`] then [`TCI_COLUMNS`] order
    pub fn from_columns(
        user_id: impl Into<String>,
        v: &[f64; 13],
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            riasec_r: v[0],
            riasec_i: v[1],
            riasec_a: v[2],
            riasec_s: v[3],
            riasec_e: v[4],
            riasec_c: v[5],
            tci_novelty_seeking: v[6],
            tci_harm_avoidance: v[7],
            tci_reward_dependence: v[8],
            tci_persistence: v[9],
            tci_self_directedness: v[10],
            tci_cooperativeness: v[11],
            tci_self_transcendence: v[12],
            created_at,
        }
    }

    /// Column values in [`RIASEC_COLUMNS`] then [`TCI_COLUMNS`] order
    pub fn columns(&self) -> [f64; 13] {
        [
            self.riasec_r,
            self.riasec_i,
            self.riasec_a,
            self.riasec_s,
            self.riasec_e,
            self.riasec_c,
            self.tci_novelty_seeking,
            self.tci_harm_avoidance,
            self.tci_reward_dependence,
            self.tci_persistence,
            self.tci_self_directedness,
            self.tci_cooperativeness,
            self.tci_self_transcendence,
        ]
    }

    /// The merged trait mapping this record was built from
    pub fn to_trait_scores(&self) -> TraitScores {
        RIASEC_COLUMNS
            .iter()
            .chain(TCI_COLUMNS.iter())
            .zip(self.columns())
            .fold(TraitScores::new(), |traits, (key, value)| {
                traits.with(*key, value)
            })
    }
}

fn trait_values(traits: &TraitScores) -> [f64; 13] {
    let mut values = [0.0; 13];
    for (slot, key) in values
        .iter_mut()
        .zip(RIASEC_COLUMNS.iter().chain(TCI_COLUMNS.iter()))
    {
        *slot = traits.get(key);
    }
    values
}
