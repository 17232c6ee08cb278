//! Weighted field recommendation
//!
//! Combines canonical subject marks with merged trait scores through a
//! [`WeightTable`], normalizes the per-field scores into a probability
//! distribution and reports the subfields of the best-scoring field.

mod catalog;
mod traits;
mod weights;

pub use catalog::Field;
pub use traits::{riasec_key, tci_key, TraitScores, RIASEC_PREFIX, TCI_PREFIX};
pub use weights::{
    FieldWeights, WeightTable, DEFAULT_TABLE_VERSION, SUBJECT_DENOMINATOR, SUBJECT_WEIGHT_TOTAL,
    TRAIT_DENOMINATOR, TRAIT_WEIGHT_TOTAL, WEIGHTED_SUBJECTS,
};

use serde::Serialize;

use crate::error::{Result, SkillbotError};
use crate::transcript::SubjectScores;

/// One field's raw score and normalized probability
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldScore {
    pub field: Field,
    pub score: f64,
    pub probability: f64,
}

/// Ranked fields with the top field's subfields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub weights_version: u32,
    /// Descending by probability; equal probabilities keep catalog order
    pub fields: Vec<FieldScore>,
    pub top_field: Field,
    pub subfields: Vec<String>,
}

impl Recommendation {
    pub fn probability(&self, field: Field) -> f64 {
        self.fields
            .iter()
            .find(|f| f.field == field)
            .map_or(0.0, |f| f.probability)
    }

    pub fn score(&self, field: Field) -> f64 {
        self.fields
            .iter()
            .find(|f| f.field == field)
            .map_or(0.0, |f| f.score)
    }
}

/// Rank every field for the given subject marks and traits.
///
/// Fails with [`SkillbotError::DegenerateRecommendation`] when no field
/// scores above zero, since no distribution can be formed.
pub fn recommend(
    subjects: &SubjectScores,
    traits: &TraitScores,
    table: &WeightTable,
) -> Result<Recommendation> {
    let raw = table.raw_scores(subjects, traits);
    let total: f64 = raw.iter().map(|(_, score)| score).sum();

    if !total.is_finite() || total <= 0.0 {
        tracing::debug!(total, "all field scores are zero");
        return Err(SkillbotError::DegenerateRecommendation);
    }

    let mut fields: Vec<FieldScore> = raw
        .into_iter()
        .map(|(field, score)| FieldScore {
            field,
            score,
            probability: score / total,
        })
        .collect();

    // sort_by is stable, so ties stay in catalog order
    fields.sort_by(|a, b| b.probability.total_cmp(&a.probability));

    let top_field = fields
        .first()
        .map(|f| f.field)
        .ok_or(SkillbotError::DegenerateRecommendation)?;

    tracing::debug!(
        top = %top_field,
        version = table.version,
        "ranked fields"
    );

    Ok(Recommendation {
        weights_version: table.version,
        fields,
        top_field,
        subfields: top_field
            .subfields()
            .iter()
            .map(|s| s.to_string())
            .collect(),
    })
}
