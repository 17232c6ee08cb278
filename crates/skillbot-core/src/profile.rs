//! End-to-end profile: questionnaire scores and transcript marks combined

use serde::Serialize;

use crate::error::Result;
use crate::questionnaire::CategoryScores;
use crate::recommend::{recommend, Recommendation, TraitScores, WeightTable};
use crate::transcript::{MarkRow, MarkSheet, SubjectScores};

/// Everything the recommender needs for one user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub traits: TraitScores,
    pub subjects: SubjectScores,
}

impl Profile {
    /// Merge both questionnaires and collapse the parsed mark rows.
    ///
    /// An empty `rows` is not an error: the profile proceeds with every
    /// subject at zero and the condition is logged.
    pub fn build(riasec: &CategoryScores, tci: &CategoryScores, rows: &[MarkRow]) -> Self {
        Self::from_traits(TraitScores::from_scores(riasec, tci), rows)
    }

    /// Same as [`Profile::build`] for an already merged trait mapping,
    /// such as one restored from a saved result
    pub fn from_traits(traits: TraitScores, rows: &[MarkRow]) -> Self {
        if rows.is_empty() {
            tracing::warn!("no mark rows, continuing with zero subject marks");
        }

        let sheet = MarkSheet::from_rows(rows);
        Self {
            traits,
            subjects: SubjectScores::from_sheet(&sheet),
        }
    }

    pub fn recommend(&self, table: &WeightTable) -> Result<Recommendation> {
        recommend(&self.subjects, &self.traits, table)
    }
}
