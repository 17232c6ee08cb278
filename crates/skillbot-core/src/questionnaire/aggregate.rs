//! Trait aggregation: positional answers to per-category scores

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::rating::{Aggregation, RatingScale};
use super::Question;
use crate::error::{Result, SkillbotError};

/// Per-category scores for one completed questionnaire.
///
/// Means for RIASEC (1.0 to 5.0), sums for TCI (0 to the number of items in
/// the trait). Only categories present in the question bank appear.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryScores {
    scores: BTreeMap<String, f64>,
}

impl CategoryScores {
    pub fn get(&self, category: &str) -> Option<f64> {
        self.scores.get(category).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Iterate in category-name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Scores sorted descending, ties broken by category name
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }

    /// Names of the `n` highest-scoring categories
    pub fn top(&self, n: usize) -> Vec<&str> {
        self.ranked().into_iter().take(n).map(|(k, _)| k).collect()
    }
}

impl FromIterator<(String, f64)> for CategoryScores {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

/// Score a completed questionnaire.
///
/// `answers[i]` answers `questions[i]`. Fails when the counts differ or an
/// answer is not a label of `scale`.
pub fn aggregate<S: AsRef<str>>(
    questions: &[Question],
    answers: &[S],
    scale: &RatingScale,
) -> Result<CategoryScores> {
    if questions.len() != answers.len() {
        return Err(SkillbotError::InputLengthMismatch {
            stage: scale.name().to_string(),
            questions: questions.len(),
            answers: answers.len(),
        });
    }

    let mut totals: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for (index, (question, answer)) in questions.iter().zip(answers).enumerate() {
        let answer = answer.as_ref();
        let value = scale
            .value_of(answer)
            .ok_or_else(|| SkillbotError::UnrecognizedAnswerValue {
                stage: scale.name().to_string(),
                index,
                question_id: question.id.clone(),
                value: answer.to_string(),
            })?;

        let entry = totals
            .entry(question.category.trim().to_string())
            .or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }

    let scores = totals
        .into_iter()
        .map(|(category, (sum, count))| {
            let score = match scale.aggregation() {
                Aggregation::Mean => sum / count as f64,
                Aggregation::Sum => sum,
            };
            (category, score)
        })
        .collect();

    tracing::debug!(stage = scale.name(), answers = answers.len(), "aggregated answers");
    Ok(scores)
}
