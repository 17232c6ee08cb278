//! Answer rating scales for the two questionnaires

use serde::Serialize;

/// How mapped answer values are combined per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    /// Arithmetic mean of the values in the category
    Mean,
    /// Sum of the values in the category
    Sum,
}

/// Maps answer labels to numeric values and names the aggregation rule
#[derive(Debug, Clone, PartialEq)]
pub struct RatingScale {
    name: &'static str,
    aggregation: Aggregation,
    labels: Vec<(&'static str, f64)>,
}

impl RatingScale {
    /// Five-point Likert scale used by the RIASEC interest profiler.
    ///
    /// Both the "like" and the "agree" wordings are accepted.
    pub fn riasec() -> Self {
        Self {
            name: "riasec",
            aggregation: Aggregation::Mean,
            labels: vec![
                ("Strongly Dislike", 1.0),
                ("Strongly Disagree", 1.0),
                ("Dislike", 2.0),
                ("Disagree", 2.0),
                ("Unsure", 3.0),
                ("Neutral", 3.0),
                ("Like", 4.0),
                ("Agree", 4.0),
                ("Strongly Like", 5.0),
                ("Strongly Agree", 5.0),
            ],
        }
    }

    /// True/false scale used by the TCI personality inventory
    pub fn tci() -> Self {
        Self {
            name: "tci",
            aggregation: Aggregation::Sum,
            labels: vec![("True", 1.0), ("T", 1.0), ("False", 0.0), ("F", 0.0)],
        }
    }

    /// Scale name, used as the stage in validation errors
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn aggregation(&self) -> Aggregation {
        self.aggregation
    }

    /// Look up the value of an answer label (trimmed, case-insensitive)
    pub fn value_of(&self, label: &str) -> Option<f64> {
        let label = label.trim();
        self.labels
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(label))
            .map(|(_, value)| *value)
    }

    /// Canonical labels offered to respondents, one per distinct value
    pub fn choices(&self) -> Vec<&'static str> {
        let mut seen: Vec<f64> = Vec::new();
        let mut choices = Vec::new();
        for (label, value) in &self.labels {
            if !seen.contains(value) {
                seen.push(*value);
                choices.push(*label);
            }
        }
        choices
    }
}
