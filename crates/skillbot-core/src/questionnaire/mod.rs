//! Questionnaires: question banks, answer buffers and trait aggregation
//!
//! Two inventories are supported. The RIASEC work-interest profiler is
//! answered on a five-point Likert scale and scored by category mean; the
//! TCI personality inventory is answered true/false and scored by trait sum.

mod aggregate;
mod answers;
mod bank;
mod careers;
pub mod rating;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SkillbotError;

pub use aggregate::{aggregate, CategoryScores};
pub use answers::AnswerSheet;
pub use bank::QuestionBank;
pub use careers::{CareerBank, CareerSuggestion};
pub use rating::{Aggregation, RatingScale};

/// Number of categories reported as "top interests"
pub const TOP_INTEREST_COUNT: usize = 3;

/// The questionnaire an answer set belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Questionnaire {
    /// Holland work-interest inventory
    Riasec,
    /// Temperament and character inventory
    Tci,
}

impl Questionnaire {
    pub const ALL: [Questionnaire; 2] = [Questionnaire::Riasec, Questionnaire::Tci];

    /// Rating scale used to score this questionnaire
    pub fn scale(&self) -> RatingScale {
        match self {
            Questionnaire::Riasec => RatingScale::riasec(),
            Questionnaire::Tci => RatingScale::tci(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Questionnaire::Riasec => "riasec",
            Questionnaire::Tci => "tci",
        }
    }
}

impl FromStr for Questionnaire {
    type Err = SkillbotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "riasec" => Ok(Questionnaire::Riasec),
            "tci" => Ok(Questionnaire::Tci),
            other => Err(SkillbotError::invalid_value("questionnaire", other)),
        }
    }
}

impl fmt::Display for Questionnaire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single questionnaire item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question identifier from the bank
    pub id: String,
    /// Question text shown to the respondent
    #[serde(rename = "question")]
    pub text: String,
    /// RIASEC category or TCI trait name
    pub category: String,
}

impl Question {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            category: category.into(),
        }
    }
}
