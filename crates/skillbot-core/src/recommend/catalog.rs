//! Candidate fields and their subfields

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SkillbotError;

/// Academic/career fields ranked by the recommender
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    Medical,
    Engineering,
    #[serde(rename = "Computer Science")]
    ComputerScience,
    Business,
    Arts,
    Commerce,
}

impl Field {
    /// Catalog order; also the tie-break order when probabilities are equal
    pub const ALL: [Field; 6] = [
        Field::Medical,
        Field::Engineering,
        Field::ComputerScience,
        Field::Business,
        Field::Arts,
        Field::Commerce,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Medical => "Medical",
            Field::Engineering => "Engineering",
            Field::ComputerScience => "Computer Science",
            Field::Business => "Business",
            Field::Arts => "Arts",
            Field::Commerce => "Commerce",
        }
    }

    /// Subfields offered when this field is recommended, in display order
    pub fn subfields(&self) -> &'static [&'static str] {
        match self {
            Field::Engineering => &["Mechanical", "Electrical", "Civil", "Software", "Chemical"],
            Field::Medical => &["MBBS", "Pharmacy", "Physio", "Nursing", "Biotech"],
            Field::ComputerScience => &[
                "AI",
                "Data Science",
                "Cyber Security",
                "Software",
                "IT Management",
            ],
            Field::Business => &["BBA", "Marketing", "Finance", "HR", "Supply Chain"],
            Field::Arts => &[
                "Psychology",
                "Fine Arts",
                "Mass Communication",
                "English",
                "Sociology",
            ],
            Field::Commerce => &[
                "B.Com",
                "Accounting",
                "Banking",
                "Economics",
                "Business Admin",
            ],
        }
    }
}

impl FromStr for Field {
    type Err = SkillbotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Field::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SkillbotError::invalid_value("field", s))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
