//! Canonical subject keys and keyword matching

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::MarkSheet;
use crate::error::SkillbotError;

/// Subject identifiers independent of transcript label wording
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectKey {
    Math,
    Physics,
    Chemistry,
    Biology,
    Computer,
    English,
    Urdu,
    Islamiat,
    #[serde(rename = "pakstudies")]
    PakStudies,
}

impl SubjectKey {
    pub const ALL: [SubjectKey; 9] = [
        SubjectKey::Math,
        SubjectKey::Physics,
        SubjectKey::Chemistry,
        SubjectKey::Biology,
        SubjectKey::Computer,
        SubjectKey::English,
        SubjectKey::Urdu,
        SubjectKey::Islamiat,
        SubjectKey::PakStudies,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectKey::Math => "math",
            SubjectKey::Physics => "physics",
            SubjectKey::Chemistry => "chemistry",
            SubjectKey::Biology => "biology",
            SubjectKey::Computer => "computer",
            SubjectKey::English => "english",
            SubjectKey::Urdu => "urdu",
            SubjectKey::Islamiat => "islamiat",
            SubjectKey::PakStudies => "pakstudies",
        }
    }

    /// Uppercase substrings identifying this subject in a transcript label,
    /// tried in order
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            SubjectKey::Math => &["MATH", "MATHEMATICS"],
            SubjectKey::Physics => &["PHYSICS"],
            SubjectKey::Chemistry => &["CHEMISTRY"],
            SubjectKey::Biology => &["BIOLOGY"],
            SubjectKey::Computer => &["COMPUTER"],
            SubjectKey::English => &["ENGLISH"],
            SubjectKey::Urdu => &["URDU"],
            SubjectKey::Islamiat => &["ISLAM", "ISLAMIYAT"],
            SubjectKey::PakStudies => &["PAKISTAN"],
        }
    }
}

impl FromStr for SubjectKey {
    type Err = SkillbotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        SubjectKey::ALL
            .into_iter()
            .find(|k| k.as_str() == key)
            .ok_or_else(|| SkillbotError::invalid_value("subject", s))
    }
}

impl fmt::Display for SubjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Obtained marks for every canonical subject; absent subjects are 0
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectScores {
    scores: BTreeMap<SubjectKey, u32>,
}

impl Default for SubjectScores {
    fn default() -> Self {
        Self {
            scores: SubjectKey::ALL.into_iter().map(|k| (k, 0)).collect(),
        }
    }
}

impl SubjectScores {
    /// All subjects at zero
    pub fn zero() -> Self {
        Self::default()
    }

    /// Match each canonical subject against the sheet's labels
    pub fn from_sheet(sheet: &MarkSheet) -> Self {
        let mut scores = Self::zero();
        for key in SubjectKey::ALL {
            let found = key
                .keywords()
                .iter()
                .find_map(|keyword| sheet.find_containing(keyword));
            if let Some(row) = found {
                scores.set(key, row.obtained);
            }
        }
        scores
    }

    /// Builder-style setter
    pub fn with(mut self, key: SubjectKey, mark: u32) -> Self {
        self.set(key, mark);
        self
    }

    pub fn set(&mut self, key: SubjectKey, mark: u32) {
        self.scores.insert(key, mark);
    }

    pub fn get(&self, key: SubjectKey) -> u32 {
        self.scores.get(&key).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SubjectKey, u32)> + '_ {
        self.scores.iter().map(|(k, v)| (*k, *v))
    }

    /// Whether any subject has a non-zero mark
    pub fn any_present(&self) -> bool {
        self.scores.values().any(|&v| v > 0)
    }
}
