//! Merged RIASEC + TCI trait mapping consumed by the recommender

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::questionnaire::{CategoryScores, Questionnaire};

pub const RIASEC_PREFIX: &str = "riasec_";
pub const TCI_PREFIX: &str = "tci_";

const RIASEC_NAMES: [(&str, &str); 6] = [
    ("R", "Realistic"),
    ("I", "Investigative"),
    ("A", "Artistic"),
    ("S", "Social"),
    ("E", "Enterprising"),
    ("C", "Conventional"),
];

/// Trait key for a RIASEC category; full names fold to their letter
/// (`Investigative` and `I` both become `riasec_I`).
pub fn riasec_key(category: &str) -> String {
    let category = category.trim();
    let letter = RIASEC_NAMES
        .iter()
        .find(|(letter, name)| {
            letter.eq_ignore_ascii_case(category) || name.eq_ignore_ascii_case(category)
        })
        .map(|(letter, _)| letter.to_string());

    match letter {
        Some(letter) => format!("{RIASEC_PREFIX}{letter}"),
        None => format!("{RIASEC_PREFIX}{}", strip_separators(category)),
    }
}

/// Trait key for a TCI trait, e.g. `Harm Avoidance` becomes `tci_HarmAvoidance`
pub fn tci_key(trait_name: &str) -> String {
    format!("{TCI_PREFIX}{}", strip_separators(trait_name.trim()))
}

fn strip_separators(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .collect()
}

/// Trait scores keyed by `riasec_*` / `tci_*`; absent traits read as 0
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitScores {
    scores: BTreeMap<String, f64>,
}

impl TraitScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge both questionnaires' category scores
    pub fn from_scores(riasec: &CategoryScores, tci: &CategoryScores) -> Self {
        let mut traits = Self::new();
        for (category, score) in riasec.iter() {
            traits.set(riasec_key(category), score);
        }
        for (name, score) in tci.iter() {
            traits.set(tci_key(name), score);
        }
        traits
    }

    /// Replace every trait of one questionnaire with `scores`
    pub fn replace(&mut self, kind: Questionnaire, scores: &CategoryScores) {
        let prefix = match kind {
            Questionnaire::Riasec => RIASEC_PREFIX,
            Questionnaire::Tci => TCI_PREFIX,
        };
        self.scores.retain(|key, _| !key.starts_with(prefix));
        for (category, score) in scores.iter() {
            let key = match kind {
                Questionnaire::Riasec => riasec_key(category),
                Questionnaire::Tci => tci_key(category),
            };
            self.set(key, score);
        }
    }

    /// Builder-style setter
    pub fn with(mut self, key: impl Into<String>, score: f64) -> Self {
        self.set(key, score);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, score: f64) {
        self.scores.insert(key.into(), score);
    }

    pub fn get(&self, key: &str) -> f64 {
        self.scores.get(key).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
