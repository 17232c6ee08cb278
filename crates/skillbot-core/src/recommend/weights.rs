//! Field weight table
//!
//! Each field combines normalized subject marks (weights summing to 1.0)
//! with one or two normalized trait scores (weights summing to 0.3). The
//! table is data: it can be replaced from a TOML file without touching the
//! scoring code, and carries a version so tuned tables are distinguishable.
//!
//! Probabilities are normalized across fields, so raising an input that
//! several fields weight can lower a field's probability even as its raw
//! score rises. Only inputs weighted by a single field are guaranteed to
//! move that field's probability upward.
//!
//! ```toml
//! version = 2
//!
//! [fields.Medical.subjects]
//! biology = 0.5
//! chemistry = 0.5
//!
//! [fields.Medical.traits]
//! riasec_I = 0.3
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::catalog::Field;
use super::traits::{TraitScores, RIASEC_PREFIX, TCI_PREFIX};
use crate::bail_invalid;
use crate::error::{Result, SkillbotError};
use crate::transcript::{SubjectKey, SubjectScores};

/// Maximum attainable mark per subject on the supported transcript format
pub const SUBJECT_DENOMINATOR: f64 = 150.0;

/// Divisor applied to every trait score before weighting
pub const TRAIT_DENOMINATOR: f64 = 10.0;

/// Required sum of a field's subject weights
pub const SUBJECT_WEIGHT_TOTAL: f64 = 1.0;

/// Required sum of a field's trait weights
pub const TRAIT_WEIGHT_TOTAL: f64 = 0.3;

/// Version of the built-in table
pub const DEFAULT_TABLE_VERSION: u32 = 1;

/// Subjects a field may weight; the remaining keys are reported but unscored
pub const WEIGHTED_SUBJECTS: [SubjectKey; 6] = [
    SubjectKey::Math,
    SubjectKey::Physics,
    SubjectKey::Chemistry,
    SubjectKey::Biology,
    SubjectKey::English,
    SubjectKey::Urdu,
];

const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Weights for one field
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldWeights {
    pub subjects: BTreeMap<SubjectKey, f64>,
    pub traits: BTreeMap<String, f64>,
}

impl FieldWeights {
    fn new(subjects: &[(SubjectKey, f64)], traits: &[(&str, f64)]) -> Self {
        Self {
            subjects: subjects.iter().copied().collect(),
            traits: traits.iter().map(|(k, w)| (k.to_string(), *w)).collect(),
        }
    }

    /// Unnormalized weighted score; missing inputs count as 0
    pub fn score(&self, subjects: &SubjectScores, traits: &TraitScores) -> f64 {
        let subject_part: f64 = self
            .subjects
            .iter()
            .map(|(key, weight)| f64::from(subjects.get(*key)) / SUBJECT_DENOMINATOR * weight)
            .sum();
        let trait_part: f64 = self
            .traits
            .iter()
            .map(|(key, weight)| traits.get(key) / TRAIT_DENOMINATOR * weight)
            .sum();
        subject_part + trait_part
    }
}

/// Versioned field to weights table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightTable {
    pub version: u32,
    pub fields: BTreeMap<Field, FieldWeights>,
}

impl Default for WeightTable {
    fn default() -> Self {
        use SubjectKey::*;

        let fields = [
            (
                Field::Medical,
                FieldWeights::new(
                    &[(Biology, 0.40), (Chemistry, 0.35), (Physics, 0.10), (English, 0.15)],
                    &[("riasec_I", 0.20), ("tci_Persistence", 0.10)],
                ),
            ),
            (
                Field::Engineering,
                FieldWeights::new(
                    &[(Math, 0.40), (Physics, 0.35), (Chemistry, 0.15), (English, 0.10)],
                    &[("riasec_R", 0.15), ("riasec_C", 0.15)],
                ),
            ),
            (
                Field::ComputerScience,
                FieldWeights::new(
                    &[(Math, 0.50), (Physics, 0.20), (English, 0.30)],
                    &[("riasec_I", 0.15), ("riasec_C", 0.15)],
                ),
            ),
            (
                Field::Business,
                FieldWeights::new(
                    &[(Math, 0.30), (English, 0.50), (Urdu, 0.20)],
                    &[("riasec_E", 0.20), ("tci_NoveltySeeking", 0.10)],
                ),
            ),
            (
                Field::Arts,
                FieldWeights::new(
                    &[(English, 0.50), (Urdu, 0.50)],
                    &[("riasec_A", 0.20), ("riasec_S", 0.10)],
                ),
            ),
            (
                Field::Commerce,
                FieldWeights::new(
                    &[(Math, 0.50), (English, 0.30), (Urdu, 0.20)],
                    &[("riasec_C", 0.20), ("riasec_E", 0.10)],
                ),
            ),
        ];

        Self {
            version: DEFAULT_TABLE_VERSION,
            fields: fields.into_iter().collect(),
        }
    }
}

/// On-disk form of the table, keyed by display names
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WeightTableFile {
    version: u32,
    fields: BTreeMap<String, FieldWeightsFile>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct FieldWeightsFile {
    #[serde(default)]
    subjects: BTreeMap<String, f64>,
    #[serde(default)]
    traits: BTreeMap<String, f64>,
}

impl WeightTable {
    pub fn weights(&self, field: Field) -> Option<&FieldWeights> {
        self.fields.get(&field)
    }

    /// Raw weighted score for every field, in catalog order
    pub fn raw_scores(&self, subjects: &SubjectScores, traits: &TraitScores) -> Vec<(Field, f64)> {
        Field::ALL
            .into_iter()
            .map(|field| {
                let score = self
                    .weights(field)
                    .map_or(0.0, |w| w.score(subjects, traits));
                (field, score)
            })
            .collect()
    }

    /// Check the table's structural rules
    pub fn validate(&self) -> Result<()> {
        for field in Field::ALL {
            let Some(weights) = self.weights(field) else {
                bail_invalid!("weight table", format!("missing field {field}"));
            };

            if let Some(key) = weights
                .subjects
                .keys()
                .find(|k| !WEIGHTED_SUBJECTS.contains(k))
            {
                bail_invalid!("weight table", format!("{field} cannot weight subject {key}"));
            }

            let all_weights = weights.subjects.values().chain(weights.traits.values());
            if let Some(w) = all_weights.into_iter().find(|w| !w.is_finite() || **w < 0.0) {
                bail_invalid!("weight table", format!("{field} has invalid weight {w}"));
            }

            let subject_total: f64 = weights.subjects.values().sum();
            if (subject_total - SUBJECT_WEIGHT_TOTAL).abs() > WEIGHT_TOLERANCE {
                bail_invalid!(
                    "weight table",
                    format!("{field} subject weights sum to {subject_total}, expected {SUBJECT_WEIGHT_TOTAL}")
                );
            }

            if !(1..=2).contains(&weights.traits.len()) {
                bail_invalid!("weight table", format!("{field} must weight one or two traits"));
            }

            if let Some(key) = weights
                .traits
                .keys()
                .find(|k| !k.starts_with(RIASEC_PREFIX) && !k.starts_with(TCI_PREFIX))
            {
                bail_invalid!(
                    "weight table",
                    format!("{field} trait {key} must start with {RIASEC_PREFIX} or {TCI_PREFIX}")
                );
            }

            let trait_total: f64 = weights.traits.values().sum();
            if (trait_total - TRAIT_WEIGHT_TOTAL).abs() > WEIGHT_TOLERANCE {
                bail_invalid!(
                    "weight table",
                    format!("{field} trait weights sum to {trait_total}, expected {TRAIT_WEIGHT_TOTAL}")
                );
            }
        }
        Ok(())
    }

    /// Parse and validate a TOML weight table
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: WeightTableFile = toml::from_str(content)?;

        let mut fields = BTreeMap::new();
        for (name, weights) in file.fields {
            let field: Field = name.parse()?;
            let subjects = weights
                .subjects
                .into_iter()
                .map(|(key, w)| Ok((key.parse::<SubjectKey>()?, w)))
                .collect::<Result<BTreeMap<_, _>>>()?;
            fields.insert(
                field,
                FieldWeights {
                    subjects,
                    traits: weights.traits,
                },
            );
        }

        let table = Self {
            version: file.version,
            fields,
        };
        table.validate()?;
        Ok(table)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| SkillbotError::io_operation("read weight table", path.display(), e))?;
        let table = Self::from_toml(&content)?;
        tracing::debug!(version = table.version, path = %path.display(), "loaded weight table");
        Ok(table)
    }

    pub fn to_toml(&self) -> Result<String> {
        let file = WeightTableFile {
            version: self.version,
            fields: self
                .fields
                .iter()
                .map(|(field, weights)| {
                    (
                        field.name().to_string(),
                        FieldWeightsFile {
                            subjects: weights
                                .subjects
                                .iter()
                                .map(|(k, w)| (k.as_str().to_string(), *w))
                                .collect(),
                            traits: weights.traits.clone(),
                        },
                    )
                })
                .collect(),
        };
        toml::to_string_pretty(&file)
            .map_err(|e| SkillbotError::Other(format!("failed to serialize weight table: {}", e)))
    }
}
