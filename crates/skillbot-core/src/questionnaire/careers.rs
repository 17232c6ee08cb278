//! Career suggestions keyed by RIASEC category (`category,careers`)

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkillbotError};

const BUILTIN_CAREERS: &str = include_str!("../../data/careers.csv");

#[derive(Debug, Deserialize)]
struct CareerRow {
    category: String,
    careers: String,
}

/// Careers listed for one of the respondent's top categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerSuggestion {
    pub category: String,
    pub careers: String,
}

/// Category to careers lookup table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CareerBank {
    careers: BTreeMap<String, String>,
}

impl CareerBank {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut careers = BTreeMap::new();
        for row in rdr.deserialize::<CareerRow>() {
            let row = row?;
            // First row for a category wins.
            careers.entry(row.category).or_insert(row.careers);
        }
        Ok(Self { careers })
    }

    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| SkillbotError::io_operation("open career bank", path.display(), e))?;
        Self::from_reader(file)
    }

    pub fn builtin() -> Result<Self> {
        Self::from_reader(BUILTIN_CAREERS.as_bytes())
    }

    pub fn get(&self, category: &str) -> Option<&str> {
        self.careers.get(category).map(String::as_str)
    }

    /// Careers for each of `categories` that the bank knows, in the given order
    pub fn suggestions(&self, categories: &[&str]) -> Vec<CareerSuggestion> {
        categories
            .iter()
            .filter_map(|category| {
                self.get(category).map(|careers| CareerSuggestion {
                    category: category.to_string(),
                    careers: careers.to_string(),
                })
            })
            .collect()
    }
}
