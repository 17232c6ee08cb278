//! Question bank loading from CSV (`id,question,category`)

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::{Question, Questionnaire};
use crate::error::{Result, SkillbotError};

const BUILTIN_RIASEC: &str = include_str!("../../data/riasec_questions.csv");
const BUILTIN_TCI: &str = include_str!("../../data/tci_questions.csv");

/// Immutable, ordered set of questions for one questionnaire
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionBank {
    kind: Questionnaire,
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank from already-loaded questions
    pub fn new(kind: Questionnaire, questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(SkillbotError::invalid_value(
                "question bank",
                format!("{} bank has no questions", kind),
            ));
        }

        if let Some(q) = questions.iter().find(|q| q.category.trim().is_empty()) {
            return Err(SkillbotError::invalid_value(
                "question bank",
                format!("question {} has no category", q.id),
            ));
        }

        let mut seen = HashSet::new();
        for q in &questions {
            if !seen.insert(q.id.as_str()) {
                tracing::warn!(kind = %kind, id = %q.id, "duplicate question id in bank");
            }
        }

        Ok(Self { kind, questions })
    }

    /// Parse a bank from CSV with an `id,question,category` header
    pub fn from_reader<R: Read>(kind: Questionnaire, reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let questions = rdr
            .deserialize::<Question>()
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Self::new(kind, questions)
    }

    /// Load a bank from a CSV file
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn from_path(kind: Questionnaire, path: &Path) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| SkillbotError::io_operation("open question bank", path.display(), e))?;
        let bank = Self::from_reader(kind, file)?;
        tracing::debug!(questions = bank.len(), "loaded question bank");
        Ok(bank)
    }

    /// The question bank shipped with skillbot
    pub fn builtin(kind: Questionnaire) -> Result<Self> {
        let data = match kind {
            Questionnaire::Riasec => BUILTIN_RIASEC,
            Questionnaire::Tci => BUILTIN_TCI,
        };
        Self::from_reader(kind, data.as_bytes())
    }

    pub fn kind(&self) -> Questionnaire {
        self.kind
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Distinct categories in first-appearance order
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for q in &self.questions {
            if !categories.contains(&q.category.as_str()) {
                categories.push(&q.category);
            }
        }
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_riasec_bank() {
        let bank = QuestionBank::builtin(Questionnaire::Riasec).unwrap();
        assert_eq!(bank.len(), 30);
        assert_eq!(bank.categories(), vec!["R", "I", "A", "S", "E", "C"]);
        assert_eq!(bank.get(0).unwrap().text, "Build kitchen cabinets");
    }

    #[test]
    fn test_builtin_tci_bank() {
        let bank = QuestionBank::builtin(Questionnaire::Tci).unwrap();
        assert_eq!(bank.len(), 21);
        assert_eq!(bank.categories().len(), 7);
        assert!(bank.categories().contains(&"Self-Directedness"));
    }

    #[test]
    fn test_from_reader_trims_fields() {
        let csv = "id,question,category\n q1 , Fix a bike , Realistic \n";
        let bank = QuestionBank::from_reader(Questionnaire::Riasec, csv.as_bytes()).unwrap();
        assert_eq!(bank.questions()[0], Question::new("q1", "Fix a bike", "Realistic"));
    }

    #[test]
    fn test_from_reader_rejects_missing_column() {
        let csv = "id,question\nq1,Fix a bike\n";
        let err = QuestionBank::from_reader(Questionnaire::Riasec, csv.as_bytes()).unwrap_err();
        assert!(matches!(err, SkillbotError::Csv(_)));
    }

    #[test]
    fn test_empty_bank_is_rejected() {
        let csv = "id,question,category\n";
        let err = QuestionBank::from_reader(Questionnaire::Tci, csv.as_bytes()).unwrap_err();
        assert!(matches!(err, SkillbotError::InvalidValue { .. }));
    }

    #[test]
    fn test_blank_category_is_rejected() {
        let csv = "id,question,category\nq1,Fix a bike,\n";
        let err = QuestionBank::from_reader(Questionnaire::Riasec, csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("q1"));
    }

    #[test]
    fn test_from_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tci.csv");
        fs::write(
            &path,
            "id,question,category\nt1,I persist,Persistence\nt2,I quit,Persistence\n",
        )
        .unwrap();

        let bank = QuestionBank::from_path(Questionnaire::Tci, &path).unwrap();
        assert_eq!(bank.kind(), Questionnaire::Tci);
        assert_eq!(bank.categories(), vec!["Persistence"]);
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempdir().unwrap();
        let err =
            QuestionBank::from_path(Questionnaire::Tci, &dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, SkillbotError::FailedOperation { .. }));
    }
}
