//! Caller-owned answer buffer for an in-progress questionnaire

use serde::{Deserialize, Serialize};

use super::{aggregate, CategoryScores, Question, QuestionBank};
use crate::error::Result;

/// Answers in submission order; `answers[i]` answers question `i`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet {
    answers: Vec<String>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the answer to the next unanswered question
    pub fn push(&mut self, answer: impl Into<String>) {
        self.answers.push(answer.into());
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Index of the next question to ask
    pub fn next_index(&self) -> usize {
        self.answers.len()
    }

    /// Next question to ask, or `None` once every question is answered
    pub fn next_question<'b>(&self, bank: &'b QuestionBank) -> Option<&'b Question> {
        bank.get(self.next_index())
    }

    pub fn is_complete_for(&self, bank: &QuestionBank) -> bool {
        self.answers.len() >= bank.len()
    }

    /// Parse answers from a JSON array of strings or one answer per line
    pub fn parse(content: &str) -> Result<Self> {
        let trimmed = content.trim_start();
        if trimmed.starts_with('[') {
            let answers: Vec<String> = serde_json::from_str(trimmed)?;
            return Ok(answers.into_iter().collect());
        }

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect())
    }

    /// Score these answers against a bank using the bank's rating scale
    pub fn score(&self, bank: &QuestionBank) -> Result<CategoryScores> {
        aggregate(bank.questions(), &self.answers, &bank.kind().scale())
    }
}

impl<S: Into<String>> FromIterator<S> for AnswerSheet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().map(Into::into).collect(),
        }
    }
}
