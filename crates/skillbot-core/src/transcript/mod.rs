//! Academic transcript handling
//!
//! Turns the OCR collaborator's ordered text fragments into marks rows,
//! collapses them into a per-subject sheet and maps that sheet onto the
//! canonical subject keys used by the recommender.

mod marks;
pub mod ocr;
mod parse;
mod subjects;

use serde::{Deserialize, Serialize};

pub use marks::MarkSheet;
pub use ocr::OcrOutput;
pub use parse::{extract_number, find_table_start, parse, LOOKAHEAD_WINDOW};
pub use subjects::{SubjectKey, SubjectScores};

/// One subject line of a transcript's marks table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkRow {
    /// Subject label, uppercased and trimmed
    pub subject: String,
    /// Maximum attainable marks
    pub maximum: u32,
    /// Marks obtained; not checked against `maximum`
    pub obtained: u32,
}

impl MarkRow {
    pub fn new(subject: &str, maximum: u32, obtained: u32) -> Self {
        Self {
            subject: subject.trim().to_uppercase(),
            maximum,
            obtained,
        }
    }
}
