//! Normalization of OCR engine output into ordered text fragments
//!
//! Engines report recognized text in different shapes. Whatever the shape,
//! the parser only ever sees the recognized strings in reading order.

use serde::Deserialize;

use crate::error::Result;

/// One detection in the list-of-triples shape: `[box, [text, confidence]]`
#[derive(Debug, Clone, Deserialize)]
pub struct Detection(pub serde_json::Value, pub (String, f64));

/// Keyed result object: `{"rec_texts": [...], "rec_scores": [...]}`
#[derive(Debug, Clone, Deserialize)]
pub struct KeyedResult {
    pub rec_texts: Vec<String>,
    #[serde(default)]
    pub rec_scores: Vec<f64>,
}

/// Any supported OCR output shape
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OcrOutput {
    /// Already-normalized fragments
    Fragments(Vec<String>),
    /// Pages of detections; a page with nothing recognized may be `null`
    Pages(Vec<Option<Vec<Detection>>>),
    /// One keyed result per page
    KeyedPages(Vec<KeyedResult>),
    /// A single keyed result
    Keyed(KeyedResult),
}

impl OcrOutput {
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Recognized strings in reading order, pages concatenated
    pub fn into_fragments(self) -> Vec<String> {
        match self {
            OcrOutput::Fragments(fragments) => fragments,
            OcrOutput::Pages(pages) => pages
                .into_iter()
                .flatten()
                .flatten()
                .map(|Detection(_, (text, _))| text)
                .collect(),
            OcrOutput::KeyedPages(pages) => pages.into_iter().flat_map(|p| p.rec_texts).collect(),
            OcrOutput::Keyed(result) => result.rec_texts,
        }
    }
}

/// Read fragments from a JSON document in any supported shape, or from
/// plain text with one fragment per line.
pub fn fragments_from_str(content: &str) -> Result<Vec<String>> {
    let trimmed = content.trim_start();
    if trimmed.starts_with('[') || trimmed.starts_with('{') {
        return Ok(OcrOutput::from_json(trimmed)?.into_fragments());
    }
    Ok(content.lines().map(|line| line.trim().to_string()).collect())
}
