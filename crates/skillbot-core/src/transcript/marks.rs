//! Collapsed per-subject marks

use std::collections::BTreeMap;

use serde::Serialize;

use super::MarkRow;

/// Rows whose subject contains this are grand totals, not subjects
const TOTAL_MARKER: &str = "TOTAL";

/// Marks keyed by subject label.
///
/// Total rows are dropped and repeated subjects (the OCR engine sometimes
/// detects a line twice) keep the row with the highest obtained mark.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MarkSheet {
    subjects: BTreeMap<String, MarkRow>,
}

impl MarkSheet {
    pub fn from_rows(rows: &[MarkRow]) -> Self {
        let mut subjects: BTreeMap<String, MarkRow> = BTreeMap::new();

        for row in rows {
            let row = MarkRow::new(&row.subject, row.maximum, row.obtained);
            if row.subject.is_empty() || row.subject.contains(TOTAL_MARKER) {
                continue;
            }

            match subjects.get(&row.subject) {
                Some(existing) if existing.obtained >= row.obtained => {}
                _ => {
                    subjects.insert(row.subject.clone(), row);
                }
            }
        }

        Self { subjects }
    }

    /// Obtained mark for an exact subject label
    pub fn obtained(&self, subject: &str) -> Option<u32> {
        self.subjects.get(subject).map(|row| row.obtained)
    }

    /// First subject, in label order, whose label contains `keyword`
    pub fn find_containing(&self, keyword: &str) -> Option<&MarkRow> {
        self.subjects
            .values()
            .find(|row| row.subject.contains(keyword))
    }

    /// Collapsed rows in label order
    pub fn rows(&self) -> impl Iterator<Item = &MarkRow> {
        self.subjects.values()
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_keep_highest_obtained() {
        let sheet = MarkSheet::from_rows(&[
            MarkRow::new("PHYSICS", 150, 98),
            MarkRow::new("physics ", 150, 120),
            MarkRow::new("PHYSICS", 150, 110),
        ]);
        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.obtained("PHYSICS"), Some(120));
    }

    #[test]
    fn test_total_rows_are_dropped() {
        let sheet = MarkSheet::from_rows(&[
            MarkRow::new("ENGLISH", 200, 150),
            MarkRow::new("Grand Total", 1100, 901),
            MarkRow::new("TOTAL", 1100, 901),
        ]);
        assert_eq!(sheet.len(), 1);
        assert!(sheet.obtained("TOTAL").is_none());
    }

    #[test]
    fn test_find_containing_uses_label_order() {
        let sheet = MarkSheet::from_rows(&[
            MarkRow::new("MATHEMATICS II", 100, 60),
            MarkRow::new("APPLIED MATHEMATICS", 100, 90),
        ]);
        let row = sheet.find_containing("MATHEMATICS").unwrap();
        assert_eq!(row.subject, "APPLIED MATHEMATICS");
    }
}
