//! Marks-table reconstruction from ordered OCR fragments
//!
//! OCR output loses column positions but keeps reading order, so a row is
//! recovered as "a subject label followed by two numeric tokens within a
//! short window" rather than by fixed column offsets.

use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, trace, warn};

use super::MarkRow;

/// Heading printed above the marks table on supported transcripts
pub const HEADER_MARKER: &str = "SUBJECT - WISE STATEMENT OF MARKS";

/// Weaker heading used when the full marker was not recognized
pub const FALLBACK_MARKER: &str = "SUBJECT";

/// Number of fragments searched for the two marks after a subject label
pub const LOOKAHEAD_WINDOW: usize = 4;

/// Column headings that are never subject labels
const FORBIDDEN_TOKENS: [&str; 5] = ["MARKS", "MAXIMUM", "OBTAINED", "SR.NO.", "SUBJECTS"];

static NUMBER_RE: OnceLock<Option<Regex>> = OnceLock::new();
static DIGIT_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn cached_regex(cell: &'static OnceLock<Option<Regex>>, pattern: &str) -> Option<&'static Regex> {
    cell.get_or_init(|| match Regex::new(pattern) {
            Ok(re) => Some(re),
            Err(e) => {
                warn!(error = %e, pattern, "Failed to compile regex");
                None
            }
        })
        .as_ref()
}

fn number_regex() -> Option<&'static Regex> {
    cached_regex(&NUMBER_RE, r"\d+\.?\d*")
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    cached_regex(&DIGIT_RE, r"^\p{Nd}$")
        .is_some_and(|re| re.is_match(c.encode_utf8(&mut buf)))
}

/// Value of any Unicode decimal digit, e.g. Arabic-Indic `٨` is 8.
///
/// Decimal digits are encoded as contiguous runs ordered 0 to 9, so the
/// value is the distance from the start of the run, modulo 10.
fn digit_value(c: char) -> Option<u32> {
    if let Some(value) = c.to_digit(10) {
        return Some(value);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let mut start = u32::from(c);
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    Some((u32::from(c) - start) % 10)
}

/// Rewrite a numeric token with ASCII digits
fn fold_digits(token: &str) -> Option<String> {
    token
        .chars()
        .map(|c| match c {
            '.' => Some('.'),
            _ => digit_value(c).and_then(|v| char::from_digit(v, 10)),
        })
        .collect()
}

/// First integer or decimal token in a fragment, in any script's digits
pub fn extract_number(fragment: &str) -> Option<f64> {
    number_regex()?
        .find_iter(fragment)
        .find_map(|m| fold_digits(m.as_str())?.parse::<f64>().ok())
}

fn compact_upper(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Index of the first fragment after the marks-table heading, or 0
pub fn find_table_start<S: AsRef<str>>(fragments: &[S]) -> usize {
    let marker = compact_upper(HEADER_MARKER);
    let position = fragments
        .iter()
        .position(|f| compact_upper(f.as_ref()).contains(&marker))
        .or_else(|| {
            fragments
                .iter()
                .position(|f| f.as_ref().to_uppercase().contains(FALLBACK_MARKER))
        });

    match position {
        Some(index) => index + 1,
        None => {
            debug!("no marks table heading found, parsing from the first fragment");
            0
        }
    }
}

/// Whether a fragment can never start a row: blank, too short, a column
/// heading, or a stray letter from a column ruling.
fn is_noise(fragment: &str) -> bool {
    let text = fragment.trim();
    if text.chars().count() < 2 {
        return true;
    }
    let upper = text.to_uppercase();
    FORBIDDEN_TOKENS.contains(&upper.as_str())
}

fn to_mark(value: f64) -> u32 {
    value.round() as u32
}

/// Reconstruct marks rows from OCR fragments in reading order.
///
/// Always terminates: every step moves the cursor forward by at least one
/// fragment. Subjects without two numbers in the window are dropped.
pub fn parse<S: AsRef<str>>(fragments: &[S]) -> Vec<MarkRow> {
    let mut rows = Vec::new();
    let mut cursor = find_table_start(fragments);

    while cursor < fragments.len() {
        let candidate = fragments[cursor].as_ref();
        if is_noise(candidate) {
            cursor += 1;
            continue;
        }

        let window_end = (cursor + 1 + LOOKAHEAD_WINDOW).min(fragments.len());
        let mut numbers: Vec<f64> = Vec::with_capacity(2);
        let mut resume_at = window_end;

        for (index, fragment) in fragments.iter().enumerate().take(window_end).skip(cursor + 1) {
            if let Some(value) = extract_number(fragment.as_ref()) {
                numbers.push(value);
                if numbers.len() == 2 {
                    resume_at = index + 1;
                    break;
                }
            }
        }

        if let [maximum, obtained] = numbers[..] {
            rows.push(MarkRow::new(candidate, to_mark(maximum), to_mark(obtained)));
            cursor = resume_at;
        } else {
            trace!(candidate = candidate.trim(), "dropping subject without two marks");
            cursor += LOOKAHEAD_WINDOW;
        }
    }

    debug!(fragments = fragments.len(), rows = rows.len(), "parsed transcript");
    rows
}
