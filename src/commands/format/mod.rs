//! Shared output formatting helpers for commands

use serde::Serialize;
use skillbot_core::error::Result;
use skillbot_core::format::escape_record_value;

/// Pretty-print any serializable value as JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the records header line for a command
///
/// Produces `H skillbot=1 records=1 mode=<mode>` followed by any extra
/// `key=value` pairs.
pub fn print_records_header(mode: &str, extra: &[(&str, String)]) {
    println!("{}", records_line("H skillbot=1 records=1", mode, extra));
}

fn records_line(prefix: &str, mode: &str, extra: &[(&str, String)]) -> String {
    let mut line = format!("{} mode={}", prefix, mode);
    for (key, value) in extra {
        line.push_str(&format!(" {}={}", key, escape_record_value(value)));
    }
    line
}

/// Format a score for human output
pub fn fmt_score(value: f64) -> String {
    format!("{:.2}", value)
}
