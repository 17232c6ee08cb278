//! `skillbot transcript` command - parse OCR fragments into marks

use std::time::Instant;

use serde_json::json;

use crate::cli::TranscriptArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_json, print_records_header};
use crate::commands::input::read_input;
use crate::output_by_format_result;
use skillbot_core::error::{Result, SkillbotError};
use skillbot_core::format::escape_record_value;
use skillbot_core::trace_time;
use skillbot_core::transcript::{self, ocr, MarkRow, MarkSheet, SubjectScores};

/// Read and parse a fragments file. An unusable transcript is logged,
/// not returned as an error.
pub fn load_rows(ctx: &CommandContext, path: &std::path::Path) -> Result<Vec<MarkRow>> {
    let start = Instant::now();
    let fragments = ocr::fragments_from_str(&read_input(ctx.root, path)?)?;
    let rows = transcript::parse(&fragments);
    trace_time!(start, "parse_transcript", rows = rows.len());

    if rows.is_empty() {
        let condition = SkillbotError::NoMarksParsed {
            fragments: fragments.len(),
        };
        tracing::warn!(%condition, path = %path.display());
    }
    Ok(rows)
}

/// Execute the transcript command
pub fn execute(ctx: &CommandContext, args: &TranscriptArgs) -> Result<()> {
    let rows = load_rows(ctx, &args.fragments)?;
    let sheet = MarkSheet::from_rows(&rows);
    let subjects = SubjectScores::from_sheet(&sheet);

    if args.save {
        let store = ctx.discover_or_open_store()?;
        store.db().save_marks(&args.user, &rows)?;
    }

    output_by_format_result!(ctx.cli.format,
        json => {
            print_json(&json!({
                "user": args.user,
                "rows": rows,
                "subjects": subjects,
                "saved": args.save,
            }))
        },
        human => { print_human(ctx, &rows, &subjects, args.save); },
        records => {
            print_records_header(
                "transcript",
                &[
                    ("user", args.user.clone()),
                    ("rows", rows.len().to_string()),
                ],
            );
            for row in &rows {
                println!(
                    "M {} maximum={} obtained={}",
                    escape_record_value(&row.subject),
                    row.maximum,
                    row.obtained
                );
            }
            for (key, mark) in subjects.iter() {
                println!("S {} obtained={}", key, mark);
            }
        }
    )
}

fn print_human(ctx: &CommandContext, rows: &[MarkRow], subjects: &SubjectScores, saved: bool) {
    if rows.is_empty() {
        println!("No marks found in transcript");
    } else {
        for row in rows {
            println!("  {:<30} {:>4} / {:<4}", row.subject, row.obtained, row.maximum);
        }
    }

    if !ctx.cli.quiet {
        println!();
        println!("Subject scores:");
    }
    for (key, mark) in subjects.iter() {
        println!("  {:<12} {}", key.as_str(), mark);
    }

    if saved && !ctx.cli.quiet {
        println!();
        println!("Saved {} mark rows", rows.len());
    }
}
