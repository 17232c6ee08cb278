//! `skillbot score` command - aggregate questionnaire answers
//!
//! RIASEC results also list the top interests and matching careers.

use serde_json::json;

use crate::cli::ScoreArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{fmt_score, print_json, print_records_header};
use crate::commands::input::read_input;
use crate::commands::questions::load_bank;
use crate::output_by_format_result;
use skillbot_core::error::Result;
use skillbot_core::format::escape_record_value;
use skillbot_core::questionnaire::{
    AnswerSheet, CareerBank, CareerSuggestion, CategoryScores, Questionnaire, TOP_INTEREST_COUNT,
};
use skillbot_core::results::ResultRecord;

/// Execute the score command
pub fn execute(ctx: &CommandContext, args: &ScoreArgs) -> Result<()> {
    let kind = args.questionnaire;
    let bank = load_bank(ctx, kind)?;
    let sheet = AnswerSheet::parse(&read_input(ctx.root, &args.answers)?)?;

    tracing::debug!(questionnaire = %kind, answers = sheet.len(), "scoring answers");
    let scores = sheet.score(&bank)?;

    let (top, careers) = match kind {
        Questionnaire::Riasec => {
            let top = scores.top(TOP_INTEREST_COUNT);
            let careers = career_bank(ctx)?.suggestions(&top);
            (top, careers)
        }
        Questionnaire::Tci => (Vec::new(), Vec::new()),
    };

    let saved_id = if args.save {
        let store = ctx.discover_or_open_store()?;
        let previous = store.db().latest_result(&args.user)?;
        let record = ResultRecord::updated(previous.as_ref(), &args.user, kind, &scores);
        Some(store.db().save_result(&record)?)
    } else {
        None
    };

    output_by_format_result!(ctx.cli.format,
        json => {
            print_json(&json!({
                "questionnaire": kind,
                "user": args.user,
                "scores": scores,
                "top_interests": top,
                "careers": careers,
                "saved": saved_id,
            }))
        },
        human => { print_human(ctx, kind, &scores, &careers, saved_id.as_deref()); },
        records => {
            let mut extra = vec![
                ("questionnaire", kind.to_string()),
                ("user", args.user.clone()),
            ];
            if let Some(id) = &saved_id {
                extra.push(("saved", id.clone()));
            }
            print_records_header("score", &extra);
            for (category, score) in scores.ranked() {
                println!("S {} score={}", escape_record_value(category), fmt_score(score));
            }
            for suggestion in &careers {
                println!(
                    "C {} careers={}",
                    escape_record_value(&suggestion.category),
                    escape_record_value(&suggestion.careers)
                );
            }
        }
    )
}

fn career_bank(ctx: &CommandContext) -> Result<CareerBank> {
    match ctx.optional_store()? {
        Some(store) => store.career_bank(),
        None => CareerBank::builtin(),
    }
}

fn print_human(
    ctx: &CommandContext,
    kind: Questionnaire,
    scores: &CategoryScores,
    careers: &[CareerSuggestion],
    saved_id: Option<&str>,
) {
    if !ctx.cli.quiet {
        println!("{} scores", kind.as_str().to_uppercase());
    }
    for (category, score) in scores.ranked() {
        println!("  {:<20} {}", category, fmt_score(score));
    }

    if !careers.is_empty() {
        println!();
        println!("Top interests and careers:");
        for suggestion in careers {
            println!("  {}: {}", suggestion.category, suggestion.careers);
        }
    }

    if let Some(id) = saved_id {
        if !ctx.cli.quiet {
            println!();
            println!("Saved result {}", id);
        }
    }
}
