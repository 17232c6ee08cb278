//! `skillbot recommend` command - rank fields for a student
//!
//! Inputs come from files when given, otherwise from the user's saved
//! result and marks in the store.

use std::path::Path;

use serde_json::json;

use crate::cli::RecommendArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{fmt_score, print_json, print_records_header};
use crate::commands::input::read_input;
use crate::commands::questions::load_bank;
use crate::commands::transcript::load_rows;
use crate::output_by_format_result;
use skillbot_core::bail_usage;
use skillbot_core::error::{Result, SkillbotError};
use skillbot_core::format::escape_record_value;
use skillbot_core::profile::Profile;
use skillbot_core::questionnaire::{AnswerSheet, CategoryScores, Questionnaire};
use skillbot_core::recommend::{Recommendation, TraitScores, WeightTable};
use skillbot_core::store::Store;

/// Execute the recommend command
pub fn execute(ctx: &CommandContext, args: &RecommendArgs) -> Result<()> {
    let from_stdin = [&args.riasec, &args.tci, &args.transcript]
        .into_iter()
        .flatten()
        .filter(|path| path.as_os_str() == "-")
        .count();
    if from_stdin > 1 {
        bail_usage!("only one of --riasec, --tci and --transcript can read from stdin");
    }

    let store = ctx.optional_store()?;

    let traits = gather_traits(ctx, args, store.as_ref())?;
    let rows = match (&args.transcript, &store) {
        (Some(path), _) => load_rows(ctx, path)?,
        (None, Some(store)) => store.db().load_marks(&args.user)?,
        (None, None) => Vec::new(),
    };

    let table = match &store {
        Some(store) => store.weight_table()?,
        None => WeightTable::default(),
    };

    let profile = Profile::from_traits(traits, &rows);
    let recommendation = profile.recommend(&table)?;

    output_by_format_result!(ctx.cli.format,
        json => {
            print_json(&json!({
                "user": args.user,
                "subjects": profile.subjects,
                "traits": profile.traits,
                "recommendation": recommendation,
            }))
        },
        human => { print_human(ctx, &recommendation); },
        records => {
            print_records_header(
                "recommend",
                &[
                    ("user", args.user.clone()),
                    ("weights", recommendation.weights_version.to_string()),
                    ("top", recommendation.top_field.name().to_string()),
                ],
            );
            for field in &recommendation.fields {
                println!(
                    "F {} score={:.4} probability={:.4}",
                    escape_record_value(field.field.name()),
                    field.score,
                    field.probability
                );
            }
            for subfield in &recommendation.subfields {
                println!("U {}", escape_record_value(subfield));
            }
        }
    )
}

/// Merge questionnaire traits from answer files and the saved result.
/// A questionnaire given as a file replaces the saved values for it.
fn gather_traits(
    ctx: &CommandContext,
    args: &RecommendArgs,
    store: Option<&Store>,
) -> Result<TraitScores> {
    let needs_saved = args.riasec.is_none() || args.tci.is_none();
    let saved = match store {
        Some(store) if needs_saved => store.db().latest_result(&args.user)?,
        _ => None,
    };

    let mut traits = match saved {
        Some(record) => record.to_trait_scores(),
        None if args.riasec.is_none() && args.tci.is_none() => {
            return Err(SkillbotError::not_found(
                "saved result for user",
                &args.user,
            ));
        }
        None => {
            if needs_saved {
                tracing::warn!(user = %args.user, "no saved result, missing questionnaire scores as 0");
            }
            TraitScores::new()
        }
    };

    for (kind, path) in [
        (Questionnaire::Riasec, &args.riasec),
        (Questionnaire::Tci, &args.tci),
    ] {
        if let Some(path) = path {
            traits.replace(kind, &score_file(ctx, kind, path)?);
        }
    }
    Ok(traits)
}

fn score_file(ctx: &CommandContext, kind: Questionnaire, path: &Path) -> Result<CategoryScores> {
    let bank = load_bank(ctx, kind)?;
    AnswerSheet::parse(&read_input(ctx.root, path)?)?.score(&bank)
}

fn print_human(ctx: &CommandContext, recommendation: &Recommendation) {
    if !ctx.cli.quiet {
        println!("Field fit");
    }
    for field in &recommendation.fields {
        println!(
            "  {:<18} {:>6.1}%  (score {})",
            field.field.name(),
            field.probability * 100.0,
            fmt_score(field.score)
        );
    }
    println!();
    println!("Recommended: {}", recommendation.top_field.name());
    println!("Subfields: {}", recommendation.subfields.join(", "));
}
