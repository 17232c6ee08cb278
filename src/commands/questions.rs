//! `skillbot questions` command - list a questionnaire

use serde_json::json;

use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_json, print_records_header};
use crate::output_by_format_result;
use skillbot_core::error::Result;
use skillbot_core::format::escape_record_value;
use skillbot_core::questionnaire::{QuestionBank, Questionnaire};

/// Load the question bank for `kind`, from the store when one exists
pub fn load_bank(ctx: &CommandContext, kind: Questionnaire) -> Result<QuestionBank> {
    match ctx.optional_store()? {
        Some(store) => store.question_bank(kind),
        None => QuestionBank::builtin(kind),
    }
}

/// Execute the questions command
pub fn execute(ctx: &CommandContext, kind: Questionnaire) -> Result<()> {
    let bank = load_bank(ctx, kind)?;
    let scale = kind.scale();
    let choices = scale.choices();

    output_by_format_result!(ctx.cli.format,
        json => {
            print_json(&json!({
                "questionnaire": kind,
                "choices": choices,
                "questions": bank.questions(),
            }))
        },
        human => {
            if !ctx.cli.quiet {
                println!("{} ({} questions)", kind.as_str().to_uppercase(), bank.len());
                println!("Answer with one of: {}", choices.join(", "));
                println!();
            }
            for (index, question) in bank.questions().iter().enumerate() {
                println!("{:>3}. [{}] {}", index + 1, question.category, question.text);
            }
        },
        records => {
            print_records_header(
                "questions",
                &[
                    ("questionnaire", kind.to_string()),
                    ("count", bank.len().to_string()),
                ],
            );
            for question in bank.questions() {
                println!(
                    "Q {} category={} text={}",
                    question.id,
                    escape_record_value(&question.category),
                    escape_record_value(&question.text)
                );
            }
        }
    )
}
