//! Command implementations for all skillbot commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{fields, init, questions, recommend, score, transcript};
use skillbot_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Init => init::execute(ctx),
            Commands::Questions { questionnaire } => questions::execute(ctx, *questionnaire),
            Commands::Score(args) => score::execute(ctx, args),
            Commands::Transcript(args) => transcript::execute(ctx, args),
            Commands::Recommend(args) => recommend::execute(ctx, args),
            Commands::Fields => fields::execute(ctx),
        };
        tracing::debug!(elapsed = ?ctx.start.elapsed(), "command_complete");
        result
    }
}
