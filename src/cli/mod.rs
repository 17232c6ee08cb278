//! CLI argument parsing for skillbot
//!
//! Global flags: --root, --store, --format, --quiet, --verbose, plus the
//! logging controls --log-level and --log-json.

pub mod format;
pub mod parse;
pub mod paths;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use parse::{parse_output_format, parse_questionnaire};
pub use skillbot_core::format::OutputFormat;
use skillbot_core::questionnaire::Questionnaire;

/// Default user id when --user is not given
pub const DEFAULT_USER: &str = "default";

/// SkillBot - career and personality profiler
#[derive(Parser, Debug)]
#[command(name = "skillbot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving the store
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit store root path
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (error, warn, info, debug, trace) or a full directive
    #[arg(long, global = true, env = "SKILLBOT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new skillbot store
    Init,

    /// Print a questionnaire's questions and answer choices
    Questions {
        /// Questionnaire (riasec or tci)
        #[arg(value_parser = parse_questionnaire)]
        questionnaire: Questionnaire,
    },

    /// Score a questionnaire from an answer file
    Score(ScoreArgs),

    /// Parse OCR transcript fragments into marks
    Transcript(TranscriptArgs),

    /// Rank academic fields for a student
    Recommend(RecommendArgs),

    /// Show the field catalog and weight table
    Fields,
}

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Questionnaire (riasec or tci)
    #[arg(value_parser = parse_questionnaire)]
    pub questionnaire: Questionnaire,

    /// Answer file: JSON array of labels or one label per line ("-" for stdin)
    pub answers: PathBuf,

    /// User the result belongs to
    #[arg(long, default_value = DEFAULT_USER)]
    pub user: String,

    /// Save the scores to the store
    #[arg(long)]
    pub save: bool,
}

#[derive(Args, Debug)]
pub struct TranscriptArgs {
    /// OCR output (JSON in a supported shape) or plain text, one fragment per line ("-" for stdin)
    pub fragments: PathBuf,

    /// User the marks belong to
    #[arg(long, default_value = DEFAULT_USER)]
    pub user: String,

    /// Save the parsed marks to the store
    #[arg(long)]
    pub save: bool,
}

#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// RIASEC answer file (otherwise the user's saved result)
    #[arg(long)]
    pub riasec: Option<PathBuf>,

    /// TCI answer file (otherwise the user's saved result)
    #[arg(long)]
    pub tci: Option<PathBuf>,

    /// Transcript fragments file (otherwise the user's saved marks)
    #[arg(long)]
    pub transcript: Option<PathBuf>,

    /// User whose saved data fills in missing inputs
    #[arg(long, default_value = DEFAULT_USER)]
    pub user: String,
}
