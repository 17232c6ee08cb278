//! Error types and exit codes for skillbot
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (bad answers, unusable transcript, missing store)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the skillbot CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid answers, degenerate input, missing store (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<rusqlite::Error> for SkillbotError {
    fn from(err: rusqlite::Error) -> Self {
        SkillbotError::Other(err.to_string())
    }
}

/// Errors that can occur while scoring, parsing or recommending
#[derive(Error, Debug)]
pub enum SkillbotError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("{stage}: expected {questions} answers, got {answers}")]
    InputLengthMismatch {
        stage: String,
        questions: usize,
        answers: usize,
    },

    #[error("{stage}: unrecognized answer {value:?} for question {question_id} (position {index})")]
    UnrecognizedAnswerValue {
        stage: String,
        index: usize,
        question_id: String,
        value: String,
    },

    #[error("insufficient data: every field scored zero, no recommendation can be made")]
    DegenerateRecommendation,

    #[error("no marks could be parsed from the transcript ({fragments} fragments)")]
    NoMarksParsed { fragments: usize },

    #[error("store not found (searched from {search_root:?})")]
    StoreNotFound { search_root: PathBuf },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl SkillbotError {
    /// Create an error for a failed database operation
    pub fn db_operation(operation: &str, error: impl std::fmt::Display) -> Self {
        SkillbotError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a failed IO operation with the path involved
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        SkillbotError::FailedOperation {
            operation: format!("{} {}", operation, path),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        SkillbotError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        SkillbotError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SkillbotError::UnknownFormat(_)
            | SkillbotError::UsageError(_)
            | SkillbotError::InvalidValue { .. } => ExitCode::Usage,

            SkillbotError::InputLengthMismatch { .. }
            | SkillbotError::UnrecognizedAnswerValue { .. }
            | SkillbotError::DegenerateRecommendation
            | SkillbotError::NoMarksParsed { .. }
            | SkillbotError::StoreNotFound { .. }
            | SkillbotError::NotFound { .. } => ExitCode::Data,

            SkillbotError::Io(_)
            | SkillbotError::Json(_)
            | SkillbotError::Toml(_)
            | SkillbotError::Csv(_)
            | SkillbotError::FailedOperation { .. }
            | SkillbotError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            SkillbotError::UnknownFormat(_) => "unknown_format",
            SkillbotError::UsageError(_) => "usage_error",
            SkillbotError::InvalidValue { .. } => "invalid_value",
            SkillbotError::InputLengthMismatch { .. } => "input_length_mismatch",
            SkillbotError::UnrecognizedAnswerValue { .. } => "unrecognized_answer_value",
            SkillbotError::DegenerateRecommendation => "degenerate_recommendation",
            SkillbotError::NoMarksParsed { .. } => "no_marks_parsed",
            SkillbotError::StoreNotFound { .. } => "store_not_found",
            SkillbotError::NotFound { .. } => "not_found",
            SkillbotError::Io(_) => "io_error",
            SkillbotError::Json(_) => "json_error",
            SkillbotError::Toml(_) => "toml_error",
            SkillbotError::Csv(_) => "csv_error",
            SkillbotError::FailedOperation { .. } => "failed_operation",
            SkillbotError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for skillbot operations
pub type Result<T> = std::result::Result<T, SkillbotError>;
