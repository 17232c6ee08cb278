//! Value parsers for clap arguments

use skillbot_core::format::OutputFormat;
use skillbot_core::questionnaire::Questionnaire;

pub fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>()
        .map_err(|_| format!("invalid format '{}' (expected human, json or records)", s))
}

pub fn parse_questionnaire(s: &str) -> Result<Questionnaire, String> {
    s.parse::<Questionnaire>()
        .map_err(|_| format!("unknown questionnaire '{}' (expected riasec or tci)", s))
}
