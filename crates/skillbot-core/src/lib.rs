//! SkillBot Core Library
//!
//! Career profiling engine: questionnaire scoring, transcript parsing and
//! weighted field recommendation, plus the store that persists results.

pub mod config;
pub mod db;
pub mod error;
pub mod format;
pub mod logging;
pub mod profile;
pub mod questionnaire;
pub mod recommend;
pub mod results;
pub mod store;
pub mod transcript;
