//! CLI commands for skillbot

pub mod dispatch;
pub mod fields;
pub mod format;
pub mod init;
pub mod input;
pub mod questions;
pub mod recommend;
pub mod score;
pub mod transcript;
