//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::paths::resolve_against;
use crate::cli::Cli;
use skillbot_core::error::{Result, SkillbotError};
use skillbot_core::store::Store;

/// Discover or open a store based on CLI configuration
pub fn discover_or_open_store(cli: &Cli, root: &Path) -> Result<Store> {
    if let Some(path) = &cli.store {
        Store::open(&resolve_against(root, path))
    } else {
        Store::discover(root)
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    pub fn discover_or_open_store(&self) -> Result<Store> {
        discover_or_open_store(self.cli, self.root)
    }

    /// Like [`Self::discover_or_open_store`], but a store that cannot be
    /// discovered is not an error. An explicit `--store` must exist.
    pub fn optional_store(&self) -> Result<Option<Store>> {
        match self.discover_or_open_store() {
            Ok(store) => Ok(Some(store)),
            Err(SkillbotError::StoreNotFound { .. }) if self.cli.store.is_none() => {
                tracing::debug!("no store found, using built-in data");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("skillbot {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Career and personality profiler.");
        println!();
        println!("Run `skillbot --help` for usage information.");
        Ok(())
    }
}
