//! `skillbot init` command - create a new store
//!
//! Idempotent: an existing configuration is left as it is.

use crate::cli::paths::resolve_against;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::print_records_header;
use crate::output_by_format_result;
use skillbot_core::error::Result;
use skillbot_core::store::Store;

/// Execute the init command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let cli = ctx.cli;
    let store = match cli.store.as_ref() {
        Some(path) => Store::init_at(&resolve_against(ctx.root, path))?,
        None => Store::init(ctx.root)?,
    };

    output_by_format_result!(cli.format,
        json => {
            let output = serde_json::json!({
                "status": "ok",
                "store": store.root().display().to_string(),
                "message": "Store initialized"
            });
            crate::commands::format::print_json(&output)
        },
        human => {
            if !cli.quiet {
                println!("Initialized skillbot store at {}", store.root().display());
            }
        },
        records => {
            print_records_header(
                "init",
                &[
                    ("store", store.root().display().to_string()),
                    ("status", "ok".to_string()),
                ],
            );
        }
    )
}
