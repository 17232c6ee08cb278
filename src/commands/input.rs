//! Reading command input files

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::cli::paths::resolve_against;
use skillbot_core::error::{Result, SkillbotError};

/// Read a file relative to `root`, or stdin when `path` is `-`
pub fn read_input(root: &Path, path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| SkillbotError::io_operation("read", "stdin", e))?;
        return Ok(content);
    }

    let resolved = resolve_against(root, path);
    if !resolved.is_file() {
        return Err(SkillbotError::not_found("input file", resolved.display()));
    }
    fs::read_to_string(&resolved)
        .map_err(|e| SkillbotError::io_operation("read", resolved.display(), e))
}
