use crate::error::{Result, SkillbotError};
use std::path::{Path, PathBuf};

/// Default store directory name (hidden)
pub const DEFAULT_STORE_DIR: &str = ".skillbot";

/// Configuration filename
pub const CONFIG_FILE: &str = "config.toml";

/// Walk up from `root` until a store directory is found
pub fn discover_store(root: &Path) -> Result<PathBuf> {
    let mut current = root.to_path_buf();

    loop {
        let store_path = current.join(DEFAULT_STORE_DIR);
        if store_path.is_dir() {
            return Ok(store_path);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(SkillbotError::StoreNotFound {
                    search_root: root.to_path_buf(),
                });
            }
        }
    }
}
