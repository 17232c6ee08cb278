//! Store management for skillbot
//!
//! The store is the directory holding configuration and saved results.
//! Default location: `.skillbot/`

pub mod paths;

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{resolve, StoreConfig};
use crate::db::Database;
use crate::error::{Result, SkillbotError};
use crate::questionnaire::{CareerBank, QuestionBank, Questionnaire};
use crate::recommend::WeightTable;
use paths::{CONFIG_FILE, DEFAULT_STORE_DIR};

/// The skillbot store
#[derive(Debug)]
pub struct Store {
    /// Root path of the store
    root: PathBuf,
    /// Store configuration
    config: StoreConfig,
    /// SQLite database
    db: Database,
}

impl Store {
    /// Discover a store by walking up from the given root directory
    pub fn discover(root: &Path) -> Result<Self> {
        let store_path = paths::discover_store(root)?;
        Self::open(&store_path)
    }

    /// Open an existing store at the given path
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            return Err(SkillbotError::StoreNotFound {
                search_root: path.to_path_buf(),
            });
        }

        let config_path = path.join(CONFIG_FILE);
        let config = if config_path.exists() {
            StoreConfig::load(&config_path)?
        } else {
            StoreConfig::default()
        };

        let db = Database::open(path)?;

        Ok(Store {
            root: path.to_path_buf(),
            config,
            db,
        })
    }

    /// Initialize a new store under the given project root
    pub fn init(project_root: &Path) -> Result<Self> {
        Self::init_at(&project_root.join(DEFAULT_STORE_DIR))
    }

    /// Initialize a store at an explicit path. Existing configuration is
    /// left untouched.
    pub fn init_at(store_root: &Path) -> Result<Self> {
        fs::create_dir_all(store_root)
            .map_err(|e| SkillbotError::io_operation("create store", store_root.display(), e))?;

        let config_path = store_root.join(CONFIG_FILE);
        if !config_path.exists() {
            StoreConfig::default().save(&config_path)?;
        }

        tracing::info!(path = %store_root.display(), "initialized store");
        Self::open(store_root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    /// Configured question bank, or the built-in one
    pub fn question_bank(&self, kind: Questionnaire) -> Result<QuestionBank> {
        let configured = match kind {
            Questionnaire::Riasec => self.config.riasec_bank.as_deref(),
            Questionnaire::Tci => self.config.tci_bank.as_deref(),
        };
        match configured {
            Some(path) => QuestionBank::from_path(kind, &resolve(&self.root, path)),
            None => QuestionBank::builtin(kind),
        }
    }

    /// Configured career bank, or the built-in one
    pub fn career_bank(&self) -> Result<CareerBank> {
        match self.config.careers.as_deref() {
            Some(path) => CareerBank::from_path(&resolve(&self.root, path)),
            None => CareerBank::builtin(),
        }
    }

    /// Configured weight table, or the built-in one
    pub fn weight_table(&self) -> Result<WeightTable> {
        match self.config.weights.as_deref() {
            Some(path) => WeightTable::load(&resolve(&self.root, path)),
            None => Ok(WeightTable::default()),
        }
    }
}
