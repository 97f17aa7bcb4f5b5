//! # Configuration
//!
//! The only setting is where the exported metadata lives. It is carried as an
//! explicit value into [`FileStore`](crate::store::fs::FileStore) rather than
//! read from process-wide state, so tests can point it at a temp directory.
//!
//! Resolution order (highest first):
//! 1. `--metadata-dir <path>` on the command line
//! 2. `NSMETA_METADATA_DIR` in the environment
//! 3. `.netsuite-metadata` relative to the working directory
//!
//! Flag and variable are both handled by clap; this module only supplies the
//! default and the file names inside the base directory.

use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_DIR: &str = ".netsuite-metadata";
pub const BASE_DIR_ENV_VAR: &str = "NSMETA_METADATA_DIR";
pub const ACTIVE_ENV_FILENAME: &str = "active_env.json";
pub const RECORD_INDEX_FILENAME: &str = "record_index.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataConfig {
    pub base_dir: PathBuf,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
        }
    }
}

impl MetadataConfig {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Use `override_dir` when given, the default layout otherwise.
    pub fn resolve(override_dir: Option<PathBuf>) -> Self {
        override_dir.map(Self::new).unwrap_or_default()
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn active_env_path(&self) -> PathBuf {
        self.base_dir.join(ACTIVE_ENV_FILENAME)
    }

    pub fn env_dir(&self, env: &str) -> PathBuf {
        self.base_dir.join(env)
    }

    pub fn record_index_path(&self, env: &str) -> PathBuf {
        self.env_dir(env).join(RECORD_INDEX_FILENAME)
    }

    pub fn record_path(&self, env: &str, file: &str) -> PathBuf {
        self.env_dir(env).join(file)
    }
}
