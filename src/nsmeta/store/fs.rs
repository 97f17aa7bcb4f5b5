use super::MetadataStore;
use crate::config::MetadataConfig;
use crate::error::{MetadataError, Result};
use crate::model::{ActiveEnvMarker, RecordDefinition, RecordIndex};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub struct FileStore {
    config: MetadataConfig,
}

impl FileStore {
    pub fn new(config: MetadataConfig) -> Self {
        Self { config }
    }
}

/// Read and parse a JSON document, failing with `NotFound` when the path
/// does not exist.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(MetadataError::NotFound(path.to_path_buf()));
    }
    tracing::debug!(path = %path.display(), "loading metadata file");
    let content = fs::read_to_string(path).map_err(MetadataError::Io)?;
    serde_json::from_str(&content).map_err(|source| MetadataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl MetadataStore for FileStore {
    fn load_active_env(&self) -> Result<Option<ActiveEnvMarker>> {
        let path = self.config.active_env_path();
        if !path.exists() {
            return Ok(None);
        }
        load_json(&path).map(Some)
    }

    fn load_record_index(&self, env: &str) -> Result<RecordIndex> {
        load_json(&self.config.record_index_path(env))
    }

    fn load_record_file(&self, env: &str, file: &str) -> Result<RecordDefinition> {
        load_json(&self.config.record_path(env, file))
    }
}
