use super::MetadataStore;
use crate::config::MetadataConfig;
use crate::error::{MetadataError, Result};
use crate::model::{ActiveEnvMarker, IndexEntry, RecordDefinition, RecordIndex};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Default)]
struct EnvData {
    index: Option<RecordIndex>,
    files: HashMap<String, Value>,
}

/// Holds metadata documents in memory. Missing documents report the paths
/// they would have under the default layout.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    layout: MetadataConfig,
    active_env: Option<ActiveEnvMarker>,
    envs: HashMap<String, EnvData>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_active_env(&mut self, marker: ActiveEnvMarker) {
        self.active_env = Some(marker);
    }

    /// Create an empty index for `env` if it has none yet.
    pub fn ensure_index(&mut self, env: &str) {
        self.envs
            .entry(env.to_string())
            .or_default()
            .index
            .get_or_insert_with(RecordIndex::default);
    }

    pub fn add_index_entry(&mut self, env: &str, entry: IndexEntry) {
        self.ensure_index(env);
        if let Some(index) = self.envs.get_mut(env).and_then(|e| e.index.as_mut()) {
            index.records.push(entry);
        }
    }

    pub fn put_file(&mut self, env: &str, file: &str, document: Value) {
        self.envs
            .entry(env.to_string())
            .or_default()
            .files
            .insert(file.to_string(), document);
    }
}

impl MetadataStore for InMemoryStore {
    fn load_active_env(&self) -> Result<Option<ActiveEnvMarker>> {
        Ok(self.active_env.clone())
    }

    fn load_record_index(&self, env: &str) -> Result<RecordIndex> {
        self.envs
            .get(env)
            .and_then(|e| e.index.clone())
            .ok_or_else(|| MetadataError::NotFound(self.layout.record_index_path(env)))
    }

    fn load_record_file(&self, env: &str, file: &str) -> Result<RecordDefinition> {
        let path = self.layout.record_path(env, file);
        let doc = self
            .envs
            .get(env)
            .and_then(|e| e.files.get(file))
            .cloned()
            .ok_or_else(|| MetadataError::NotFound(path.clone()))?;
        serde_json::from_value(doc).map_err(|source| MetadataError::Parse { path, source })
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_active_env(mut self, env: &str) -> Self {
            self.store.set_active_env(ActiveEnvMarker {
                active_env: Some(env.to_string()),
            });
            self
        }

        pub fn with_empty_index(mut self, env: &str) -> Self {
            self.store.ensure_index(env);
            self
        }

        /// Add an index entry and its definition file.
        pub fn with_record(mut self, env: &str, record_key: &str, file: &str, doc: Value) -> Self {
            self.store.add_index_entry(env, IndexEntry::new(record_key, file));
            self.store.put_file(env, file, doc);
            self
        }

        /// Add an index entry whose file does not exist.
        pub fn with_dangling_entry(mut self, env: &str, record_key: &str, file: &str) -> Self {
            self.store.add_index_entry(env, IndexEntry::new(record_key, file));
            self
        }

        /// The customer record used throughout the command tests.
        pub fn with_customer(self, env: &str) -> Self {
            self.with_record(
                env,
                "customer",
                "customer.json",
                serde_json::json!({
                    "fields": {
                        "email": {"suiteql_column": "EMAIL", "label": "Email"},
                        "companyname": {"suiteql_column": "COMPANYNAME"},
                        "custentity_notes": {"label": "Notes"}
                    },
                    "primary_table": {
                        "suiteql_table": "CUSTOMER",
                        "suiteql_type_filter": "person"
                    }
                }),
            )
        }
    }
}
