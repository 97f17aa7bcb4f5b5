//! # Storage Layer
//!
//! Read access to an exported metadata snapshot. The [`MetadataStore`] trait
//! lets commands run against the filesystem in production and against memory
//! in unit tests.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: the on-disk export rooted at a configured base directory
//! - [`memory::InMemoryStore`]: in-memory documents for tests
//!
//! ## Storage Format
//!
//! ```text
//! .netsuite-metadata/
//! ├── active_env.json            # { "active_env": "qa" }
//! ├── qa/
//! │   ├── record_index.json      # { "records": [ { "record_key", "file" } ] }
//! │   └── customer.json          # { "fields": {...}, "primary_table": {...} }
//! └── prod/
//!     └── ...
//! ```
//!
//! Nothing is cached: every call goes back to the backing documents, and the
//! store never writes.

use crate::error::{MetadataError, Result};
use crate::model::{ActiveEnvMarker, RecordDefinition, RecordIndex};

pub mod fs;
pub mod memory;

pub trait MetadataStore {
    /// Load the active-environment marker. `Ok(None)` when there is none.
    fn load_active_env(&self) -> Result<Option<ActiveEnvMarker>>;

    /// Load `<env>/record_index.json`.
    fn load_record_index(&self, env: &str) -> Result<RecordIndex>;

    /// Load a record definition by its index-relative file path.
    fn load_record_file(&self, env: &str, file: &str) -> Result<RecordDefinition>;

    /// Look up `record_key` in the index and load its definition.
    ///
    /// Linear scan; the first entry with a matching key wins.
    fn load_record(&self, env: &str, record_key: &str) -> Result<RecordDefinition> {
        let index = self.load_record_index(env)?;

        let duplicates = index.duplicate_keys();
        if duplicates.contains(&record_key) {
            tracing::warn!(
                env,
                record_key,
                "record key appears more than once in index; using first entry"
            );
        }

        let entry = index.find(record_key).ok_or_else(|| {
            MetadataError::Lookup(format!("Record '{}' not found in index.", record_key))
        })?;
        self.load_record_file(env, entry.require_file()?)
    }
}
