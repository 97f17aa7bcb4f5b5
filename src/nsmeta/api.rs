//! # API Facade
//!
//! Single entry point for every query, whatever the UI. It resolves the
//! environment, dispatches to `commands/*`, and wraps the outcome in
//! [`CmdResult`]. No business logic and no I/O formatting live here.
//!
//! `MetadataApi<S: MetadataStore>` is generic over the store:
//! - Production: `MetadataApi<FileStore>`
//! - Testing: `MetadataApi<InMemoryStore>`

use crate::commands;
use crate::env::resolve_env;
use crate::error::Result;
use crate::store::MetadataStore;

pub struct MetadataApi<S: MetadataStore> {
    store: S,
    env_override: Option<String>,
}

impl<S: MetadataStore> MetadataApi<S> {
    pub fn new(store: S, env_override: Option<String>) -> Self {
        Self {
            store,
            env_override,
        }
    }

    /// The environment queries will run against.
    pub fn environment(&self) -> Result<String> {
        resolve_env(&self.store, self.env_override.as_deref())
    }

    pub fn list_records(&self) -> Result<CmdResult> {
        let env = self.environment()?;
        commands::list_records::run(&self.store, &env).map(CmdResult::Records)
    }

    pub fn get_record(&self, record_key: &str) -> Result<CmdResult> {
        let env = self.environment()?;
        commands::get_record::run(&self.store, &env, record_key).map(CmdResult::Record)
    }

    pub fn list_fields(&self, record_key: &str) -> Result<CmdResult> {
        let env = self.environment()?;
        commands::list_fields::run(&self.store, &env, record_key).map(CmdResult::Fields)
    }

    pub fn find_field(&self, field_id: &str) -> Result<CmdResult> {
        let env = self.environment()?;
        commands::find_field::run(&self.store, &env, field_id).map(CmdResult::FieldSearch)
    }

    /// `fields` is the raw comma-separated list from the user.
    pub fn suggest_suiteql(&self, record_key: &str, fields: &str) -> Result<CmdResult> {
        let env = self.environment()?;
        let fields = commands::suggest_suiteql::parse_field_list(fields);
        commands::suggest_suiteql::run(&self.store, &env, record_key, &fields)
            .map(CmdResult::SuiteQl)
    }
}

pub use commands::{
    CmdResult, FieldList, FieldMatch, FieldSearch, RecordList, SuiteQlSuggestion,
};
