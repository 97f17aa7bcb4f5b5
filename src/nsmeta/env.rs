//! Environment resolution.
//!
//! An explicit name always wins and is not checked against the store; a bad
//! name surfaces later as a missing index. Without one, the store's
//! `active_env.json` marker decides.

use crate::config::ACTIVE_ENV_FILENAME;
use crate::error::{MetadataError, Result};
use crate::store::MetadataStore;

pub fn resolve_env<S: MetadataStore>(store: &S, explicit: Option<&str>) -> Result<String> {
    if let Some(env) = explicit.filter(|e| !e.is_empty()) {
        tracing::debug!(env, "using explicit environment");
        return Ok(env.to_string());
    }

    let marker = store.load_active_env()?.ok_or_else(|| {
        MetadataError::Config(format!(
            "Environment not specified and {} not found.",
            ACTIVE_ENV_FILENAME
        ))
    })?;

    match marker.active_env.filter(|e| !e.is_empty()) {
        Some(env) => {
            tracing::debug!(env = %env, "using active environment marker");
            Ok(env)
        }
        None => Err(MetadataError::Config(format!(
            "Environment not specified and {} does not name one.",
            ACTIVE_ENV_FILENAME
        ))),
    }
}
