use crate::commands::{FieldMatch, FieldSearch};
use crate::error::Result;
use crate::store::MetadataStore;

/// Every record whose `fields` mapping defines `field_id`, in index order.
///
/// Each indexed file is loaded once per entry; an entry whose file is
/// missing or malformed fails the whole search.
pub fn run<S: MetadataStore>(store: &S, env: &str, field_id: &str) -> Result<FieldSearch> {
    let index = store.load_record_index(env)?;
    let mut matches = Vec::new();

    for entry in &index.records {
        let record = store.load_record_file(env, entry.require_file()?)?;
        if let Some(definition) = record.fields().get(field_id) {
            matches.push(FieldMatch {
                record_key: entry.record_key.clone(),
                field_definition: definition.clone(),
            });
        }
    }

    tracing::debug!(
        env,
        field_id,
        scanned = index.records.len(),
        matched = matches.len(),
        "field search complete"
    );

    Ok(FieldSearch {
        environment: env.to_string(),
        field_id: field_id.to_string(),
        matches,
    })
}
