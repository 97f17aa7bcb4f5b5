use crate::commands::FieldList;
use crate::error::Result;
use crate::store::MetadataStore;

pub fn run<S: MetadataStore>(store: &S, env: &str, record_key: &str) -> Result<FieldList> {
    let record = store.load_record(env, record_key)?;
    Ok(FieldList {
        environment: env.to_string(),
        record_key: record_key.to_string(),
        fields: record.fields().ids(),
    })
}
