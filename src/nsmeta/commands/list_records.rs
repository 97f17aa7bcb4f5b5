use crate::commands::RecordList;
use crate::error::Result;
use crate::store::MetadataStore;

pub fn run<S: MetadataStore>(store: &S, env: &str) -> Result<RecordList> {
    let index = store.load_record_index(env)?;
    Ok(RecordList {
        environment: env.to_string(),
        records: index.keys().map(str::to_string).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::model::IndexEntry;
    use crate::store::memory::fixtures::StoreFixture;
    use serde_json::json;

    #[test]
    fn lists_keys_in_index_order() {
        let store = StoreFixture::new()
            .with_record("qa", "vendor", "vendor.json", json!({}))
            .with_record("qa", "customer", "customer.json", json!({}))
            .with_record("qa", "item", "item.json", json!({}))
            .store;

        let result = run(&store, "qa").unwrap();
        assert_eq!(result.environment, "qa");
        assert_eq!(result.records, vec!["vendor", "customer", "item"]);
    }

    #[test]
    fn does_not_open_record_files() {
        let store = StoreFixture::new()
            .with_dangling_entry("qa", "ghost", "ghost.json")
            .store;

        let result = run(&store, "qa").unwrap();
        assert_eq!(result.records, vec!["ghost"]);
    }

    #[test]
    fn entry_without_file_is_still_listed() {
        let mut store = StoreFixture::new().with_customer("qa").store;
        store.add_index_entry(
            "qa",
            IndexEntry {
                record_key: "draft".into(),
                file: None,
            },
        );

        let result = run(&store, "qa").unwrap();
        assert_eq!(result.records, vec!["customer", "draft"]);
    }

    #[test]
    fn empty_index_lists_nothing() {
        let store = StoreFixture::new().with_empty_index("qa").store;
        assert!(run(&store, "qa").unwrap().records.is_empty());
    }

    #[test]
    fn other_environments_are_separate() {
        let store = StoreFixture::new().with_customer("prod").store;
        let err = run(&store, "qa").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
