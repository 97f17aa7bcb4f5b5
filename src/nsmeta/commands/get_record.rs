use crate::error::Result;
use crate::store::MetadataStore;
use serde_json::Value;

/// The record definition exactly as stored.
pub fn run<S: MetadataStore>(store: &S, env: &str, record_key: &str) -> Result<Value> {
    Ok(store.load_record(env, record_key)?.into_value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::store::memory::fixtures::StoreFixture;
    use serde_json::json;

    #[test]
    fn returns_document_verbatim() {
        let doc = json!({
            "fields": {"email": {"suiteql_column": "EMAIL", "custom": [1, 2]}},
            "primary_table": {"suiteql_table": "CUSTOMER"},
            "label": "Customer",
            "extra": null
        });
        let store = StoreFixture::new()
            .with_record("qa", "customer", "customer.json", doc.clone())
            .store;

        assert_eq!(run(&store, "qa", "customer").unwrap(), doc);
    }

    #[test]
    fn large_integers_are_not_rounded() {
        let doc: Value =
            serde_json::from_str(r#"{"fields":{},"internal":12345678901234567890123}"#).unwrap();
        let store = StoreFixture::new()
            .with_record("qa", "customer", "customer.json", doc)
            .store;

        let out = serde_json::to_string(&run(&store, "qa", "customer").unwrap()).unwrap();
        assert_eq!(out, r#"{"fields":{},"internal":12345678901234567890123}"#);
    }

    #[test]
    fn unknown_key_is_lookup_error() {
        let store = StoreFixture::new().with_customer("qa").store;
        let err = run(&store, "qa", "salesorder").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lookup);
        assert_eq!(err.to_string(), "Record 'salesorder' not found in index.");
    }

    #[test]
    fn non_object_document_is_parse_error() {
        let store = StoreFixture::new()
            .with_record("qa", "broken", "broken.json", json!([1, 2, 3]))
            .store;
        let err = run(&store, "qa", "broken").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }
}
