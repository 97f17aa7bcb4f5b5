use crate::commands::SuiteQlSuggestion;
use crate::error::{MetadataError, Result};
use crate::model::{QueryText, RecordDefinition};
use crate::store::MetadataStore;
use std::borrow::Cow;

/// Split a `--fields` value on commas. Segments are taken as-is: no
/// trimming, no de-duplication, empty segments kept.
pub fn parse_field_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

pub fn run<S: MetadataStore, F: AsRef<str>>(
    store: &S,
    env: &str,
    record_key: &str,
    fields: &[F],
) -> Result<SuiteQlSuggestion> {
    let record = store.load_record(env, record_key)?;
    let suiteql = build_query(&record, record_key, fields)?;
    Ok(SuiteQlSuggestion {
        environment: env.to_string(),
        record_key: record_key.to_string(),
        suiteql,
    })
}

/// Assemble `SELECT <cols> FROM <table>[ WHERE type = '<filter>']`.
///
/// Columns follow the requested order. The first unknown or unmapped field
/// aborts. The type filter is interpolated without escaping.
pub fn build_query<F: AsRef<str>>(
    record: &RecordDefinition,
    record_key: &str,
    requested: &[F],
) -> Result<String> {
    let primary = record.primary_table();
    let table = required(
        primary.suiteql_table(),
        || format!("No SuiteQL table defined for {}", record_key),
        || format!("SuiteQL table for {}", record_key),
    )?;

    let fields = record.fields();
    let columns = requested
        .iter()
        .map(|f| {
            let f = f.as_ref();
            if !fields.contains(f) {
                return Err(MetadataError::Lookup(format!(
                    "Field '{}' not found on {}",
                    f, record_key
                )));
            }
            required(
                fields.suiteql_column(f),
                || format!("No SuiteQL column mapping for field '{}'", f),
                || format!("SuiteQL column for field '{}'", f),
            )
        })
        .collect::<Result<Vec<_>>>()?;

    let mut query = format!("SELECT {} FROM {}", columns.join(", "), table);
    match primary.suiteql_type_filter() {
        QueryText::Text(type_filter) => {
            query.push_str(&format!(" WHERE type = '{}'", type_filter));
        }
        QueryText::Absent => {}
        QueryText::Invalid(value) => {
            let what = format!("SuiteQL type filter for {}", record_key);
            return Err(invalid(&what, value));
        }
    }
    Ok(query)
}

fn required<'a>(
    text: QueryText<'a>,
    missing: impl FnOnce() -> String,
    what: impl FnOnce() -> String,
) -> Result<Cow<'a, str>> {
    match text {
        QueryText::Text(t) => Ok(t),
        QueryText::Absent => Err(MetadataError::Lookup(missing())),
        QueryText::Invalid(value) => Err(invalid(&what(), value)),
    }
}

fn invalid(what: &str, value: &serde_json::Value) -> MetadataError {
    MetadataError::Lookup(format!("{} is not a name or number: {}", what, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::store::memory::fixtures::StoreFixture;
    use serde_json::json;

    #[test]
    fn single_column_without_filter() {
        let store = StoreFixture::new()
            .with_record(
                "qa",
                "thing",
                "thing.json",
                json!({"fields": {"f": {"suiteql_column": "c"}}, "primary_table": {"suiteql_table": "t"}}),
            )
            .store;
        let result = run(&store, "qa", "thing", &["f"]).unwrap();
        assert_eq!(result.suiteql, "SELECT c FROM t");
    }

    #[test]
    fn customer_with_type_filter() {
        let store = StoreFixture::new().with_customer("qa").store;
        let result = run(&store, "qa", "customer", &["email"]).unwrap();
        assert_eq!(
            result,
            SuiteQlSuggestion {
                environment: "qa".into(),
                record_key: "customer".into(),
                suiteql: "SELECT EMAIL FROM CUSTOMER WHERE type = 'person'".into(),
            }
        );
    }

    #[test]
    fn columns_follow_requested_order_with_duplicates() {
        let store = StoreFixture::new().with_customer("qa").store;
        let fields = parse_field_list("companyname,email,companyname");
        let result = run(&store, "qa", "customer", &fields).unwrap();
        assert_eq!(
            result.suiteql,
            "SELECT COMPANYNAME, EMAIL, COMPANYNAME FROM CUSTOMER WHERE type = 'person'"
        );
    }

    #[test]
    fn first_unknown_field_aborts() {
        let store = StoreFixture::new().with_customer("qa").store;
        let err = run(&store, "qa", "customer", &["email", "phone", "fax"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lookup);
        assert_eq!(err.to_string(), "Field 'phone' not found on customer");
    }

    #[test]
    fn unmapped_field_is_rejected() {
        let store = StoreFixture::new().with_customer("qa").store;
        let err = run(&store, "qa", "customer", &["custentity_notes"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "No SuiteQL column mapping for field 'custentity_notes'"
        );
    }

    #[test]
    fn missing_table_is_rejected_before_fields() {
        let store = StoreFixture::new()
            .with_record("qa", "note", "note.json", json!({"fields": {}}))
            .store;
        let err = run(&store, "qa", "note", &["nope"]).unwrap_err();
        assert_eq!(err.to_string(), "No SuiteQL table defined for note");
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        let store = StoreFixture::new().with_customer("qa").store;
        let fields = parse_field_list("email, companyname");
        assert_eq!(fields, vec!["email", " companyname"]);
        let err = run(&store, "qa", "customer", &fields).unwrap_err();
        assert_eq!(err.to_string(), "Field ' companyname' not found on customer");
    }

    #[test]
    fn type_filter_is_not_escaped() {
        let record: RecordDefinition = serde_json::from_value(json!({
            "fields": {"id": {"suiteql_column": "ID"}},
            "primary_table": {"suiteql_table": "T", "suiteql_type_filter": "o'brien"}
        }))
        .unwrap();
        assert_eq!(
            build_query(&record, "t", &["id"]).unwrap(),
            "SELECT ID FROM T WHERE type = 'o'brien'"
        );
    }

    #[test]
    fn numeric_type_filter_is_kept() {
        let store = StoreFixture::new()
            .with_record(
                "qa",
                "thing",
                "thing.json",
                json!({
                    "fields": {"id": {"suiteql_column": "ID"}},
                    "primary_table": {"suiteql_table": "T", "suiteql_type_filter": 7}
                }),
            )
            .store;
        let result = run(&store, "qa", "thing", &["id"]).unwrap();
        assert_eq!(result.suiteql, "SELECT ID FROM T WHERE type = '7'");
    }

    #[test]
    fn structured_type_filter_is_rejected() {
        let record: RecordDefinition = serde_json::from_value(json!({
            "fields": {"id": {"suiteql_column": "ID"}},
            "primary_table": {"suiteql_table": "T", "suiteql_type_filter": {"in": ["a", "b"]}}
        }))
        .unwrap();
        let err = build_query(&record, "thing", &["id"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lookup);
        assert!(err
            .to_string()
            .starts_with("SuiteQL type filter for thing is not a name or number"));
    }

    #[test]
    fn non_text_column_is_rejected() {
        let record: RecordDefinition = serde_json::from_value(json!({
            "fields": {"id": {"suiteql_column": true}},
            "primary_table": {"suiteql_table": "T"}
        }))
        .unwrap();
        let err = build_query(&record, "thing", &["id"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "SuiteQL column for field 'id' is not a name or number: true"
        );
    }

    #[test]
    fn zero_type_filter_is_absent() {
        let record: RecordDefinition = serde_json::from_value(json!({
            "fields": {"id": {"suiteql_column": "ID"}},
            "primary_table": {"suiteql_table": "T", "suiteql_type_filter": 0}
        }))
        .unwrap();
        assert_eq!(build_query(&record, "thing", &["id"]).unwrap(), "SELECT ID FROM T");
    }

    #[test]
    fn trailing_comma_yields_empty_field() {
        assert_eq!(parse_field_list("email,"), vec!["email", ""]);
    }
}
