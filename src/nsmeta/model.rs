use crate::error::{MetadataError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::HashSet;

/// Contents of `<base>/active_env.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActiveEnvMarker {
    #[serde(default)]
    pub active_env: Option<String>,
}

/// One line of an environment's `record_index.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexEntry {
    pub record_key: String,
    /// Path of the record definition, relative to the environment directory.
    /// Only needed once the record is opened.
    #[serde(default)]
    pub file: Option<String>,
}

impl IndexEntry {
    pub fn new(record_key: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            record_key: record_key.into(),
            file: Some(file.into()),
        }
    }

    /// The definition file, or a lookup error when the entry names none.
    pub fn require_file(&self) -> Result<&str> {
        self.file.as_deref().ok_or_else(|| {
            MetadataError::Lookup(format!(
                "Record '{}' has no file in index.",
                self.record_key
            ))
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordIndex {
    pub records: Vec<IndexEntry>,
}

impl RecordIndex {
    /// First entry carrying `record_key`. Later duplicates are never returned.
    pub fn find(&self, record_key: &str) -> Option<&IndexEntry> {
        self.records.iter().find(|r| r.record_key == record_key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.record_key.as_str())
    }

    /// Keys that appear more than once, in order of their second appearance.
    pub fn duplicate_keys(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.keys().filter(|k| !seen.insert(*k)).collect()
    }
}

/// A record definition document.
///
/// Kept as an untyped JSON object: `get-record` hands it back verbatim and
/// only `fields`, `primary_table` and the per-field `suiteql_column` are ever
/// looked at.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct RecordDefinition(pub Map<String, Value>);

impl RecordDefinition {
    /// The `fields` mapping, empty when absent or not an object.
    pub fn fields(&self) -> FieldMap<'_> {
        FieldMap(self.0.get("fields").and_then(Value::as_object))
    }

    pub fn primary_table(&self) -> PrimaryTable<'_> {
        PrimaryTable(self.0.get("primary_table").and_then(Value::as_object))
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// A metadata attribute as it will appear in generated query text.
///
/// Null, `false`, zero, and empty strings, arrays or objects are absent.
/// Strings are used as-is and numbers keep their source spelling. Anything
/// else cannot be placed in a query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryText<'a> {
    Absent,
    Text(Cow<'a, str>),
    Invalid(&'a Value),
}

impl<'a> QueryText<'a> {
    pub fn of(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) | Some(Value::Bool(false)) => QueryText::Absent,
            Some(Value::String(s)) if s.is_empty() => QueryText::Absent,
            Some(Value::String(s)) => QueryText::Text(Cow::Borrowed(s.as_str())),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => QueryText::Absent,
            Some(Value::Number(n)) => QueryText::Text(Cow::Owned(n.to_string())),
            Some(Value::Array(a)) if a.is_empty() => QueryText::Absent,
            Some(Value::Object(o)) if o.is_empty() => QueryText::Absent,
            Some(other) => QueryText::Invalid(other),
        }
    }
}

/// Borrowed view over a record's `fields` object.
#[derive(Debug, Clone, Copy)]
pub struct FieldMap<'a>(Option<&'a Map<String, Value>>);

impl<'a> FieldMap<'a> {
    pub fn ids(&self) -> Vec<String> {
        self.0
            .map(|m| m.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn get(&self, field_id: &str) -> Option<&'a Value> {
        self.0.and_then(|m| m.get(field_id))
    }

    pub fn contains(&self, field_id: &str) -> bool {
        self.get(field_id).is_some()
    }

    pub fn suiteql_column(&self, field_id: &str) -> QueryText<'a> {
        QueryText::of(self.get(field_id).and_then(|def| def.get("suiteql_column")))
    }
}

/// Borrowed view over a record's `primary_table` object.
#[derive(Debug, Clone, Copy)]
pub struct PrimaryTable<'a>(Option<&'a Map<String, Value>>);

impl<'a> PrimaryTable<'a> {
    fn attribute(&self, key: &str) -> QueryText<'a> {
        QueryText::of(self.0.and_then(|m| m.get(key)))
    }

    pub fn suiteql_table(&self) -> QueryText<'a> {
        self.attribute("suiteql_table")
    }

    pub fn suiteql_type_filter(&self) -> QueryText<'a> {
        self.attribute("suiteql_type_filter")
    }
}
