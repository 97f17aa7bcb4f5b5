//! # Command Layer
//!
//! One module per query. Each `run` takes a store and an already-resolved
//! environment and returns a plain document; nothing here prints or exits.

use serde::Serialize;
use serde_json::Value;

pub mod find_field;
pub mod get_record;
pub mod list_fields;
pub mod list_records;
pub mod suggest_suiteql;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecordList {
    pub environment: String,
    pub records: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldList {
    pub environment: String,
    pub record_key: String,
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldMatch {
    pub record_key: String,
    pub field_definition: Value,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldSearch {
    pub environment: String,
    pub field_id: String,
    pub matches: Vec<FieldMatch>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SuiteQlSuggestion {
    pub environment: String,
    pub record_key: String,
    pub suiteql: String,
}

/// The outcome of any query, serialized as its bare document.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum CmdResult {
    Records(RecordList),
    Record(Value),
    Fields(FieldList),
    FieldSearch(FieldSearch),
    SuiteQl(SuiteQlSuggestion),
}
