//! Transport records returned by the table introspection backend.
//!
//! Records are decoded from one response body and dropped after one render.

use serde::{Deserialize, Serialize};

/// ETS table kind. Unknown strings are kept as-is and shown raw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TableType {
    Set,
    OrderedSet,
    Bag,
    DuplicateBag,
    Other(String),
}

impl TableType {
    pub fn as_str(&self) -> &str {
        match self {
            TableType::Set => "set",
            TableType::OrderedSet => "ordered_set",
            TableType::Bag => "bag",
            TableType::DuplicateBag => "duplicate_bag",
            TableType::Other(s) => s,
        }
    }
}

impl From<String> for TableType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "set" => TableType::Set,
            "ordered_set" => TableType::OrderedSet,
            "bag" => TableType::Bag,
            "duplicate_bag" => TableType::DuplicateBag,
            _ => TableType::Other(s),
        }
    }
}

impl From<TableType> for String {
    fn from(t: TableType) -> Self {
        t.as_str().to_owned()
    }
}

/// Access class of a table. Unknown strings are kept as-is and shown raw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Protection {
    Public,
    Protected,
    Private,
    Other(String),
}

impl Protection {
    pub fn as_str(&self) -> &str {
        match self {
            Protection::Public => "public",
            Protection::Protected => "protected",
            Protection::Private => "private",
            Protection::Other(s) => s,
        }
    }
}

impl From<String> for Protection {
    fn from(s: String) -> Self {
        match s.as_str() {
            "public" => Protection::Public,
            "protected" => Protection::Protected,
            "private" => Protection::Private,
            _ => Protection::Other(s),
        }
    }
}

impl From<Protection> for String {
    fn from(p: Protection) -> Self {
        p.as_str().to_owned()
    }
}

/// One row of the tables list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSummary {
    pub name: String,
    pub table_type: TableType,
    /// Object count.
    pub size: i64,
    pub memory_bytes: i64,
    /// Owner process, already formatted by the backend.
    pub owner: String,
    pub protection: Protection,
}

/// Body of `GET /api/v1/tables/list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablesList {
    /// Backend order, never re-sorted.
    pub tables: Vec<TableSummary>,
    /// Advisory; not required to equal `tables.len()`.
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry {
    pub index: i64,
    /// Pre-formatted term text. Untrusted.
    pub entry: String,
}

/// Body of `GET /api/v1/tables/{name}/contents`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableContents {
    pub table_name: String,
    pub entries: Vec<TableEntry>,
    pub total: i64,
}

/// Body of any non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiFailure {
    pub error: String,
}
