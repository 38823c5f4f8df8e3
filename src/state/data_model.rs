use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One record of domain data. Every row carries an `id` field.
pub type Fields = BTreeMap<String, Value>;

/// Row identity. Rows created in the app get integer ids; imported data may
/// carry string ids.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Int(n) => write!(f, "{n}"),
            RowId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for RowId {
    fn from(value: i64) -> Self {
        RowId::Int(value)
    }
}

impl From<&str> for RowId {
    fn from(value: &str) -> Self {
        RowId::Text(value.to_string())
    }
}

impl From<&RowId> for Value {
    fn from(id: &RowId) -> Self {
        match id {
            RowId::Int(n) => Value::Number((*n).into()),
            RowId::Text(s) => Value::String(s.clone()),
        }
    }
}

/// Reads a row's identity from its `id` field.
pub fn row_id(row: &Fields) -> Option<RowId> {
    match row.get("id")? {
        Value::Number(n) => n.as_i64().map(RowId::Int),
        Value::String(s) => Some(RowId::Text(s.clone())),
        _ => None,
    }
}

/// Next integer id for a freshly added row: one past the largest integer id
/// already present. String ids are ignored for numbering.
pub fn next_row_id(rows: &[Fields]) -> RowId {
    let max = rows
        .iter()
        .filter_map(|row| row_id(row))
        .filter_map(|id| match id {
            RowId::Int(n) => Some(n),
            RowId::Text(_) => None,
        })
        .max()
        .unwrap_or(0);
    RowId::Int(max + 1)
}

/// Formats a JSON value for display in a table cell.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Numeric reading of a cell value, used by computed columns.
pub fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}
