//! Rectangular query results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell as returned by SQLite's dynamic typing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl CellValue {
    /// JSON form used by the `json` output mode. Blobs collapse to a size marker.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            CellValue::Null => serde_json::Value::Null,
            CellValue::Integer(i) => serde_json::json!(i),
            CellValue::Real(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            CellValue::Text(s) => serde_json::Value::String(s.clone()),
            CellValue::Blob(b) => serde_json::Value::String(format!("<blob {} bytes>", b.len())),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, "NULL"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Real(r) => write!(f, "{r}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Blob(b) => write!(f, "<blob {} bytes>", b.len()),
        }
    }
}

/// Column names plus rows, owned by the turn that produced them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl ResultTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<CellValue>) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows as JSON objects keyed by column name.
    pub fn to_json_rows(&self) -> serde_json::Value {
        let rows: Vec<serde_json::Value> = self
            .rows
            .iter()
            .map(|row| {
                let mut obj = serde_json::Map::new();
                for (name, cell) in self.columns.iter().zip(row) {
                    obj.insert(name.clone(), cell.to_json());
                }
                serde_json::Value::Object(obj)
            })
            .collect();
        serde_json::Value::Array(rows)
    }
}
