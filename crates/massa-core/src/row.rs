//! Generated row representation.

use crate::value::Value;
use serde::{Deserialize, Serialize};

/// One generated record: an ordered list of `(column, value)` pairs.
///
/// Column order is first-insertion order and is preserved through
/// serialization. Rows are assembled once and never mutated afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Row {
    cells: Vec<(String, Value)>,
}

impl Row {
    /// Create an empty row with capacity for `columns` cells.
    pub fn with_capacity(columns: usize) -> Self {
        Self {
            cells: Vec::with_capacity(columns),
        }
    }

    /// Append a cell. Columns are looked up linearly; datasets have at most
    /// a couple of dozen columns.
    pub fn push(&mut self, column: impl Into<String>, value: Value) {
        self.cells.push((column.into(), value));
    }

    /// Get a cell value by column name.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Get a cell as f64, treating a missing or non-numeric cell as absent.
    pub fn get_f64(&self, column: &str) -> Option<f64> {
        self.get(column).and_then(Value::as_f64)
    }

    /// Get a cell as i64.
    pub fn get_i64(&self, column: &str) -> Option<i64> {
        self.get(column).and_then(Value::as_i64)
    }

    /// Get a cell as a string slice.
    pub fn get_str(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(Value::as_str)
    }

    /// Column names in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.cells.iter().map(|(_, value)| value)
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut row = Row::with_capacity(3);
        row.push("b", Value::Int(2));
        row.push("a", Value::Int(1));
        row.push("c", Value::Null);

        let columns: Vec<&str> = row.columns().collect();
        assert_eq!(columns, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_get_by_name() {
        let mut row = Row::with_capacity(2);
        row.push("Valor", Value::Float(12.5));
        row.push("Tipo", Value::Text("Entrada".into()));

        assert_eq!(row.get_f64("Valor"), Some(12.5));
        assert_eq!(row.get_str("Tipo"), Some("Entrada"));
        assert!(row.get("Saldo").is_none());
    }
}
