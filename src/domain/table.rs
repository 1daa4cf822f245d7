//! Tabular representation of one series' records for one day
//!
//! A [`Table`] keeps the column order returned by the store. The `time`
//! column holds absolute instants expressed in the configured local zone;
//! every other cell keeps the scalar the store returned.

use chrono::DateTime;
use chrono_tz::Tz;
use serde_json::Value;
use std::fmt;

/// Name of the timestamp column every record carries
pub const TIME_COLUMN: &str = "time";

/// Rendering used for timestamps in Backup Files
pub const TIMESTAMP_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f%:z";

/// One scalar cell of a [`Table`]
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Timestamp(DateTime<Tz>),
}

impl FieldValue {
    /// Converts a raw JSON scalar returned by the store
    ///
    /// Integers that fit `i64` stay integers; any other number becomes a float.
    /// Arrays and objects are not scalars and are kept as their JSON text.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Integer(i),
                None => FieldValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => FieldValue::Text(s.clone()),
            other => FieldValue::Text(other.to_string()),
        }
    }

    /// Returns true for the null cell
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Bool(true) => write!(f, "True"),
            FieldValue::Bool(false) => write!(f, "False"),
            FieldValue::Integer(i) => write!(f, "{i}"),
            // Debug keeps the decimal point on integral floats (21.0, not 21)
            FieldValue::Float(v) => write!(f, "{v:?}"),
            FieldValue::Text(s) => write!(f, "{s}"),
            FieldValue::Timestamp(ts) => write!(f, "{}", ts.format(TIMESTAMP_DISPLAY_FORMAT)),
        }
    }
}

/// Records of one series, in the order the store returned them
///
/// A table with zero rows (and possibly zero columns) is a valid state: the
/// series exists but had no data in the queried window.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<FieldValue>>,
}

impl Table {
    /// Creates a table; every row must have one cell per column
    pub fn new(columns: Vec<String>, rows: Vec<Vec<FieldValue>>) -> Result<Self, String> {
        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != columns.len())
        {
            return Err(format!(
                "Row {index} has {} cells but the table has {} columns",
                row.len(),
                columns.len()
            ));
        }
        Ok(Self { columns, rows })
    }

    /// The empty table: no columns, no rows
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<FieldValue>] {
        &self.rows
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at (row, column name)
    pub fn get(&self, row: usize, column: &str) -> Option<&FieldValue> {
        let index = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(json!(null), FieldValue::Null ; "null")]
    #[test_case(json!(true), FieldValue::Bool(true) ; "bool")]
    #[test_case(json!(42), FieldValue::Integer(42) ; "integer")]
    #[test_case(json!(21.5), FieldValue::Float(21.5) ; "float")]
    #[test_case(json!("on"), FieldValue::Text("on".to_string()) ; "text")]
    fn test_field_value_from_json(input: Value, expected: FieldValue) {
        assert_eq!(FieldValue::from_json(&input), expected);
    }

    #[test_case(FieldValue::Null, "" ; "null")]
    #[test_case(FieldValue::Bool(false), "False" ; "bool")]
    #[test_case(FieldValue::Integer(-3), "-3" ; "integer")]
    #[test_case(FieldValue::Float(21.0), "21.0" ; "integral float")]
    #[test_case(FieldValue::Float(0.25), "0.25" ; "float")]
    #[test_case(FieldValue::Text("a b".to_string()), "a b" ; "text")]
    fn test_field_value_display(value: FieldValue, expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn test_timestamp_display() {
        let ts = chrono_tz::Europe::Amsterdam
            .with_ymd_and_hms(2024, 3, 1, 10, 30, 0)
            .unwrap();
        assert_eq!(
            FieldValue::Timestamp(ts).to_string(),
            "2024-03-01 10:30:00+01:00"
        );
    }

    #[test]
    fn test_table_rejects_ragged_rows() {
        let result = Table::new(
            vec!["time".to_string(), "value".to_string()],
            vec![vec![FieldValue::Null]],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_table_lookup() {
        let table = Table::new(
            vec!["time".to_string(), "value".to_string()],
            vec![vec![FieldValue::Null, FieldValue::Integer(7)]],
        )
        .unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.column_index("value"), Some(1));
        assert_eq!(table.get(0, "value"), Some(&FieldValue::Integer(7)));
        assert_eq!(table.get(1, "value"), None);
        assert_eq!(table.get(0, "missing"), None);
    }

    #[test]
    fn test_empty_table() {
        let table = Table::empty();
        assert!(table.is_empty());
        assert!(table.columns().is_empty());
    }
}
