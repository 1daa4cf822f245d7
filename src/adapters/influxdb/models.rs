//! InfluxDB 1.x `/query` response models
//!
//! These structs mirror the JSON returned by the HTTP API and are converted
//! into a [`PointSet`] before leaving the adapter.

use serde::Deserialize;
use serde_json::Value;

/// Top-level body of a `/query` response
#[derive(Debug, Clone, Deserialize, Default)]
pub struct QueryResponse {
    /// One entry per statement in the request
    #[serde(default)]
    pub results: Vec<StatementResult>,

    /// Request-level error (bad request, authorization)
    #[serde(default)]
    pub error: Option<String>,
}

/// Result of one statement
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StatementResult {
    #[serde(default)]
    pub statement_id: u32,

    /// Absent when the statement matched nothing
    #[serde(default)]
    pub series: Vec<SeriesResult>,

    /// Statement-level error
    #[serde(default)]
    pub error: Option<String>,
}

/// One returned series: column names plus positional rows
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SeriesResult {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub columns: Vec<String>,

    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

/// Flattened points of a query: ordered columns and one row per point
///
/// Rows always have exactly one value per column; cells a series did not
/// provide are `null`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointSet {
    pub columns: Vec<String>,
    pub values: Vec<Vec<Value>>,
}

impl PointSet {
    /// Concatenates several series into one point set
    ///
    /// Columns are unioned in first-seen order.
    pub fn from_series(series: Vec<SeriesResult>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for s in &series {
            for column in &s.columns {
                if !columns.contains(column) {
                    columns.push(column.clone());
                }
            }
        }

        let mut values = Vec::new();
        for s in series {
            let positions: Vec<usize> = s
                .columns
                .iter()
                .filter_map(|c| columns.iter().position(|known| known == c))
                .collect();

            for row in s.values {
                let mut full = vec![Value::Null; columns.len()];
                for (cell, &position) in row.into_iter().zip(positions.iter()) {
                    full[position] = cell;
                }
                values.push(full);
            }
        }

        Self { columns, values }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Values of one column, in row order
    pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
        let index = self.columns.iter().position(|c| c == name)?;
        Some(self.values.iter().map(|row| &row[index]).collect())
    }
}
