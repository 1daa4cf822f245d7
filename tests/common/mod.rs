//! Shared fixtures for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use influx_backup::adapters::influxdb::{PointSet, TimeSeriesStore, SHOW_MEASUREMENTS};
use influx_backup::domain::{BackupError, Result, SeriesName, StoreError};
use regex::Regex;
use serde_json::{json, Value};
use std::sync::Mutex;

/// One stored point: an instant and its field values
#[derive(Debug, Clone)]
pub struct Point {
    pub time: DateTime<Utc>,
    pub fields: Vec<(String, Value)>,
}

impl Point {
    pub fn new(time: DateTime<Utc>, fields: &[(&str, Value)]) -> Self {
        Self {
            time,
            fields: fields
                .iter()
                .map(|(name, value)| (name.to_string(), value.clone()))
                .collect(),
        }
    }
}

/// In-memory store answering range queries the way the database does
///
/// Window literals are read as wall-clock times in the query's `tz()` zone,
/// both bounds inclusive. Every statement is recorded.
#[derive(Default)]
pub struct InMemoryStore {
    series: Vec<(String, Vec<Point>)>,
    statements: Mutex<Vec<String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a series; listing order follows insertion order
    pub fn with_series(mut self, name: &str, points: Vec<Point>) -> Self {
        self.series.push((name.to_string(), points));
        self
    }

    pub fn statements(&self) -> Vec<String> {
        self.statements.lock().unwrap().clone()
    }

    pub fn statement_count(&self) -> usize {
        self.statements.lock().unwrap().len()
    }

    fn record(&self, statement: &str) {
        self.statements.lock().unwrap().push(statement.to_string());
    }
}

#[async_trait]
impl TimeSeriesStore for InMemoryStore {
    async fn list_series(&self) -> Result<Vec<SeriesName>> {
        self.record(SHOW_MEASUREMENTS);
        self.series
            .iter()
            .map(|(name, _)| SeriesName::new(name.clone()).map_err(BackupError::Validation))
            .collect()
    }

    async fn query_points(&self, query: &str) -> Result<PointSet> {
        self.record(query);

        let re = Regex::new(
            r#"^SELECT \* FROM "([^"]+)" WHERE time >= '([^']+)' AND time <= '([^']+)' tz\('([^']+)'\)$"#,
        )
        .unwrap();
        let caps = re
            .captures(query)
            .ok_or_else(|| StoreError::QueryFailed(format!("unsupported query: {query}")))?;

        let tz: Tz = caps[4]
            .parse()
            .map_err(|_| StoreError::QueryFailed(format!("unknown zone {}", &caps[4])))?;
        let start = local_literal(&caps[2], tz)?;
        let end = local_literal(&caps[3], tz)?;

        let Some((_, points)) = self.series.iter().find(|(name, _)| name == &caps[1]) else {
            return Ok(PointSet::default());
        };

        let selected: Vec<&Point> = points
            .iter()
            .filter(|p| p.time >= start && p.time <= end)
            .collect();
        if selected.is_empty() {
            return Ok(PointSet::default());
        }

        let mut columns = vec!["time".to_string()];
        for point in &selected {
            for (name, _) in &point.fields {
                if !columns.contains(name) {
                    columns.push(name.clone());
                }
            }
        }

        let values = selected
            .iter()
            .map(|point| {
                columns
                    .iter()
                    .map(|column| {
                        if column == "time" {
                            json!(point.time.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string())
                        } else {
                            point
                                .fields
                                .iter()
                                .find(|(name, _)| name == column)
                                .map(|(_, v)| v.clone())
                                .unwrap_or(Value::Null)
                        }
                    })
                    .collect()
            })
            .collect();

        Ok(PointSet { columns, values })
    }
}

fn local_literal(literal: &str, tz: Tz) -> Result<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(literal, "%Y-%m-%dT%H:%M:%SZ")
        .map_err(|e| StoreError::QueryFailed(format!("bad time literal {literal}: {e}")))?;
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|t| t.with_timezone(&Utc))
        .ok_or_else(|| StoreError::QueryFailed(format!("nonexistent local time {literal}")).into())
}

/// UTC instant of a wall-clock time in `tz`
pub fn local(tz: Tz, y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    tz.with_ymd_and_hms(y, m, d, h, min, s)
        .unwrap()
        .with_timezone(&Utc)
}

/// Naive local date-time, as the scheduler and driver take it
pub fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

/// Number of data rows in a Backup File, header excluded
pub fn data_rows(path: &std::path::Path) -> usize {
    let contents = std::fs::read_to_string(path).unwrap();
    contents.lines().count().saturating_sub(1)
}
