//! Series exporter: one query's points reshaped into a [`Table`]

use crate::adapters::influxdb::PointSet;
use crate::domain::table::TIME_COLUMN;
use crate::domain::{BackupError, FieldValue, Result, Table};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Pattern of the `time` field returned by the store, always UTC
pub const STORE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Converts the points of one series into a table
///
/// Zero points give the empty table without touching any timestamp. Otherwise
/// every point must carry a `time` string matching [`STORE_TIMESTAMP_FORMAT`];
/// it is read as UTC and re-expressed in `tz`. Numeric columns are typed as a
/// whole: integer cells become floats when the column also holds a float or a
/// null, so `19` next to `20.5` is written as `19.0`.
///
/// # Errors
///
/// Returns [`BackupError::Parse`] if the `time` column is missing, a cell is not
/// a string, or a timestamp does not match the pattern.
pub fn points_to_table(points: PointSet, tz: Tz) -> Result<Table> {
    if points.is_empty() {
        return Ok(Table::empty());
    }

    let time_index = points
        .columns
        .iter()
        .position(|c| c == TIME_COLUMN)
        .ok_or_else(|| BackupError::Parse("Records have no 'time' field".to_string()))?;

    let mut rows = Vec::with_capacity(points.values.len());
    for (row_index, row) in points.values.into_iter().enumerate() {
        let mut cells = Vec::with_capacity(row.len());
        for (column_index, value) in row.iter().enumerate() {
            if column_index == time_index {
                let raw = value.as_str().ok_or_else(|| {
                    BackupError::Parse(format!(
                        "Record {row_index} has a non-string 'time' field: {value}"
                    ))
                })?;
                cells.push(FieldValue::Timestamp(parse_timestamp(raw, tz)?));
            } else {
                cells.push(FieldValue::from_json(value));
            }
        }
        rows.push(cells);
    }

    widen_numeric_columns(&mut rows, points.columns.len());
    Table::new(points.columns, rows).map_err(BackupError::Parse)
}

fn widen_numeric_columns(rows: &mut [Vec<FieldValue>], width: usize) {
    for column in 0..width {
        let mut has_integer = false;
        let mut needs_float = false;
        let mut numeric = true;
        for cell in rows.iter().filter_map(|row| row.get(column)) {
            match cell {
                FieldValue::Integer(_) => has_integer = true,
                FieldValue::Float(_) | FieldValue::Null => needs_float = true,
                _ => numeric = false,
            }
        }
        if !(numeric && has_integer && needs_float) {
            continue;
        }
        for cell in rows.iter_mut().filter_map(|row| row.get_mut(column)) {
            if let FieldValue::Integer(i) = *cell {
                *cell = FieldValue::Float(i as f64);
            }
        }
    }
}

/// Parses a store timestamp as UTC and converts it to `tz`
///
/// # Errors
///
/// Returns [`BackupError::Parse`] if `raw` does not match [`STORE_TIMESTAMP_FORMAT`].
///
/// # Examples
///
/// ```
/// use influx_backup::core::export::series::parse_timestamp;
///
/// let ts = parse_timestamp("2024-03-01T09:15:00.250000Z", chrono_tz::Europe::Amsterdam).unwrap();
/// assert_eq!(ts.to_rfc3339(), "2024-03-01T10:15:00.250+01:00");
/// ```
pub fn parse_timestamp(raw: &str, tz: Tz) -> Result<DateTime<Tz>> {
    let naive = NaiveDateTime::parse_from_str(raw, STORE_TIMESTAMP_FORMAT).map_err(|e| {
        BackupError::Parse(format!(
            "Timestamp '{raw}' does not match {STORE_TIMESTAMP_FORMAT}: {e}"
        ))
    })?;
    Ok(Utc.from_utc_datetime(&naive).with_timezone(&tz))
}
