//! Backup File serialization
//!
//! A Backup File is a naive tabular dump of one [`Table`]: a header row made of
//! an empty index label followed by the column names, then one record per row
//! led by its zero-based index. An empty table is written as the lone empty
//! index label.

use crate::domain::table::{TIMESTAMP_DISPLAY_FORMAT, TIME_COLUMN};
use crate::domain::{BackupError, FieldValue, Result, Table};
use chrono::DateTime;
use chrono_tz::Tz;
use std::fs::File;
use std::path::Path;

/// Writes `table` to `path`, replacing any existing file
///
/// # Errors
///
/// Fails if the file cannot be created or written.
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    let mut header = Vec::with_capacity(table.columns().len() + 1);
    header.push(String::new());
    header.extend(table.columns().iter().cloned());
    writer.write_record(&header)?;

    for (index, row) in table.rows().iter().enumerate() {
        let mut record = Vec::with_capacity(row.len() + 1);
        record.push(index.to_string());
        record.extend(row.iter().map(FieldValue::to_string));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Reads a Backup File back into a [`Table`]
///
/// `time` cells are parsed into instants in `tz`. Other cells are typed by
/// shape: empty is null, `True`/`False` are booleans, then integer, then
/// float, otherwise text.
///
/// # Errors
///
/// Fails if the file cannot be read, lacks the index column, or holds a
/// malformed timestamp.
pub fn read_backup_file(path: &Path, tz: Tz) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let mut header_iter = headers.iter();
    match header_iter.next() {
        Some("") => {}
        _ => {
            return Err(BackupError::Parse(format!(
                "{} does not start with an index column",
                path.display()
            )))
        }
    }
    let columns: Vec<String> = header_iter.map(str::to_string).collect();
    let time_index = columns.iter().position(|c| c == TIME_COLUMN);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut cells = Vec::with_capacity(columns.len());
        for (position, raw) in record.iter().skip(1).enumerate() {
            if Some(position) == time_index {
                cells.push(FieldValue::Timestamp(parse_display_timestamp(raw, tz)?));
            } else {
                cells.push(parse_cell(raw));
            }
        }
        rows.push(cells);
    }

    Table::new(columns, rows).map_err(BackupError::Parse)
}

fn parse_display_timestamp(raw: &str, tz: Tz) -> Result<DateTime<Tz>> {
    DateTime::parse_from_str(raw, TIMESTAMP_DISPLAY_FORMAT)
        .map(|ts| ts.with_timezone(&tz))
        .map_err(|e| BackupError::Parse(format!("Invalid timestamp '{raw}': {e}")))
}

fn parse_cell(raw: &str) -> FieldValue {
    match raw {
        "" => FieldValue::Null,
        "True" => FieldValue::Bool(true),
        "False" => FieldValue::Bool(false),
        _ => {
            if let Ok(i) = raw.parse::<i64>() {
                FieldValue::Integer(i)
            } else if let Ok(f) = raw.parse::<f64>() {
                FieldValue::Float(f)
            } else {
                FieldValue::Text(raw.to_string())
            }
        }
    }
}
