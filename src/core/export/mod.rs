//! Export of store data into in-memory tables
//!
//! - [`series`] - one query's points into a [`Table`](crate::domain::Table)
//! - [`day`] - every series for one day window

pub mod day;
pub mod series;

pub use day::{range_query, DayExport, DayExporter};
pub use series::{parse_timestamp, points_to_table};
