//! Day aggregator: every discovered series exported for one day window

use super::series::points_to_table;
use crate::adapters::influxdb::TimeSeriesStore;
use crate::domain::ids::SeriesName;
use crate::domain::{DayWindow, Result, Table};
use chrono::NaiveDateTime;
use chrono_tz::Tz;
use std::sync::Arc;

/// Tables of one day, in the order the store listed the series
#[derive(Debug, Clone, PartialEq)]
pub struct DayExport {
    pub window: DayWindow,
    pub tables: Vec<(SeriesName, Table)>,
}

impl DayExport {
    /// Total data rows across all series
    pub fn total_rows(&self) -> usize {
        self.tables.iter().map(|(_, table)| table.len()).sum()
    }
}

/// Exports series from a store into tables in a fixed local timezone
pub struct DayExporter {
    store: Arc<dyn TimeSeriesStore>,
    timezone: Tz,
}

impl DayExporter {
    pub fn new(store: Arc<dyn TimeSeriesStore>, timezone: Tz) -> Self {
        Self { store, timezone }
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Runs one query and reshapes its points into a table
    ///
    /// # Errors
    ///
    /// Propagates query failures and timestamp parse failures unchanged.
    pub async fn export_series(&self, query: &str) -> Result<Table> {
        let points = self.store.query_points(query).await?;
        points_to_table(points, self.timezone)
    }

    /// Exports every series for the calendar day containing `day`
    ///
    /// Series are discovered first, then queried one at a time. The first
    /// failure aborts the whole day; no partial result is returned.
    pub async fn export_day(&self, day: NaiveDateTime) -> Result<DayExport> {
        let window = DayWindow::for_day(day);
        let series = self.store.list_series().await?;

        tracing::debug!(
            window = %window,
            series_count = series.len(),
            "Exporting day"
        );

        let mut tables = Vec::with_capacity(series.len());
        for name in series {
            let query = range_query(&name, &window, self.timezone);
            let table = self.export_series(&query).await?;
            tracing::debug!(series = %name, rows = table.len(), "Exported series");
            tables.push((name, table));
        }

        Ok(DayExport { window, tables })
    }
}

/// Range query selecting all fields of one series inside `window`
///
/// Both bounds are inclusive.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use influx_backup::core::export::day::range_query;
/// use influx_backup::domain::{DayWindow, SeriesName};
///
/// let window = DayWindow::for_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
/// let query = range_query(
///     &SeriesName::new("temp").unwrap(),
///     &window,
///     chrono_tz::Europe::Amsterdam,
/// );
/// assert_eq!(
///     query,
///     "SELECT * FROM \"temp\" WHERE time >= '2024-03-01T00:00:00Z' \
///      AND time <= '2024-03-02T00:00:00Z' tz('Europe/Amsterdam')"
/// );
/// ```
pub fn range_query(series: &SeriesName, window: &DayWindow, tz: Tz) -> String {
    format!(
        "SELECT * FROM {} WHERE time >= '{}' AND time <= '{}' tz('{}')",
        series.quoted(),
        window.start_literal(),
        window.end_literal(),
        tz.name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::influxdb::PointSet;
    use crate::domain::{BackupError, StoreError};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use chrono_tz::Europe::Amsterdam;
    use serde_json::json;
    use std::sync::Mutex;

    /// Store answering range queries from canned point sets
    struct CannedStore {
        series: Vec<(&'static str, PointSet)>,
        fail_on: Option<&'static str>,
        queries: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl TimeSeriesStore for CannedStore {
        async fn list_series(&self) -> Result<Vec<SeriesName>> {
            Ok(self
                .series
                .iter()
                .map(|(name, _)| SeriesName::new(*name).unwrap())
                .collect())
        }

        async fn query_points(&self, query: &str) -> Result<PointSet> {
            self.queries.lock().unwrap().push(query.to_string());
            if let Some(name) = self.fail_on {
                if query.contains(&format!("FROM \"{name}\"")) {
                    return Err(StoreError::QueryFailed("series vanished".to_string()).into());
                }
            }
            Ok(self
                .series
                .iter()
                .find(|(name, _)| query.contains(&format!("FROM \"{name}\"")))
                .map(|(_, points)| points.clone())
                .unwrap_or_default())
        }
    }

    fn temp_points() -> PointSet {
        PointSet {
            columns: vec!["time".to_string(), "value".to_string()],
            values: vec![
                vec![json!("2024-02-29T23:00:00.000000Z"), json!(19.5)],
                vec![json!("2024-03-01T11:00:00.000000Z"), json!(21.0)],
            ],
        }
    }

    fn day() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(16, 45, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn test_export_day_keeps_store_order() {
        let store = Arc::new(CannedStore {
            series: vec![("temp", temp_points()), ("humidity", PointSet::default())],
            fail_on: None,
            queries: Mutex::new(Vec::new()),
        });
        let exporter = DayExporter::new(store.clone(), Amsterdam);

        let export = exporter.export_day(day()).await.unwrap();

        let names: Vec<&str> = export.tables.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["temp", "humidity"]);
        assert_eq!(export.tables[0].1.len(), 2);
        assert!(export.tables[1].1.is_empty());
        assert_eq!(export.total_rows(), 2);
        assert_eq!(export.window, DayWindow::for_day(day()));

        let queries = store.queries.lock().unwrap();
        assert_eq!(queries.len(), 2);
        assert!(queries[0].contains("time >= '2024-03-01T00:00:00Z'"));
        assert!(queries[0].contains("time <= '2024-03-02T00:00:00Z'"));
        assert!(queries[0].ends_with("tz('Europe/Amsterdam')"));
    }

    #[tokio::test]
    async fn test_export_day_aborts_on_first_failure() {
        let store = Arc::new(CannedStore {
            series: vec![
                ("temp", temp_points()),
                ("pressure", temp_points()),
                ("humidity", temp_points()),
            ],
            fail_on: Some("pressure"),
            queries: Mutex::new(Vec::new()),
        });
        let exporter = DayExporter::new(store.clone(), Amsterdam);

        let err = exporter.export_day(day()).await.unwrap_err();

        assert!(matches!(err, BackupError::Store(StoreError::QueryFailed(_))));
        // humidity is never queried once pressure fails
        assert_eq!(store.queries.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_export_day_without_series() {
        let store = Arc::new(CannedStore {
            series: Vec::new(),
            fail_on: None,
            queries: Mutex::new(Vec::new()),
        });
        let exporter = DayExporter::new(store, Amsterdam);

        let export = exporter.export_day(day()).await.unwrap();
        assert!(export.tables.is_empty());
    }

    #[test]
    fn test_range_query_is_inclusive_on_both_ends() {
        let window = DayWindow::for_day(day());
        let query = range_query(&SeriesName::new("temp").unwrap(), &window, Amsterdam);
        assert!(query.contains("time >= '"));
        assert!(query.contains("AND time <= '"));
        assert!(!query.contains("time < '"));
    }
}
