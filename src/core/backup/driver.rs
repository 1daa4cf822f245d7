//! Backup driver: export one day into its Backup Folder unless it exists
//!
//! Per-day state machine:
//!
//! ```text
//! NOT_BACKED_UP --create folder--> EXPORTING --all files written--> BACKED_UP
//! ```
//!
//! Only the folder is inspected to tell the states apart. A failure after the
//! folder is created leaves it in place, possibly empty or with some files
//! missing, and the next run skips the day as if it were complete.

use super::backup_file::write_table;
use super::folder::{backup_folder, create_day_folder, is_backed_up};
use super::summary::DayOutcome;
use crate::core::export::DayExporter;
use crate::domain::Result;
use crate::log_series_written;
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

/// Writes one folder of Backup Files per day
pub struct BackupDriver {
    exporter: DayExporter,
    base_folder: PathBuf,
}

impl BackupDriver {
    pub fn new(exporter: DayExporter, base_folder: impl Into<PathBuf>) -> Self {
        Self {
            exporter,
            base_folder: base_folder.into(),
        }
    }

    pub fn base_folder(&self) -> &Path {
        &self.base_folder
    }

    /// Backs up the calendar day containing `day` if its folder is absent
    ///
    /// When the folder exists nothing is queried or written. Otherwise the
    /// folder is created first, then every series is exported and written as
    /// `<series>.csv` in the order the store listed them.
    ///
    /// # Errors
    ///
    /// Propagates folder creation, export and write failures. Nothing is
    /// rolled back.
    pub async fn backup_day(&self, day: NaiveDateTime) -> Result<DayOutcome> {
        let folder = backup_folder(&self.base_folder, day);

        if is_backed_up(&folder) {
            tracing::info!(
                folder = %folder.display(),
                "Backup folder already exists, skipping day"
            );
            return Ok(DayOutcome::Skipped { folder });
        }

        create_day_folder(&folder)?;

        let export = self.exporter.export_day(day).await?;
        let series = export.tables.len();
        let rows = export.total_rows();

        for (name, table) in &export.tables {
            let path = folder.join(name.file_name());
            write_table(&path, table)?;
            log_series_written!(name, table.len(), path.display());
        }

        tracing::info!(
            folder = %folder.display(),
            series = series,
            rows = rows,
            "Day backed up"
        );

        Ok(DayOutcome::BackedUp {
            folder,
            series,
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::influxdb::{PointSet, TimeSeriesStore};
    use crate::domain::{BackupError, SeriesName, StoreError};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use chrono_tz::Europe::Amsterdam;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::TempDir;

    /// One "temp" series with a single point; counts every call
    #[derive(Default)]
    struct CountingStore {
        calls: AtomicUsize,
        fail_queries: bool,
    }

    #[async_trait]
    impl TimeSeriesStore for CountingStore {
        async fn list_series(&self) -> crate::domain::Result<Vec<SeriesName>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![SeriesName::new("temp").unwrap()])
        }

        async fn query_points(&self, _query: &str) -> crate::domain::Result<PointSet> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_queries {
                return Err(StoreError::ServerError {
                    status: 500,
                    message: "boom".to_string(),
                }
                .into());
            }
            Ok(PointSet {
                columns: vec!["time".to_string(), "value".to_string()],
                values: vec![vec![json!("2024-03-01T08:00:00.000000Z"), json!(3)]],
            })
        }
    }

    fn day() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(7, 30, 0)
            .unwrap()
    }

    fn driver(store: Arc<CountingStore>, base: &Path) -> BackupDriver {
        BackupDriver::new(DayExporter::new(store, Amsterdam), base)
    }

    #[tokio::test]
    async fn test_backup_day_writes_files() {
        let temp = TempDir::new().unwrap();
        let store = Arc::new(CountingStore::default());

        let outcome = driver(store.clone(), temp.path())
            .backup_day(day())
            .await
            .unwrap();

        let folder = temp.path().join("2024").join("2024-03-01");
        assert_eq!(
            outcome,
            DayOutcome::BackedUp {
                folder: folder.clone(),
                series: 1,
                rows: 1
            }
        );
        assert!(folder.join("temp.csv").is_file());
        assert_eq!(store.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_backup_day_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let store = Arc::new(CountingStore::default());
        let driver = driver(store.clone(), temp.path());

        driver.backup_day(day()).await.unwrap();
        let calls_after_first = store.calls.load(Ordering::SeqCst);
        let written = std::fs::read_to_string(
            temp.path().join("2024").join("2024-03-01").join("temp.csv"),
        )
        .unwrap();

        let second = driver.backup_day(day()).await.unwrap();

        assert!(second.is_skipped());
        assert_eq!(store.calls.load(Ordering::SeqCst), calls_after_first);
        assert_eq!(
            std::fs::read_to_string(temp.path().join("2024").join("2024-03-01").join("temp.csv"))
                .unwrap(),
            written
        );
    }

    #[tokio::test]
    async fn test_failed_export_leaves_folder_behind() {
        let temp = TempDir::new().unwrap();
        let store = Arc::new(CountingStore {
            calls: AtomicUsize::new(0),
            fail_queries: true,
        });
        let driver = driver(store.clone(), temp.path());

        let err = driver.backup_day(day()).await.unwrap_err();
        assert!(matches!(err, BackupError::Store(_)));

        // the empty folder now reads as a completed day
        let folder = temp.path().join("2024").join("2024-03-01");
        assert!(folder.is_dir());
        assert_eq!(std::fs::read_dir(&folder).unwrap().count(), 0);

        let calls = store.calls.load(Ordering::SeqCst);
        let retry = driver.backup_day(day()).await.unwrap();
        assert!(retry.is_skipped());
        assert_eq!(store.calls.load(Ordering::SeqCst), calls);
    }

    #[tokio::test]
    async fn test_folder_creation_failure_propagates() {
        let temp = TempDir::new().unwrap();
        // a file where the year folder should go
        let base = temp.path().join("base");
        std::fs::create_dir(&base).unwrap();
        std::fs::write(base.join("2024"), "not a folder").unwrap();
        let store = Arc::new(CountingStore::default());

        let err = driver(store.clone(), &base)
            .backup_day(day())
            .await
            .unwrap_err();

        assert!(matches!(err, BackupError::Io(_)));
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }
}
