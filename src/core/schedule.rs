//! Sweep over the most recent complete days
//!
//! A sweep backs up yesterday and the days before it, most recent first.
//! Days whose folder already exists are skipped, so repeated runs only fill
//! in what is missing. The first failing day aborts the sweep.

use crate::adapters::influxdb::TimeSeriesStore;
use crate::config::InfluxBackupConfig;
use crate::core::backup::{BackupDriver, SweepSummary};
use crate::core::export::DayExporter;
use crate::domain::{BackupError, Result};
use crate::log_sweep_complete;
use chrono::{Duration, NaiveDateTime};
use std::sync::Arc;
use std::time::Instant;

/// Days covered by a sweep started at `now`, most recent first
///
/// Yesterday is `now` minus 24 hours; each following entry is one more day
/// back. Entries keep the time of day of `now`, only their date matters.
/// The list stops early at the start of the representable calendar.
pub fn days_to_back_up(now: NaiveDateTime, days: u32) -> Vec<NaiveDateTime> {
    let Some(yesterday) = now.checked_sub_signed(Duration::hours(24)) else {
        return Vec::new();
    };
    (0..i64::from(days))
        .map_while(|offset| yesterday.checked_sub_signed(Duration::days(offset)))
        .collect()
}

/// Runs the backup driver over a window of recent days
pub struct Scheduler {
    driver: BackupDriver,
    days: u32,
}

impl Scheduler {
    pub fn new(driver: BackupDriver, days: u32) -> Self {
        Self { driver, days }
    }

    /// Builds the exporter and driver from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the timezone is unknown.
    pub fn from_config(config: &InfluxBackupConfig, store: Arc<dyn TimeSeriesStore>) -> Result<Self> {
        let timezone = config.backup.tz().map_err(BackupError::Configuration)?;
        let exporter = DayExporter::new(store, timezone);
        let driver = BackupDriver::new(exporter, config.backup.base_folder.clone());
        Ok(Self::new(driver, config.backup.days))
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// Backs up every day in the sweep window relative to `now`
    ///
    /// The base folder is created first if missing. Days are processed one
    /// at a time, most recent first.
    ///
    /// # Errors
    ///
    /// Returns the first day's error; later days are not attempted.
    pub async fn run_sweep(&self, now: NaiveDateTime) -> Result<SweepSummary> {
        let started = Instant::now();
        std::fs::create_dir_all(self.driver.base_folder())?;

        let mut summary = SweepSummary::new();
        for day in days_to_back_up(now, self.days) {
            tracing::info!(day = %day.date(), "Making backup");
            let outcome = self.driver.backup_day(day).await.map_err(|e| {
                tracing::error!(day = %day.date(), error = %e, "Backup failed");
                e
            })?;
            summary.record(outcome);
        }

        let summary = summary.with_duration(started.elapsed());
        log_sweep_complete!(
            summary.days_attempted,
            summary.days_backed_up,
            summary.duration
        );
        Ok(summary)
    }
}
