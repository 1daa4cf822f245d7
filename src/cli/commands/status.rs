//! Status command implementation
//!
//! This module implements the `status` command, a read-only report of which
//! recent days already have a Backup Folder. The store is never contacted.

use crate::config::{load_config, MAX_BACKUP_DAYS};
use crate::core::backup::folder::{folder_for_date, is_backed_up, list_backup_files};
use crate::core::schedule::days_to_back_up;
use crate::domain::Result;
use chrono::{NaiveDate, NaiveDateTime};
use clap::Args;
use std::path::{Path, PathBuf};

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Number of days to report, counting back from yesterday
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_BACKUP_DAYS as i64))]
    pub days: Option<u32>,
}

/// Backup state of one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayStatus {
    pub date: NaiveDate,
    pub folder: PathBuf,
    pub backed_up: bool,
    pub files: usize,
}

impl StatusArgs {
    /// Execute the status command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Checking backup status");

        println!("📊 Backup Status");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let days = self.days.unwrap_or(config.backup.days);
        let now = chrono::Local::now().naive_local();
        let statuses = match collect_status(&config.backup.base_folder, now, days) {
            Ok(s) => s,
            Err(e) => {
                println!("❌ Failed to read backup folders");
                println!("   Error: {e}");
                return Ok(5); // Fatal error exit code
            }
        };

        println!("Base folder: {}", config.backup.base_folder.display());
        println!();
        println!("{:<12} {:<12} {:>6}", "Date", "Status", "Files");
        println!("{}", "-".repeat(32));
        for status in &statuses {
            let state = if status.backed_up { "backed up" } else { "missing" };
            println!("{:<12} {:<12} {:>6}", status.date, state, status.files);
        }
        println!();

        let missing = statuses.iter().filter(|s| !s.backed_up).count();
        if missing == 0 {
            println!("✅ All {} days are backed up", statuses.len());
        } else {
            println!("⚠️  {missing} of {} days have no backup yet", statuses.len());
        }

        Ok(0)
    }
}

/// Reports the Backup Folder of each day a sweep at `now` would cover
///
/// # Errors
///
/// Fails if an existing day folder cannot be listed.
pub fn collect_status(base: &Path, now: NaiveDateTime, days: u32) -> Result<Vec<DayStatus>> {
    days_to_back_up(now, days)
        .into_iter()
        .map(|day| -> Result<DayStatus> {
            let date = day.date();
            let folder = folder_for_date(base, date);
            let backed_up = is_backed_up(&folder);
            let files = if backed_up {
                list_backup_files(&folder)?.len()
            } else {
                0
            };
            Ok(DayStatus {
                date,
                folder,
                backed_up,
                files,
            })
        })
        .collect()
}
