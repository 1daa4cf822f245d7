//! Backup command implementation
//!
//! This module implements the `backup` command, also run when no subcommand
//! is given: a sweep over the most recent complete days.

use crate::adapters::influxdb::InfluxDbClient;
use crate::config::{load_config, InfluxBackupConfig, MAX_BACKUP_DAYS};
use crate::core::backup::SweepSummary;
use crate::core::schedule::Scheduler;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the backup command
#[derive(Args, Debug, Default)]
pub struct BackupArgs {
    /// Number of days to sweep, counting back from yesterday
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_BACKUP_DAYS as i64))]
    pub days: Option<u32>,

    /// Override the base folder backups are written under
    #[arg(long)]
    pub base_folder: Option<PathBuf>,
}

impl BackupArgs {
    /// Execute the backup command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting backup command");

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        self.apply_overrides(&mut config);

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        let client = match InfluxDbClient::new(&config.influxdb) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create InfluxDB client");
                eprintln!("Failed to create InfluxDB client: {e}");
                return Ok(2);
            }
        };

        if let Err(e) = client.ping().await {
            tracing::error!(error = %e, base_url = %client.base_url(), "InfluxDB is not reachable");
            eprintln!("Failed to connect to InfluxDB at {}: {e}", client.base_url());
            return Ok(4); // Connection error exit code
        }

        let scheduler = match Scheduler::from_config(&config, Arc::new(client)) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Configuration error: {e}");
                return Ok(2);
            }
        };

        let now = chrono::Local::now().naive_local();
        let summary = match scheduler.run_sweep(now).await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Backup failed");
                eprintln!("Backup failed: {e}");
                return Ok(5); // Fatal error exit code
            }
        };

        print_summary(&summary);
        Ok(0)
    }

    fn apply_overrides(&self, config: &mut InfluxBackupConfig) {
        if let Some(days) = self.days {
            tracing::info!(days = days, "Overriding days from CLI");
            config.backup.days = days;
        }
        if let Some(base_folder) = &self.base_folder {
            tracing::info!(base_folder = %base_folder.display(), "Overriding base folder from CLI");
            config.backup.base_folder = base_folder.clone();
        }
    }
}

fn print_summary(summary: &SweepSummary) {
    println!();
    println!("📊 Backup Summary:");
    println!("  Days Attempted: {}", summary.days_attempted);
    println!("  Days Backed Up: {}", summary.days_backed_up);
    println!("  Days Skipped: {}", summary.days_skipped);
    println!("  Series Files Written: {}", summary.series_written);
    println!("  Rows Written: {}", summary.rows_written);
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
    println!();
    println!("✅ Backup completed successfully!");
}
