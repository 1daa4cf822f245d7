//! Core backup logic
//!
//! # Modules
//!
//! - [`export`] - Range queries and conversion of points into tables
//! - [`backup`] - Backup Folders, Backup Files and the per-day driver
//! - [`schedule`] - The sweep over recent days
//!
//! # Backup Workflow
//!
//! 1. **Plan**: Yesterday and the preceding days, most recent first
//! 2. **Skip**: Days whose Backup Folder exists are left alone
//! 3. **Discover**: List every series in the database
//! 4. **Export**: Query each series for the day window in the local timezone
//! 5. **Write**: One CSV file per series in the day's folder
//!
//! # Example
//!
//! ```rust,no_run
//! use influx_backup::adapters::influxdb::InfluxDbClient;
//! use influx_backup::config::load_config;
//! use influx_backup::core::schedule::Scheduler;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("influx-backup.toml")?;
//! let client = Arc::new(InfluxDbClient::new(&config.influxdb)?);
//!
//! let scheduler = Scheduler::from_config(&config, client)?;
//! let summary = scheduler.run_sweep(chrono::Local::now().naive_local()).await?;
//!
//! println!("Backed up: {}", summary.days_backed_up);
//! println!("Skipped: {}", summary.days_skipped);
//! # Ok(())
//! # }
//! ```

pub mod backup;
pub mod export;
pub mod schedule;
