//! # influx-backup - daily CSV backups of an InfluxDB database
//!
//! influx-backup copies the most recent complete days of every measurement
//! in an InfluxDB 1.x database into plain CSV files, one folder per day.
//!
//! ## Overview
//!
//! - **Discovering** every series with `SHOW MEASUREMENTS`
//! - **Querying** each series for one local calendar day
//! - **Writing** one Backup File per series under `<base>/<year>/<YYYY-MM-DD>`
//! - **Skipping** days whose folder already exists, so runs can be repeated
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Export, backup folders and the day sweep
//! - [`adapters`] - The InfluxDB HTTP client behind [`adapters::influxdb::TimeSeriesStore`]
//! - [`domain`] - Tables, day windows, identifiers and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use influx_backup::adapters::influxdb::InfluxDbClient;
//! use influx_backup::config::load_config;
//! use influx_backup::core::schedule::Scheduler;
//! use std::sync::Arc;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("influx-backup.toml")?;
//!     let client = Arc::new(InfluxDbClient::new(&config.influxdb)?);
//!
//!     let summary = Scheduler::from_config(&config, client)?
//!         .run_sweep(chrono::Local::now().naive_local())
//!         .await?;
//!
//!     println!("Backed up {} days", summary.days_backed_up);
//!     Ok(())
//! }
//! ```
//!
//! ## Reading a backup
//!
//! ```rust,no_run
//! use influx_backup::core::backup::read_backup_file;
//! use std::path::Path;
//!
//! # fn example() -> influx_backup::domain::Result<()> {
//! let table = read_backup_file(
//!     Path::new("backups/2024/2024-03-01/temperature.csv"),
//!     chrono_tz::Europe::Amsterdam,
//! )?;
//! println!("{} rows", table.len());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
