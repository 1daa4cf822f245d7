//! External system integrations for influx-backup.
//!
//! - [`influxdb`] - InfluxDB 1.x HTTP API
//!
//! # Design Pattern
//!
//! Adapters isolate external dependencies behind a trait so the backup logic
//! can be tested against in-memory stores:
//!
//! ```rust,no_run
//! use influx_backup::adapters::influxdb::{InfluxDbClient, TimeSeriesStore};
//! use influx_backup::config::InfluxDbConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = InfluxDbConfig {
//!     host: "localhost".to_string(),
//!     port: 8086,
//!     database: "sensors".to_string(),
//!     ..Default::default()
//! };
//!
//! let client = InfluxDbClient::new(&config)?;
//! client.ping().await?;
//! let series = client.list_series().await?;
//! # Ok(())
//! # }
//! ```

pub mod influxdb;
