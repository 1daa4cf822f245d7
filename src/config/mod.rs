//! Configuration management for influx-backup.
//!
//! All process-wide settings live in one [`InfluxBackupConfig`] built at
//! startup and passed to the components that need them. Sources, lowest
//! precedence first:
//!
//! 1. Built-in defaults
//! 2. An optional TOML file (with `${VAR_NAME}` substitution)
//! 3. `INFLUX_BACKUP_*` environment variables (a `.env` file is loaded first)
//!
//! # Example Configuration
//!
//! ```toml
//! [influxdb]
//! host = "localhost"
//! port = 8086
//! username = "backup"
//! password = "${INFLUXDB_PASSWORD}"
//! database = "sensors"
//!
//! [backup]
//! base_folder = "/srv/backups/influx"
//! days = 7
//! timezone = "Europe/Amsterdam"
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use influx_backup::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("influx-backup.toml")?;
//! println!("InfluxDB: {}", config.influxdb.base_url());
//! println!("Backups: {}", config.backup.base_folder.display());
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, BackupConfig, InfluxBackupConfig, InfluxDbConfig, LoggingConfig,
    MAX_BACKUP_DAYS,
};
pub use secret::{secret_string, SecretString, SecretValue};
