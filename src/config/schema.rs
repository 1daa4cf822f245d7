//! Configuration schema types
//!
//! Every section has defaults so a run can be configured from the environment
//! alone; `validate` rejects whatever the defaults cannot fill in.

use crate::config::SecretString;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration, built once at startup and passed by reference
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InfluxBackupConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// InfluxDB connection settings
    #[serde(default)]
    pub influxdb: InfluxDbConfig,

    /// Backup layout and schedule
    #[serde(default)]
    pub backup: BackupConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl InfluxBackupConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid value
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.influxdb.validate()?;
        self.backup.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// InfluxDB 1.x connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfluxDbConfig {
    /// Server host name or address
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP API port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Username for basic authentication (optional)
    #[serde(default)]
    pub username: Option<String>,

    /// Password for basic authentication (optional)
    #[serde(default)]
    pub password: Option<SecretString>,

    /// Database to back up
    #[serde(default)]
    pub database: String,

    /// Use https instead of http
    #[serde(default)]
    pub ssl: bool,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for InfluxDbConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            username: None,
            password: None,
            database: String::new(),
            ssl: false,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl InfluxDbConfig {
    /// Base URL of the HTTP API, e.g. `http://localhost:8086`
    pub fn base_url(&self) -> String {
        let scheme = if self.ssl { "https" } else { "http" };
        format!("{scheme}://{}:{}", self.host, self.port)
    }

    fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("influxdb.host cannot be empty".to_string());
        }
        if self.port == 0 {
            return Err("influxdb.port must be greater than 0".to_string());
        }
        if self.database.trim().is_empty() {
            return Err("influxdb.database cannot be empty".to_string());
        }
        if self.timeout_seconds == 0 {
            return Err("influxdb.timeout_seconds must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Largest accepted `backup.days`, ten years of daily folders
pub const MAX_BACKUP_DAYS: u32 = 3650;

/// Where backups go and which days are swept
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupConfig {
    /// Root folder; day folders are created as `<base_folder>/<year>/<YYYY-MM-DD>`
    #[serde(default = "default_base_folder")]
    pub base_folder: PathBuf,

    /// Number of complete days to sweep, most recent first
    #[serde(default = "default_days")]
    pub days: u32,

    /// IANA zone used for the query `tz()` clause and for exported timestamps
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            base_folder: default_base_folder(),
            days: default_days(),
            timezone: default_timezone(),
        }
    }
}

impl BackupConfig {
    /// Parsed timezone
    ///
    /// # Errors
    ///
    /// Returns an error if `timezone` is not a known IANA zone name
    pub fn tz(&self) -> Result<Tz, String> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| format!("Unknown backup.timezone '{}'", self.timezone))
    }

    fn validate(&self) -> Result<(), String> {
        if self.base_folder.as_os_str().is_empty() {
            return Err("backup.base_folder cannot be empty".to_string());
        }
        if self.days == 0 || self.days > MAX_BACKUP_DAYS {
            return Err(format!(
                "backup.days must be between 1 and {MAX_BACKUP_DAYS}, got {}",
                self.days
            ));
        }
        self.tz()?;
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Also write JSON logs to rotating files
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory of the rotating log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Rotation period (daily or hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err(
                "logging.local_path cannot be empty when local logging is enabled".to_string(),
            );
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    8086
}

fn default_timeout_seconds() -> u64 {
    60
}

fn default_base_folder() -> PathBuf {
    PathBuf::from("backups")
}

fn default_days() -> u32 {
    7
}

fn default_timezone() -> String {
    "Europe/Amsterdam".to_string()
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
