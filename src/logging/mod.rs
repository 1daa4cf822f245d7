//! Logging and observability
//!
//! Structured logging with `tracing`:
//! - Human-readable console output on stdout
//! - Optional JSON file logging with rotation
//! - Log level from configuration, overridable with `RUST_LOG`
//!
//! # Example
//!
//! ```no_run
//! use influx_backup::logging::init_logging;
//! use influx_backup::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log that a Backup File was written
///
/// # Example
///
/// ```no_run
/// use influx_backup::log_series_written;
///
/// log_series_written!("temperature", 1440, "backups/2024/2024-03-01/temperature.csv");
/// ```
#[macro_export]
macro_rules! log_series_written {
    ($series:expr, $rows:expr, $path:expr) => {
        tracing::debug!(
            series = %$series,
            rows = $rows,
            path = %$path,
            "Series written"
        );
    };
}

/// Log the completion of a sweep
///
/// # Example
///
/// ```no_run
/// use influx_backup::log_sweep_complete;
/// use std::time::Duration;
///
/// log_sweep_complete!(7, 2, Duration::from_secs(3));
/// ```
#[macro_export]
macro_rules! log_sweep_complete {
    ($attempted:expr, $backed_up:expr, $duration:expr) => {
        tracing::info!(
            days_attempted = $attempted,
            days_backed_up = $backed_up,
            duration_ms = $duration.as_millis() as u64,
            "Sweep completed"
        );
    };
}
