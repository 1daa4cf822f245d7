//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the influx-backup configuration.

use crate::config::{load_config, InfluxBackupConfig};
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration: {config_path}");
        println!();

        // load_config validates as well
        match load_config(config_path) {
            Ok(config) => {
                println!("✅ Configuration is valid");
                println!();
                for line in summary_lines(&config) {
                    println!("{line}");
                }
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                println!();
                Ok(2) // Configuration error exit code
            }
        }
    }
}

/// Configuration summary with credentials redacted
fn summary_lines(config: &InfluxBackupConfig) -> Vec<String> {
    let influx = &config.influxdb;
    vec![
        "Configuration Summary:".to_string(),
        format!("  Log Level: {}", config.application.log_level),
        format!("  InfluxDB Server: {}", influx.base_url()),
        format!("  Database: {}", influx.database),
        format!(
            "  Username: {}",
            influx.username.as_deref().unwrap_or("(none)")
        ),
        format!(
            "  Password: {}",
            if influx.password.is_some() { "***" } else { "(none)" }
        ),
        format!("  Request Timeout: {}s", influx.timeout_seconds),
        format!("  Base Folder: {}", config.backup.base_folder.display()),
        format!("  Days: {}", config.backup.days),
        format!("  Timezone: {}", config.backup.timezone),
        format!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                format!("{} ({})", config.logging.local_path, config.logging.local_rotation)
            } else {
                "disabled".to_string()
            }
        ),
    ]
}
