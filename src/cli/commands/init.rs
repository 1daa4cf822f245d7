//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "influx-backup.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing influx-backup configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Create a .env file with your credentials:");
                println!("     - INFLUX_BACKUP_INFLUXDB_USERNAME");
                println!("     - INFLUX_BACKUP_INFLUXDB_PASSWORD");
                println!("  3. Validate configuration: influx-backup validate-config");
                println!("  4. Run a backup: influx-backup");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }
}

/// Sample configuration with every setting at its default
pub fn sample_config() -> &'static str {
    r#"# influx-backup configuration
# Every value can also be set through INFLUX_BACKUP_* environment variables.

[application]
log_level = "info"  # trace | debug | info | warn | error

[influxdb]
host = "localhost"
port = 8086
database = "telemetry"
ssl = false
timeout_seconds = 60

# Credentials are best kept out of this file:
# set INFLUX_BACKUP_INFLUXDB_USERNAME and INFLUX_BACKUP_INFLUXDB_PASSWORD,
# or reference them here as "${MY_VAR}".
# username = "${INFLUX_USERNAME}"
# password = "${INFLUX_PASSWORD}"

[backup]
base_folder = "backups"       # day folders go to <base_folder>/<year>/<YYYY-MM-DD>
days = 7                      # yesterday and the 6 days before it
timezone = "Europe/Amsterdam"

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"  # daily | hourly
"#
}
