//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::InfluxBackupConfig;
use crate::config::secret_string;
use crate::domain::errors::BackupError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads configuration from an optional TOML file plus the environment
///
/// This function:
/// 1. Starts from built-in defaults when `path` does not exist
/// 2. Otherwise reads the file and substitutes `${VAR}` placeholders
/// 3. Parses the TOML into [`InfluxBackupConfig`]
/// 4. Applies environment variable overrides (`INFLUX_BACKUP_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - An existing file cannot be read or parsed
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use influx_backup::config::loader::load_config;
///
/// let config = load_config("influx-backup.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<InfluxBackupConfig> {
    let mut config = read_config_file(path.as_ref())?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        BackupError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Reads the TOML file, or returns defaults when it does not exist
fn read_config_file(path: &Path) -> Result<InfluxBackupConfig> {
    if !path.exists() {
        tracing::debug!(
            path = %path.display(),
            "Configuration file not found, using defaults and environment"
        );
        return Ok(InfluxBackupConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        BackupError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    toml::from_str(&contents)
        .map_err(|e| BackupError::Configuration(format!("Failed to parse TOML: {e}")))
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| BackupError::Other(format!("Invalid placeholder pattern: {e}")))?;
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&format!("${{{var_name}}}"), &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(BackupError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the INFLUX_BACKUP_* prefix
///
/// Connection settings follow `INFLUX_BACKUP_INFLUXDB_<KEY>`; backup settings
/// drop the section name (`INFLUX_BACKUP_BASE_FOLDER`, `INFLUX_BACKUP_DAYS`).
///
/// # Errors
///
/// Returns an error if a numeric or boolean override cannot be parsed
fn apply_env_overrides(config: &mut InfluxBackupConfig) -> Result<()> {
    if let Ok(val) = std::env::var("INFLUX_BACKUP_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("INFLUX_BACKUP_INFLUXDB_HOST") {
        config.influxdb.host = val;
    }
    if let Ok(val) = std::env::var("INFLUX_BACKUP_INFLUXDB_PORT") {
        config.influxdb.port = parse_override("INFLUX_BACKUP_INFLUXDB_PORT", &val)?;
    }
    if let Ok(val) = std::env::var("INFLUX_BACKUP_INFLUXDB_USERNAME") {
        config.influxdb.username = Some(val);
    }
    if let Ok(val) = std::env::var("INFLUX_BACKUP_INFLUXDB_PASSWORD") {
        config.influxdb.password = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("INFLUX_BACKUP_INFLUXDB_DATABASE") {
        config.influxdb.database = val;
    }
    if let Ok(val) = std::env::var("INFLUX_BACKUP_INFLUXDB_SSL") {
        config.influxdb.ssl = parse_override("INFLUX_BACKUP_INFLUXDB_SSL", &val)?;
    }

    if let Ok(val) = std::env::var("INFLUX_BACKUP_BASE_FOLDER") {
        config.backup.base_folder = PathBuf::from(val);
    }
    if let Ok(val) = std::env::var("INFLUX_BACKUP_DAYS") {
        config.backup.days = parse_override("INFLUX_BACKUP_DAYS", &val)?;
    }
    if let Ok(val) = std::env::var("INFLUX_BACKUP_TIMEZONE") {
        config.backup.timezone = val;
    }

    if let Ok(val) = std::env::var("INFLUX_BACKUP_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled =
            parse_override("INFLUX_BACKUP_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("INFLUX_BACKUP_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}

fn parse_override<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        BackupError::Configuration(format!("Invalid value '{value}' for {name}"))
    })
}
