//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for influx-backup using clap.
//! Running without a subcommand performs the default sweep.

pub mod commands;

use clap::{Parser, Subcommand};

/// influx-backup - daily CSV backups of an InfluxDB database
#[derive(Parser, Debug)]
#[command(name = "influx-backup")]
#[command(version, about, long_about = None)]
#[command(author = "Influx Backup Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(
        short,
        long,
        default_value = "influx-backup.toml",
        env = "INFLUX_BACKUP_CONFIG",
        global = true
    )]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "INFLUX_BACKUP_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Subcommand to execute; defaults to `backup`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Back up the most recent complete days that have no Backup Folder yet
    Backup(commands::backup::BackupArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Show which recent days are already backed up
    Status(commands::status::StatusArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_subcommand() {
        let cli = Cli::parse_from(["influx-backup"]);
        assert_eq!(cli.config, "influx-backup.toml");
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_backup_overrides() {
        let cli = Cli::parse_from([
            "influx-backup",
            "backup",
            "--days",
            "3",
            "--base-folder",
            "/srv/backups",
        ]);
        match cli.command {
            Some(Commands::Backup(args)) => {
                assert_eq!(args.days, Some(3));
                assert_eq!(
                    args.base_folder,
                    Some(std::path::PathBuf::from("/srv/backups"))
                );
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["influx-backup", "--config", "custom.toml", "backup"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_global_config_after_subcommand() {
        let cli = Cli::parse_from(["influx-backup", "status", "--config", "other.toml"]);
        assert_eq!(cli.config, "other.toml");
        assert!(matches!(cli.command, Some(Commands::Status(_))));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["influx-backup", "--log-level", "debug"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["influx-backup", "validate-config"]);
        assert!(matches!(cli.command, Some(Commands::ValidateConfig(_))));
    }

    #[test]
    fn test_cli_parse_status_days() {
        let cli = Cli::parse_from(["influx-backup", "status", "--days", "14"]);
        match cli.command {
            Some(Commands::Status(args)) => assert_eq!(args.days, Some(14)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["influx-backup", "init", "--force"]);
        match cli.command {
            Some(Commands::Init(args)) => {
                assert!(args.force);
                assert_eq!(args.output, "influx-backup.toml");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_zero_days() {
        assert!(Cli::try_parse_from(["influx-backup", "backup", "--days", "0"]).is_err());
    }

    #[test]
    fn test_cli_rejects_days_above_limit() {
        assert!(Cli::try_parse_from(["influx-backup", "backup", "--days", "3650"]).is_ok());
        assert!(Cli::try_parse_from(["influx-backup", "backup", "--days", "100000000"]).is_err());
        assert!(Cli::try_parse_from(["influx-backup", "status", "--days", "3651"]).is_err());
    }
}
