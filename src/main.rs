use influx_backup::cli::commands::backup::BackupArgs;
use influx_backup::cli::{Cli, Commands};
use influx_backup::config::load_config;
use influx_backup::logging::init_logging;
use clap::Parser;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logging follows the configuration when it loads; commands report a
    // broken configuration themselves
    let config = load_config(&cli.config).ok();
    let logging_config = config
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_default();
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| config.as_ref().map(|c| c.application.log_level.clone()))
        .unwrap_or_else(|| "info".to_string());

    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "influx-backup - InfluxDB daily CSV backup"
    );

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    // process::exit skips destructors; flush file logs first
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        None => BackupArgs::default().execute(&cli.config).await,
        Some(Commands::Backup(args)) => args.execute(&cli.config).await,
        Some(Commands::ValidateConfig(args)) => args.execute(&cli.config).await,
        Some(Commands::Status(args)) => args.execute(&cli.config).await,
        Some(Commands::Init(args)) => args.execute().await,
    }
}
