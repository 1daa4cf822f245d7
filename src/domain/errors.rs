//! Domain error types
//!
//! This module defines the error hierarchy for influx-backup.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main influx-backup error type
///
/// Every failure in a sweep surfaces as one of these variants and aborts the run.
#[derive(Debug, Error)]
pub enum BackupError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Time-series store errors
    #[error("InfluxDB error: {0}")]
    Store(#[from] StoreError),

    /// Unexpected record shape or malformed timestamp
    #[error("Parse error: {0}")]
    Parse(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Errors raised while talking to the time-series store
///
/// These errors don't expose third-party HTTP client types.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to reach the server
    #[error("Failed to connect to InfluxDB: {0}")]
    ConnectionFailed(String),

    /// Credentials were rejected
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The server reported an error for a statement
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Response body could not be understood
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Timeout
    #[error("Request timeout: {0}")]
    Timeout(String),
}

impl BackupError {
    /// Whether the error comes from reaching or authenticating against the store
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            BackupError::Store(StoreError::ConnectionFailed(_))
                | BackupError::Store(StoreError::AuthenticationFailed(_))
                | BackupError::Store(StoreError::Timeout(_))
        )
    }
}

impl From<std::io::Error> for BackupError {
    fn from(err: std::io::Error) -> Self {
        BackupError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BackupError {
    fn from(err: serde_json::Error) -> Self {
        BackupError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for BackupError {
    fn from(err: toml::de::Error) -> Self {
        BackupError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<csv::Error> for BackupError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            BackupError::Io(err.to_string())
        } else {
            BackupError::Serialization(err.to_string())
        }
    }
}
