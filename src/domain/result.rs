//! Result type alias for influx-backup
//!
//! This module provides a convenient Result type alias that uses BackupError
//! as the error type.

use super::errors::BackupError;

/// Result type alias for influx-backup operations
///
/// # Examples
///
/// ```
/// use influx_backup::domain::result::Result;
/// use influx_backup::domain::errors::BackupError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(BackupError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, BackupError>;
