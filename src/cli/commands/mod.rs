//! CLI command implementations
//!
//! Each command returns the process exit code: `0` success, `2` configuration
//! error, `4` connection error, `5` fatal error.

pub mod backup;
pub mod init;
pub mod status;
pub mod validate;
