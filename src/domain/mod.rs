//! Domain models and types for influx-backup.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`SeriesName`])
//! - **Tabular data** ([`Table`], [`FieldValue`])
//! - **Day windows** ([`DayWindow`])
//! - **Error types** ([`BackupError`], [`StoreError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, BackupError>`]:
//!
//! ```rust
//! use influx_backup::domain::{BackupError, Result};
//! use influx_backup::domain::SeriesName;
//!
//! fn example() -> Result<SeriesName> {
//!     SeriesName::new("temperature").map_err(BackupError::Validation)
//! }
//! ```

pub mod errors;
pub mod ids;
pub mod result;
pub mod table;
pub mod window;

// Re-export commonly used types for convenience
pub use errors::{BackupError, StoreError};
pub use ids::SeriesName;
pub use result::Result;
pub use table::{FieldValue, Table};
pub use window::DayWindow;
