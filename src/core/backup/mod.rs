//! Persisting day exports to disk
//!
//! - [`folder`] - Backup Folder layout and the exists-means-done check
//! - [`backup_file`] - Backup File (CSV) writing and reading
//! - [`driver`] - the per-day backup with its idempotent skip
//! - [`summary`] - day outcomes and sweep totals

pub mod backup_file;
pub mod driver;
pub mod folder;
pub mod summary;

pub use backup_file::{read_backup_file, write_table};
pub use driver::BackupDriver;
pub use folder::{backup_folder, is_backed_up};
pub use summary::{DayOutcome, SweepSummary};
