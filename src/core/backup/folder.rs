//! Backup Folder layout: `<base>/<year>/<YYYY-MM-DD>`
//!
//! The existence of a day's folder is the only record that the day has been
//! backed up. No manifest or completion marker is written.

use crate::domain::Result;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};

/// Folder name format of one day
pub const DAY_FOLDER_FORMAT: &str = "%Y-%m-%d";

/// Backup Folder of the calendar day containing `day`
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use influx_backup::core::backup::folder::backup_folder;
/// use std::path::Path;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// assert_eq!(
///     backup_folder(Path::new("/backups"), day),
///     Path::new("/backups/2024/2024-03-01")
/// );
/// ```
pub fn backup_folder(base: &Path, day: NaiveDateTime) -> PathBuf {
    folder_for_date(base, day.date())
}

/// Backup Folder of a calendar date
pub fn folder_for_date(base: &Path, date: NaiveDate) -> PathBuf {
    base.join(date.year().to_string())
        .join(date.format(DAY_FOLDER_FORMAT).to_string())
}

/// Whether the day's folder exists, i.e. the day counts as backed up
pub fn is_backed_up(folder: &Path) -> bool {
    folder.exists()
}

/// Creates the day folder, and its year folder when missing
///
/// # Errors
///
/// Fails if the day folder already exists or cannot be created.
pub fn create_day_folder(folder: &Path) -> Result<()> {
    if let Some(parent) = folder.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::create_dir(folder)?;
    Ok(())
}

/// Backup Files inside a day folder, sorted by file name
///
/// # Errors
///
/// Fails if the folder cannot be read.
pub fn list_backup_files(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(folder)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "csv"))
        .collect();
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_backup_folder_is_pure() {
        let base = Path::new("base");
        let first = backup_folder(base, at(2024, 3, 1, 1));
        let second = backup_folder(base, at(2024, 3, 1, 23));
        assert_eq!(first, second);
        assert_eq!(first, Path::new("base").join("2024").join("2024-03-01"));
    }

    #[test]
    fn test_backup_folder_uses_day_year() {
        let folder = backup_folder(Path::new("b"), at(2023, 12, 31, 12));
        assert_eq!(folder, Path::new("b").join("2023").join("2023-12-31"));
    }

    #[test]
    fn test_create_day_folder() {
        let temp = TempDir::new().unwrap();
        let folder = folder_for_date(temp.path(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());

        assert!(!is_backed_up(&folder));
        create_day_folder(&folder).unwrap();
        assert!(is_backed_up(&folder));
    }

    #[test]
    fn test_create_day_folder_fails_when_present() {
        let temp = TempDir::new().unwrap();
        let folder = folder_for_date(temp.path(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());

        create_day_folder(&folder).unwrap();
        assert!(create_day_folder(&folder).is_err());
    }

    #[test]
    fn test_list_backup_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("temp.csv"), "").unwrap();
        fs::write(temp.path().join("humidity.csv"), "").unwrap();
        fs::write(temp.path().join("notes.txt"), "").unwrap();

        let files = list_backup_files(temp.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["humidity.csv", "temp.csv"]);
    }
}
