//! Domain identifier types with validation
//!
//! Newtype wrappers keep series names from being mixed up with arbitrary strings
//! such as folder names or query text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name of one measurement (series) in the store
///
/// Series names are discovered from the store, never configured, and are used
/// verbatim as the Backup File stem (`<name>.csv`).
///
/// # Examples
///
/// ```
/// use influx_backup::domain::ids::SeriesName;
/// use std::str::FromStr;
///
/// let name = SeriesName::from_str("temperature").unwrap();
/// assert_eq!(name.as_str(), "temperature");
/// assert_eq!(name.file_name(), "temperature.csv");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeriesName(String);

impl SeriesName {
    /// Creates a new SeriesName
    ///
    /// # Returns
    ///
    /// Returns `Err` if the name is empty
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.is_empty() {
            return Err("Series name cannot be empty".to_string());
        }
        Ok(Self(name))
    }

    /// Returns the series name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of this series' Backup File
    pub fn file_name(&self) -> String {
        format!("{}.csv", self.0)
    }

    /// Name quoted as an InfluxQL identifier
    pub fn quoted(&self) -> String {
        let escaped = self.0.replace('\\', "\\\\").replace('"', "\\\"");
        format!("\"{escaped}\"")
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SeriesName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SeriesName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for SeriesName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_name_valid() {
        let name = SeriesName::new("humidity").unwrap();
        assert_eq!(name.as_str(), "humidity");
        assert_eq!(name.to_string(), "humidity");
        assert_eq!(name.into_inner(), "humidity");
    }

    #[test]
    fn test_series_name_empty() {
        assert!(SeriesName::new("").is_err());
    }

    #[test]
    fn test_series_name_file_name() {
        let name = SeriesName::new("living room").unwrap();
        assert_eq!(name.file_name(), "living room.csv");
    }

    #[test]
    fn test_series_name_quoted_escapes() {
        let name = SeriesName::new(r#"odd"name\x"#).unwrap();
        assert_eq!(name.quoted(), r#""odd\"name\\x""#);

        let plain = SeriesName::new("temp").unwrap();
        assert_eq!(plain.quoted(), "\"temp\"");
    }
}
