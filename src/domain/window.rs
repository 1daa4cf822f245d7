//! Day windows used to bound range queries
//!
//! A window starts at the local midnight of the target day and ends exactly
//! 24 hours later. The bounds are naive wall-clock times; they are rendered as
//! `Z`-suffixed literals and the store interprets them through the `tz()`
//! clause of the range query.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

/// Rendering of a window bound inside a range query
pub const QUERY_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// `[midnight, midnight + 24h]` for one calendar day
///
/// Range queries compare inclusively on both ends, so the end instant of one
/// day's window is also the start instant of the next day's window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl DayWindow {
    /// Window of the calendar day containing `day`
    ///
    /// The time-of-day part of `day` is discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use influx_backup::domain::DayWindow;
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 3, 1)
    ///     .unwrap()
    ///     .and_hms_opt(14, 5, 9)
    ///     .unwrap();
    /// let window = DayWindow::for_day(day);
    /// assert_eq!(window.start_literal(), "2024-03-01T00:00:00Z");
    /// assert_eq!(window.end_literal(), "2024-03-02T00:00:00Z");
    /// ```
    pub fn for_day(day: NaiveDateTime) -> Self {
        Self::for_date(day.date())
    }

    /// Window of a calendar date
    pub fn for_date(date: NaiveDate) -> Self {
        let start = date.and_time(NaiveTime::MIN);
        Self {
            start,
            end: start + Duration::hours(24),
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Start bound as sent to the store
    pub fn start_literal(&self) -> String {
        self.start.format(QUERY_TIME_FORMAT).to_string()
    }

    /// End bound as sent to the store
    pub fn end_literal(&self) -> String {
        self.end.format(QUERY_TIME_FORMAT).to_string()
    }

    /// Whether `instant` falls inside the window, both bounds included
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant <= self.end
    }
}

impl fmt::Display for DayWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start_literal(), self.end_literal())
    }
}
