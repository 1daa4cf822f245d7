//! Outcomes of backing up days

use std::path::PathBuf;
use std::time::Duration;

/// What happened to one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayOutcome {
    /// The Backup Folder already existed; nothing was queried or written
    Skipped { folder: PathBuf },

    /// The folder was created and one file per series written
    BackedUp {
        folder: PathBuf,
        series: usize,
        rows: usize,
    },
}

impl DayOutcome {
    pub fn folder(&self) -> &PathBuf {
        match self {
            DayOutcome::Skipped { folder } | DayOutcome::BackedUp { folder, .. } => folder,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, DayOutcome::Skipped { .. })
    }
}

/// Summary of a completed sweep
///
/// A sweep that fails produces an error instead, so every summary describes a
/// run in which all attempted days were either skipped or backed up.
#[derive(Debug, Clone, Default)]
pub struct SweepSummary {
    pub days_attempted: usize,
    pub days_backed_up: usize,
    pub days_skipped: usize,
    pub series_written: usize,
    pub rows_written: usize,
    pub duration: Duration,
    pub outcomes: Vec<DayOutcome>,
}

impl SweepSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one day's outcome
    pub fn record(&mut self, outcome: DayOutcome) {
        self.days_attempted += 1;
        match &outcome {
            DayOutcome::Skipped { .. } => self.days_skipped += 1,
            DayOutcome::BackedUp { series, rows, .. } => {
                self.days_backed_up += 1;
                self.series_written += series;
                self.rows_written += rows;
            }
        }
        self.outcomes.push(outcome);
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}
