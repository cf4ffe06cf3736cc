use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;

/// The billing period as a half-open interval `[start, end)`.
/// One window per workbook; sessions on the end date are excluded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutoffWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl CutoffWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> AppResult<Self> {
        if start > end {
            return Err(AppError::Window(format!(
                "start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Membership in the current billing period: `start <= d < end`.
    pub fn contains(&self, d: NaiveDateTime) -> bool {
        self.start <= d && d < self.end
    }

    /// True for dates strictly before the period (carry-forward history).
    pub fn precedes(&self, d: NaiveDateTime) -> bool {
        d < self.start
    }
}
