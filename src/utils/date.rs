//! Spreadsheet serial date handling and civil-date display.
//!
//! The workbook encodes dates as a day count from the spreadsheet epoch
//! (day 0 = 1899-12-30). Fractional days carry sub-day precision and are
//! kept; there is no time zone handling anywhere.

use chrono::{Duration, NaiveDate, NaiveDateTime};

fn serial_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1899, 12, 30)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Convert a non-negative serial day count to a date.
/// Returns `None` for negative, non-finite, or out-of-range serials.
pub fn serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }

    let days = serial.trunc() as i64;
    let secs = ((serial - serial.trunc()) * 86_400.0).round() as i64;

    serial_epoch()
        .checked_add_signed(Duration::try_days(days)?)?
        .checked_add_signed(Duration::try_seconds(secs)?)
}

/// "September 3", used in email bodies.
pub fn month_day_long(d: &NaiveDateTime) -> String {
    d.format("%B %-d").to_string()
}

/// "Sep 3", used in document table rows.
pub fn month_day_short(d: &NaiveDateTime) -> String {
    d.format("%b %-d").to_string()
}

/// "September 3, 2025", the issue date printed on a document.
pub fn full_date(d: &NaiveDate) -> String {
    d.format("%B %-d, %Y").to_string()
}
