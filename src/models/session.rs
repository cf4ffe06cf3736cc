use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

/// One tutoring session as recorded in the workbook session range.
/// Immutable once parsed; the date keeps any sub-day fraction carried
/// by the serial value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    pub client_name: String,
    pub date: NaiveDateTime,
    pub hours: Decimal,
    pub fee: Decimal,
}
