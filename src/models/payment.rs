use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

/// A payment received from a payer, as recorded in the payment range.
/// Only the summary pipeline reads these.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payment {
    pub client_name: String,
    pub date: NaiveDateTime,
    pub amount: Decimal,
}
