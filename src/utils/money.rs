//! Formatting helpers for currency and hour figures.

use rust_decimal::Decimal;

/// Two-decimal display for currency fields ("50.00", "-12.50").
pub fn fmt_amount(d: Decimal) -> String {
    format!("{:.2}", d)
}

/// Hour totals use the same two-decimal convention.
pub fn fmt_hours(d: Decimal) -> String {
    format!("{:.2}", d)
}
