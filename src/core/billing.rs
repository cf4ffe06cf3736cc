//! Billing calculator: aggregates a client's selected records into the
//! figures printed on a document.
//!
//! All sums are exact decimal arithmetic. A run over the same sheet must
//! produce the same cents every time, so nothing here touches f64.

use crate::models::{Payment, Session};
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceTotals {
    pub session_count: usize,
    pub total_hours: Decimal,
    pub session_total: Decimal,
    pub total_due: Decimal,
}

/// Totals over the selected sessions plus the carried-forward tab.
/// Zero sessions is a valid input: the document still renders, with
/// `total_due` equal to the tab alone (which may be negative credit).
pub fn invoice_totals(sessions: &[Session], running_tab: Decimal) -> InvoiceTotals {
    let total_hours: Decimal = sessions.iter().map(|s| s.hours).sum();
    let session_total: Decimal = sessions.iter().map(|s| s.fee).sum();
    InvoiceTotals {
        session_count: sessions.len(),
        total_hours,
        session_total,
        total_due: session_total + running_tab,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentTotals {
    pub payment_count: usize,
    pub payment_total: Decimal,
}

/// Informational aggregate for the summary document, computed over the
/// full payment history. Does not feed into `total_due`.
pub fn payment_totals(payments: &[Payment]) -> PaymentTotals {
    PaymentTotals {
        payment_count: payments.len(),
        payment_total: payments.iter().map(|p| p.amount).sum(),
    }
}
