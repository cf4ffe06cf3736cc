//! Plain computed-field records handed to the PDF builder.
//!
//! The arithmetic lives in `core::billing`; everything here is already
//! final and the renderer never recomputes a number, so the calculator can
//! be tested without ever touching a PDF.

use crate::core::billing::{InvoiceTotals, PaymentTotals};
use crate::models::{Client, Payment, Session};
use crate::utils::date::month_day_short;
use rust_decimal::Decimal;

/// Invoice filename tag: `INV-<number>_<initials>.pdf`.
pub const INVOICE_TAG: &str = "INV";
/// Summary filename tag: `SUM-<period>_<initials>.pdf`.
pub const SUMMARY_TAG: &str = "SUM";

#[derive(Debug, Clone)]
pub struct SessionRow {
    pub date: String,
    pub hours: String,
    pub fee: String,
}

#[derive(Debug, Clone)]
pub struct PaymentRow {
    pub date: String,
    pub amount: String,
}

#[derive(Debug, Clone)]
pub struct InvoiceDocument {
    pub invoice_number: String,
    pub client_name: String,
    pub subjects: String,
    pub hourly_rate: Decimal,
    pub running_tab: Decimal,
    pub totals: InvoiceTotals,
    pub rows: Vec<SessionRow>,
    pub filename: String,
}

#[derive(Debug, Clone)]
pub struct SummaryDocument {
    pub client_name: String,
    pub subjects: String,
    pub hourly_rate: Decimal,
    pub semester: String,
    pub session_rows: Vec<SessionRow>,
    pub payment_rows: Vec<PaymentRow>,
    pub sessions: InvoiceTotals,
    pub payments: PaymentTotals,
    pub filename: String,
}

fn session_rows(sessions: &[Session]) -> Vec<SessionRow> {
    sessions
        .iter()
        .map(|s| SessionRow {
            date: month_day_short(&s.date),
            hours: s.hours.to_string(),
            fee: s.fee.to_string(),
        })
        .collect()
}

pub fn build_invoice_document(
    client: &Client,
    invoice_number: &str,
    sessions: &[Session],
    totals: InvoiceTotals,
) -> InvoiceDocument {
    InvoiceDocument {
        invoice_number: invoice_number.to_string(),
        client_name: client.name.clone(),
        subjects: client.subjects.clone(),
        hourly_rate: client.hourly_rate,
        running_tab: client.running_tab,
        totals,
        rows: session_rows(sessions),
        filename: format!(
            "{INVOICE_TAG}-{invoice_number}_{}.pdf",
            initials(&client.name)
        ),
    }
}

pub fn build_summary_document(
    client: &Client,
    semester: &str,
    sessions: &[Session],
    payments: &[Payment],
    session_totals: InvoiceTotals,
    payment_totals: PaymentTotals,
) -> SummaryDocument {
    SummaryDocument {
        client_name: client.name.clone(),
        subjects: client.subjects.clone(),
        hourly_rate: client.hourly_rate,
        semester: semester.to_string(),
        session_rows: session_rows(sessions),
        payment_rows: payments
            .iter()
            .map(|p| PaymentRow {
                date: month_day_short(&p.date),
                amount: p.amount.to_string(),
            })
            .collect(),
        sessions: session_totals,
        payments: payment_totals,
        filename: format!(
            "{SUMMARY_TAG}-{}_{}.pdf",
            semester_code(semester),
            initials(&client.name)
        ),
    }
}

/// First letter of each whitespace-delimited name token, uppercased.
/// Purely a human-readable document identifier; the invoice counter is
/// the unique key, so collisions are fine.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Short code for a semester title: first letter plus the last four
/// characters, "Fall 2025" -> "F2025".
pub fn semester_code(title: &str) -> String {
    let chars: Vec<char> = title.chars().collect();
    let Some(first) = chars.first() else {
        return String::new();
    };
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{first}{tail}")
}
