//! Record parser: raw workbook rows to typed records.
//!
//! Pure transformations. Any required field that cannot be coerced fails
//! the whole run with `AppError::MalformedRow` naming the range kind and
//! the offending row (1-based).

use crate::errors::{AppError, AppResult};
use crate::models::{Client, CutoffWindow, Payment, Session};
use crate::utils::date::serial_to_datetime;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// Zero-based column of the payer name within the client range.
/// `clear_payer_marker` writes back through this index.
pub const COL_PAYER_NAME: usize = 7;

const SESSION_COLS: usize = 4;
const PAYMENT_COLS: usize = 3;
const CLIENT_COLS: usize = 9;

fn malformed(kind: &'static str, row: usize, reason: String) -> AppError {
    AppError::MalformedRow {
        kind,
        row: row + 1,
        reason,
    }
}

fn cell<'a>(
    kind: &'static str,
    row_idx: usize,
    row: &'a [String],
    col: usize,
    want: usize,
) -> Result<&'a str, AppError> {
    row.get(col).map(String::as_str).ok_or_else(|| {
        malformed(
            kind,
            row_idx,
            format!("expected {want} columns, got {}", row.len()),
        )
    })
}

fn parse_serial(kind: &'static str, row: usize, raw: &str) -> AppResult<NaiveDateTime> {
    let serial: f64 = raw
        .trim()
        .parse()
        .map_err(|_| malformed(kind, row, format!("date serial '{raw}' is not numeric")))?;
    serial_to_datetime(serial)
        .ok_or_else(|| malformed(kind, row, format!("date serial '{raw}' is out of range")))
}

fn parse_decimal(kind: &'static str, row: usize, field: &str, raw: &str) -> AppResult<Decimal> {
    raw.trim()
        .parse()
        .map_err(|_| malformed(kind, row, format!("{field} '{raw}' is not numeric")))
}

pub fn parse_session(row: &[String], row_idx: usize) -> AppResult<Session> {
    const KIND: &str = "session";
    Ok(Session {
        client_name: cell(KIND, row_idx, row, 0, SESSION_COLS)?.to_string(),
        date: parse_serial(KIND, row_idx, cell(KIND, row_idx, row, 1, SESSION_COLS)?)?,
        hours: parse_decimal(
            KIND,
            row_idx,
            "hours",
            cell(KIND, row_idx, row, 2, SESSION_COLS)?,
        )?,
        fee: parse_decimal(
            KIND,
            row_idx,
            "fee",
            cell(KIND, row_idx, row, 3, SESSION_COLS)?,
        )?,
    })
}

pub fn parse_payment(row: &[String], row_idx: usize) -> AppResult<Payment> {
    const KIND: &str = "payment";
    Ok(Payment {
        client_name: cell(KIND, row_idx, row, 0, PAYMENT_COLS)?.to_string(),
        date: parse_serial(KIND, row_idx, cell(KIND, row_idx, row, 1, PAYMENT_COLS)?)?,
        amount: parse_decimal(
            KIND,
            row_idx,
            "amount",
            cell(KIND, row_idx, row, 2, PAYMENT_COLS)?,
        )?,
    })
}

pub fn parse_client(row: &[String], row_idx: usize) -> AppResult<Client> {
    const KIND: &str = "client";
    let c = |col| cell(KIND, row_idx, row, col, CLIENT_COLS);
    Ok(Client {
        name: c(0)?.to_string(),
        sequence_number: c(1)?.trim().parse().map_err(|_| {
            malformed(
                KIND,
                row_idx,
                format!("sequence number '{}' is not an integer", row[1]),
            )
        })?,
        spare_text: c(2)?.to_string(),
        spare_amount: parse_decimal(KIND, row_idx, "column D", c(3)?)?,
        subjects: c(4)?.to_string(),
        hourly_rate: parse_decimal(KIND, row_idx, "hourly rate", c(5)?)?,
        running_tab: parse_decimal(KIND, row_idx, "running tab", c(6)?)?,
        payer_name: c(7)?.to_string(),
        payer_email: c(8)?.to_string(),
    })
}

pub fn parse_sessions(rows: &[Vec<String>]) -> AppResult<Vec<Session>> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| parse_session(row, i))
        .collect()
}

pub fn parse_payments(rows: &[Vec<String>]) -> AppResult<Vec<Payment>> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| parse_payment(row, i))
        .collect()
}

pub fn parse_clients(rows: &[Vec<String>]) -> AppResult<Vec<Client>> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| parse_client(row, i))
        .collect()
}

/// The cutoff range holds two rows of one serial each: period start, then
/// period end. Start after end is rejected here, not downstream.
pub fn parse_cutoffs(rows: &[Vec<String>]) -> AppResult<CutoffWindow> {
    const KIND: &str = "cutoff";
    if rows.len() != 2 {
        return Err(AppError::Window(format!(
            "expected 2 cutoff rows, got {}",
            rows.len()
        )));
    }
    let start = parse_serial(KIND, 0, cell(KIND, 0, &rows[0], 0, 1)?)?;
    let end = parse_serial(KIND, 1, cell(KIND, 1, &rows[1], 0, 1)?)?;
    CutoffWindow::new(start, end)
}
