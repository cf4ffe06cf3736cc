//! Selector: narrows the parsed record set to one client and one billing
//! period, and discovers which clients are due when no names are given.
//!
//! Name matching is exact and case-sensitive; source order is preserved.

use crate::errors::{AppError, AppResult};
use crate::models::{Client, CutoffWindow, Payment, Session};
use std::collections::BTreeSet;

pub fn sessions_for(client_name: &str, all_sessions: &[Session]) -> Vec<Session> {
    all_sessions
        .iter()
        .filter(|s| s.client_name == client_name)
        .cloned()
        .collect()
}

pub fn payments_for(client_name: &str, all_payments: &[Payment]) -> Vec<Payment> {
    all_payments
        .iter()
        .filter(|p| p.client_name == client_name)
        .cloned()
        .collect()
}

/// Sessions inside the current billing period. Half-open: a session
/// exactly on the end date is excluded, exactly on the start included.
pub fn in_window(sessions: &[Session], window: &CutoffWindow) -> Vec<Session> {
    sessions
        .iter()
        .filter(|s| window.contains(s.date))
        .cloned()
        .collect()
}

/// Sessions strictly before the period, for carry-forward history.
pub fn past(sessions: &[Session], window: &CutoffWindow) -> Vec<Session> {
    sessions
        .iter()
        .filter(|s| window.precedes(s.date))
        .cloned()
        .collect()
}

/// Clients with at least one session in the window. Sorted so a run is
/// deterministic regardless of sheet order.
pub fn clients_active_in_window(all_sessions: &[Session], window: &CutoffWindow) -> Vec<String> {
    let names: BTreeSet<&str> = all_sessions
        .iter()
        .filter(|s| window.contains(s.date))
        .map(|s| s.client_name.as_str())
        .collect();
    names.into_iter().map(str::to_string).collect()
}

pub fn find_client<'a>(name: &str, clients: &'a [Client]) -> AppResult<&'a Client> {
    clients
        .iter()
        .find(|c| c.name == name)
        .ok_or_else(|| AppError::ClientNotFound(name.to_string()))
}
