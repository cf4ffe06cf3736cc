//! Per-client pipeline driver: fetch → parse → select → compute → render →
//! send → mutate workbook.
//!
//! Clients are processed strictly one at a time; the invoice counter is a
//! single shared cell with no concurrency control, so there is nothing to
//! parallelize safely. One client's failure is reported and the batch moves
//! on; the run then exits nonzero naming the failures.

use crate::config::Config;
use crate::core::{billing, parse, select};
use crate::errors::{AppError, AppResult};
use crate::mail::{Mailer, OutgoingEmail, message};
use crate::models::client::PAYER_MARKER;
use crate::models::{Client, CutoffWindow, Payment, Session};
use crate::render::{document, pdf};
use crate::sheet::{InvoiceCounter, Spreadsheet};
use crate::ui::messages::{banner, error, step, step_done, success, warning};
use rust_decimal::Decimal;
use std::fs;
use std::path::PathBuf;

pub struct Pipeline<'a> {
    sheet: &'a mut dyn Spreadsheet,
    mailer: &'a dyn Mailer,
    cfg: &'a Config,
    dry_run: bool,
}

struct InvoiceData {
    sessions: Vec<Session>,
    clients: Vec<Client>,
    window: CutoffWindow,
}

struct SummaryData {
    sessions: Vec<Session>,
    clients: Vec<Client>,
    payments: Vec<Payment>,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        sheet: &'a mut dyn Spreadsheet,
        mailer: &'a dyn Mailer,
        cfg: &'a Config,
        dry_run: bool,
    ) -> Self {
        Self {
            sheet,
            mailer,
            cfg,
            dry_run,
        }
    }

    /// Invoice batch. With no names, every client with a session in the
    /// cutoff window is due.
    pub fn run_invoices(&mut self, names: &[String]) -> AppResult<()> {
        step("Pulling info");
        let data = InvoiceData {
            sessions: parse::parse_sessions(&self.sheet.read_range(&self.cfg.ranges.sessions)?)?,
            clients: parse::parse_clients(&self.sheet.read_range(&self.cfg.ranges.clients)?)?,
            window: parse::parse_cutoffs(&self.sheet.read_range(&self.cfg.ranges.cutoffs)?)?,
        };
        let mut counter = InvoiceCounter::read(&*self.sheet, &self.cfg.ranges.counter)?;
        step_done();

        let targets = if names.is_empty() {
            select::clients_active_in_window(&data.sessions, &data.window)
        } else {
            names.to_vec()
        };
        if targets.is_empty() {
            warning("No clients with sessions in the current billing window.");
            return Ok(());
        }

        let mut failed = Vec::new();
        for name in &targets {
            banner(name);
            if let Err(e) = self.send_invoice(name, &data, &mut counter) {
                error(format!("{name}: {e}"));
                failed.push(name.clone());
            }
            println!();
        }
        batch_outcome(failed, targets.len())
    }

    /// Summary batch over the full history. With no names, every client in
    /// the client range gets one.
    pub fn run_summaries(&mut self, names: &[String]) -> AppResult<()> {
        step("Pulling info");
        let data = SummaryData {
            sessions: parse::parse_sessions(&self.sheet.read_range(&self.cfg.ranges.sessions)?)?,
            clients: parse::parse_clients(&self.sheet.read_range(&self.cfg.ranges.clients)?)?,
            payments: parse::parse_payments(&self.sheet.read_range(&self.cfg.ranges.payments)?)?,
        };
        step_done();

        let targets: Vec<String> = if names.is_empty() {
            data.clients.iter().map(|c| c.name.clone()).collect()
        } else {
            names.to_vec()
        };
        if targets.is_empty() {
            warning("No clients in the workbook.");
            return Ok(());
        }

        let mut failed = Vec::new();
        for name in &targets {
            banner(name);
            if let Err(e) = self.send_summary(name, &data) {
                error(format!("{name}: {e}"));
                failed.push(name.clone());
            }
            println!();
        }
        batch_outcome(failed, targets.len())
    }

    fn send_invoice(
        &mut self,
        name: &str,
        data: &InvoiceData,
        counter: &mut InvoiceCounter,
    ) -> AppResult<()> {
        let client = select::find_client(name, &data.clients)?;
        let mine = select::sessions_for(name, &data.sessions);
        let current = select::in_window(&mine, &data.window);
        // Zero sessions still produces a document: total due is the tab.
        let totals = billing::invoice_totals(&current, client.running_tab);

        step("Writing pdf");
        let number = counter.display();
        let doc = document::build_invoice_document(client, &number, &current, totals);
        let bytes = pdf::render_invoice(&doc, &self.cfg.sender);
        let folder = PathBuf::from(&self.cfg.output_dir).join(self.sheet.title());
        fs::create_dir_all(&folder)?;
        let path = folder.join(&doc.filename);
        fs::write(&path, &bytes)?;
        step_done();

        if self.dry_run {
            counter.advance();
            success(format!("Dry run: wrote {}", path.display()));
            return Ok(());
        }

        step("Sending email");
        let client_first = client.name.split_whitespace().next().unwrap_or(&client.name);
        let email = OutgoingEmail {
            to: client.payer_email.clone(),
            subject: message::invoice_subject(&client.name),
            body: message::invoice_body(
                client.payer_first_name(),
                client_first,
                &data.window,
                client.payer_has_marker(),
                &self.cfg.sender.name,
            ),
            attachment_name: doc.filename.clone(),
            attachment: bytes,
        };
        self.mailer.send(&email)?;
        step_done();

        // The send and the two writes below are not atomic; a crash in
        // between leaves them out of sync.
        if client.payer_has_marker() {
            step("Updating payer");
            clear_payer_marker(self.sheet, &self.cfg.ranges.clients, &client.payer_name)?;
            step_done();
        }
        counter.bump(self.sheet, &self.cfg.ranges.counter)?;
        success("Invoice complete!");
        Ok(())
    }

    fn send_summary(&mut self, name: &str, data: &SummaryData) -> AppResult<()> {
        let client = select::find_client(name, &data.clients)?;
        let mine = select::sessions_for(name, &data.sessions);
        let my_payments = select::payments_for(name, &data.payments);
        let totals = billing::invoice_totals(&mine, Decimal::ZERO);
        let pay_totals = billing::payment_totals(&my_payments);

        step("Writing pdf");
        let semester = self.sheet.title().to_string();
        let doc = document::build_summary_document(
            client,
            &semester,
            &mine,
            &my_payments,
            totals,
            pay_totals,
        );
        let bytes = pdf::render_summary(&doc, &self.cfg.sender);
        let folder = PathBuf::from(&self.cfg.output_dir);
        fs::create_dir_all(&folder)?;
        let path = folder.join(&doc.filename);
        fs::write(&path, &bytes)?;
        step_done();

        if self.dry_run {
            success(format!("Dry run: wrote {}", path.display()));
            return Ok(());
        }

        step("Sending email");
        let email = OutgoingEmail {
            to: client.payer_email.clone(),
            subject: message::summary_subject(&client.name, &semester),
            body: message::summary_body(
                client.payer_first_name(),
                &semester,
                &self.cfg.sender.name,
            ),
            attachment_name: doc.filename.clone(),
            attachment: bytes,
        };
        self.mailer.send(&email)?;
        step_done();

        success("Summary complete!");
        Ok(())
    }
}

/// Strip the first-invoice marker from the matching payer row, through the
/// named column index. A second call on an already-cleared name finds the
/// row without a marker and writes nothing.
pub fn clear_payer_marker(
    sheet: &mut dyn Spreadsheet,
    clients_range: &str,
    payer_name: &str,
) -> AppResult<()> {
    let target = payer_name.trim_end_matches(PAYER_MARKER);
    let rows = sheet.read_range(clients_range)?;
    for (i, row) in rows.iter().enumerate() {
        let Some(cell) = row.get(parse::COL_PAYER_NAME) else {
            continue;
        };
        if cell.trim_end_matches(PAYER_MARKER) == target {
            if cell.ends_with(PAYER_MARKER) {
                sheet.write_range_cell(clients_range, i, parse::COL_PAYER_NAME, target)?;
            }
            return Ok(());
        }
    }
    Ok(())
}

fn batch_outcome(failed: Vec<String>, total: usize) -> AppResult<()> {
    if failed.is_empty() {
        Ok(())
    } else {
        Err(AppError::Batch {
            failed: failed.len(),
            total,
            names: failed.join(", "),
        })
    }
}
