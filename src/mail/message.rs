//! Email subject and body text for the two document types.
//!
//! The invoice body has two variants: a longer welcome message while the
//! payer still carries the first-invoice marker, and a short standard one
//! afterwards.

use crate::models::CutoffWindow;
use crate::utils::date::month_day_long;

pub fn invoice_subject(client_name: &str) -> String {
    format!("{client_name} Tutoring Invoice")
}

pub fn summary_subject(client_name: &str, semester: &str) -> String {
    format!("{client_name} Tutoring Summary {semester}")
}

fn period_line(window: &CutoffWindow) -> String {
    format!(
        "{} (inclusive) to {} (exclusive)",
        month_day_long(&window.start),
        month_day_long(&window.end)
    )
}

pub fn invoice_body(
    payer_first: &str,
    client_first: &str,
    window: &CutoffWindow,
    welcome: bool,
    sender_name: &str,
) -> String {
    if welcome {
        let lines = [
            format!("Good evening {payer_first},"),
            format!(
                "I'd like to welcome you to a new semester of tutoring for {client_first}."
            ),
            concat!(
                "Here's what to expect going forward:\n",
                "\t-  Invoices will be sent biweekly directly to your email.\n",
                "\t-  Payment is due within 10 days from the day you receive the invoice.\n",
                "\t-  All fees can be paid via eTransfer using the email and phone number listed on each invoice."
            )
            .to_string(),
            concat!(
                "Sessions are billed in increments of 15 mins, rounded to the nearest 0.25 hours, ",
                "and your hourly rate will never change from the rate originally set when we began working together."
            )
            .to_string(),
            format!(
                "Please find attached your first tutoring invoice of the semester, for {}.",
                period_line(window)
            ),
            concat!(
                "Please feel free to reach out if you have any questions regarding invoices, ",
                "payments, or scheduling.\n",
                "I appreciate your trust and support, and I'm excited to see the progress this semester will bring!"
            )
            .to_string(),
            sender_name.to_string(),
        ];
        lines.join("\n\n")
    } else {
        let lines = [
            format!("Good day {payer_first},"),
            format!(
                "Please find attached your tutoring invoice for {}.",
                period_line(window)
            ),
            sender_name.to_string(),
        ];
        lines.join("\n\n")
    }
}

pub fn summary_body(payer_first: &str, semester: &str, sender_name: &str) -> String {
    let lines = [
        format!("Good day {payer_first},"),
        format!(
            "Please find attached your tutoring session summary for {semester}.\nPlease let me know if you have any questions, I hope to see you again next semester!"
        ),
        sender_name.to_string(),
    ];
    lines.join("\n\n")
}
