pub mod document;
pub mod pdf;

pub use document::{InvoiceDocument, SummaryDocument};
