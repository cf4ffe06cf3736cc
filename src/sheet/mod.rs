//! Workbook access boundary.
//!
//! Everything the pipelines know about the spreadsheet goes through the
//! [`Spreadsheet`] trait: named ranges in, cell writes out. The bundled
//! implementation is [`CsvWorkbook`]; a remote sheet client would slot in
//! behind the same trait.

pub mod workbook;

pub use workbook::CsvWorkbook;

use crate::errors::{AppError, AppResult};

pub trait Spreadsheet {
    /// Workbook title, by convention the semester name ("Fall 2025").
    fn title(&self) -> &str;

    /// All rows of a named range, as raw cell strings.
    fn read_range(&self, range: &str) -> AppResult<Vec<Vec<String>>>;

    /// The single cell of a one-cell range.
    fn read_cell(&self, range: &str) -> AppResult<String>;

    /// Overwrite a one-cell range.
    fn write_cell(&mut self, range: &str, value: &str) -> AppResult<()>;

    /// Overwrite one cell of a range, addressed by zero-based row and
    /// column index within the range.
    fn write_range_cell(
        &mut self,
        range: &str,
        row: usize,
        col: usize,
        value: &str,
    ) -> AppResult<()>;
}

/// The shared invoice counter cell.
///
/// Read once per run; bumped by one after each successfully sent invoice.
/// The stored value keeps its zero padding (minimum four digits), so
/// `"0007"` is written back as `"0008"`.
pub struct InvoiceCounter {
    raw: String,
    value: u64,
}

impl InvoiceCounter {
    pub fn read(sheet: &dyn Spreadsheet, range: &str) -> AppResult<Self> {
        let raw = sheet.read_cell(range)?.trim().to_string();
        let value = raw.parse().map_err(|_| {
            AppError::Sheet(format!("invoice counter '{raw}' is not numeric"))
        })?;
        Ok(Self { raw, value })
    }

    fn width(&self) -> usize {
        self.raw.len().max(4)
    }

    /// Zero-padded number for the document and its filename.
    pub fn display(&self) -> String {
        format!("{:0width$}", self.value, width = self.width())
    }

    /// Increment in memory only, keeping the padding convention. Dry runs
    /// use this so a batch still numbers consecutively.
    pub fn advance(&mut self) {
        let width = self.width();
        self.value += 1;
        self.raw = format!("{:0width$}", self.value, width = width);
    }

    /// Increment and write the new value back to the sheet.
    pub fn bump(&mut self, sheet: &mut dyn Spreadsheet, range: &str) -> AppResult<()> {
        self.advance();
        sheet.write_cell(range, &self.raw)
    }
}
