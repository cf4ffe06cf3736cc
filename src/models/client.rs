use rust_decimal::Decimal;
use serde::Serialize;

/// Marker appended to a payer name in the workbook until the payer has
/// received their first invoice of the semester.
pub const PAYER_MARKER: char = '!';

/// One client row from the workbook client range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Client {
    pub name: String,
    pub sequence_number: u32,
    pub spare_text: String,    // workbook column C, not used by any document
    pub spare_amount: Decimal, // workbook column D, not used by any document
    pub subjects: String,
    pub hourly_rate: Decimal,
    pub running_tab: Decimal,
    pub payer_name: String,
    pub payer_email: String,
}

impl Client {
    /// True while the payer still carries the first-invoice marker.
    pub fn payer_has_marker(&self) -> bool {
        self.payer_name.ends_with(PAYER_MARKER)
    }

    /// Payer name with the marker stripped (unchanged when absent).
    pub fn payer_display_name(&self) -> &str {
        self.payer_name.trim_end_matches(PAYER_MARKER)
    }

    /// First whitespace-delimited token of the payer name, for greetings.
    pub fn payer_first_name(&self) -> &str {
        self.payer_display_name()
            .split_whitespace()
            .next()
            .unwrap_or(self.payer_display_name())
    }
}
