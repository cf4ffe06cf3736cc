//! Structured PDF builder for invoices and summaries.
//!
//! Object ids are managed by hand; each page owns one content stream and
//! the catalog and page tree are written once at the end.

use crate::config::Sender;
use crate::render::document::{InvoiceDocument, SummaryDocument};
use crate::utils::date::full_date;
use crate::utils::money::{fmt_amount, fmt_hours};
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

pub struct DocumentPdf {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,
    bold_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for DocumentPdf {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentPdf {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_id = Ref::new(4);
        let next_id = 5;

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));
        pdf.type1_font(bold_id).base_font(Name(b"Helvetica-Bold"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            row_h: 20.0,

            next_id,
            font_id,
            bold_id,

            font_size: 10.0,
            header_font_size: 11.0,
            title_font_size: 16.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        let mut resources = page.resources();
        let mut fonts = resources.fonts();
        fonts.pair(Name(b"F1"), self.font_id);
        fonts.pair(Name(b"F2"), self.bold_id);
        drop(fonts);
        drop(resources);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn top(&self) -> f32 {
        self.page_h - self.margin
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        self.draw_with_font(content, b"F1", x, y, size, text);
    }

    fn draw_bold(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        self.draw_with_font(content, b"F2", x, y, size, text);
    }

    fn draw_with_font(
        &self,
        content: &mut Content,
        font: &[u8],
        x: f32,
        y: f32,
        size: f32,
        text: &str,
    ) {
        content.begin_text();
        content.set_font(Name(font), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(text.as_bytes()));
        content.end_text();
    }

    /// Rough Helvetica advance; good enough to right-align short lines.
    fn est_width(size: f32, text: &str) -> f32 {
        text.chars().count() as f32 * size * 0.5
    }

    fn draw_right(&self, content: &mut Content, x_right: f32, y: f32, size: f32, text: &str) {
        self.draw_text(content, x_right - Self::est_width(size, text), y, size, text);
    }

    fn draw_right_bold(&self, content: &mut Content, x_right: f32, y: f32, size: f32, text: &str) {
        self.draw_bold(content, x_right - Self::est_width(size, text), y, size, text);
    }

    fn rule(&self, content: &mut Content, x1: f32, x2: f32, y: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.move_to(x1, y);
        content.line_to(x2, y);
        content.stroke();
        content.restore_state();
    }

    fn fill_band(&self, content: &mut Content, x: f32, y: f32, w: f32, gray: f32) {
        content.save_state();
        content.set_fill_rgb(gray, gray, gray);
        content.rect(x, y - 5.0, w, self.row_h - 4.0);
        content.fill_nonzero();
        content.restore_state();
    }

    /// Sender identity block, top right of the first page.
    fn sender_block(&self, content: &mut Content, sender: &Sender) {
        let x = self.page_w - self.margin;
        let mut y = self.top();
        self.draw_right_bold(content, x, y, self.header_font_size, &sender.name);
        y -= 14.0;
        self.draw_right(content, x, y, self.font_size, &sender.city);
        y -= 14.0;
        self.draw_right(content, x, y, self.font_size, &format!("e: {}", sender.email));
        y -= 14.0;
        self.draw_right(content, x, y, self.font_size, &format!("p: {}", sender.phone));
    }

    /// Bold-label / value pairs in a vertical block. Returns the new cursor.
    fn kv_block(&self, content: &mut Content, x: f32, mut y: f32, pairs: &[(&str, String)]) -> f32 {
        let value_x = x + 110.0;
        for (label, value) in pairs {
            self.draw_bold(content, x, y, self.font_size, label);
            self.draw_text(content, value_x, y, self.font_size, value);
            y -= 15.0;
        }
        y
    }

    fn col_widths(&self, headers: &[&str], rows: &[Vec<String>], max_w: f32) -> Vec<f32> {
        let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 6.5 + 12.0).collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.len() as f32 * 6.2 + 12.0);
                }
            }
        }
        let total: f32 = widths.iter().sum();
        if total > max_w {
            let scale = max_w / total;
            for w in &mut widths {
                *w *= scale;
            }
        }
        widths
    }

    fn table_row(
        &self,
        content: &mut Content,
        y: f32,
        x: f32,
        widths: &[f32],
        cells: &[String],
        bold: bool,
    ) {
        let mut cx = x;
        for (i, cell) in cells.iter().enumerate() {
            if bold {
                self.draw_bold(content, cx + 2.0, y, self.font_size, cell);
            } else {
                self.draw_text(content, cx + 2.0, y, self.font_size, cell);
            }
            cx += widths.get(i).copied().unwrap_or(60.0);
        }
    }

    /// Titled table with a shaded header row, zebra striping, and an
    /// optional bold totals row. Continues onto fresh pages as needed;
    /// returns the active content stream and cursor.
    #[allow(clippy::too_many_arguments)]
    fn write_table(
        &mut self,
        mut content: Content,
        mut y: f32,
        title: &str,
        headers: &[&str],
        rows: &[Vec<String>],
        totals: Option<Vec<String>>,
        x: f32,
        max_w: f32,
    ) -> (Content, f32) {
        let widths = self.col_widths(headers, rows, max_w);
        let table_w: f32 = widths.iter().sum();

        self.draw_bold(&mut content, x, y, self.header_font_size, title);
        y -= self.row_h;

        self.fill_band(&mut content, x, y, table_w, 0.85);
        let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        self.table_row(&mut content, y, x, &widths, &header_cells, true);
        y -= self.row_h;

        for (i, row) in rows.iter().enumerate() {
            if y < self.margin + self.row_h {
                self.finalize_page(content);
                content = self.new_page();
                y = self.top();
            }
            if i % 2 == 1 {
                self.fill_band(&mut content, x, y, table_w, 0.96);
            }
            self.table_row(&mut content, y, x, &widths, row, false);
            y -= self.row_h;
        }

        if let Some(total_cells) = totals {
            if y < self.margin + self.row_h {
                self.finalize_page(content);
                content = self.new_page();
                y = self.top();
            }
            self.rule(&mut content, x, x + table_w, y + self.row_h - 6.0);
            self.table_row(&mut content, y, x, &widths, &total_cells, true);
            y -= self.row_h;
        }

        (content, y)
    }

    fn ensure_room(&mut self, content: Content, y: f32, needed: f32) -> (Content, f32) {
        if y - needed < self.margin {
            self.finalize_page(content);
            let fresh = self.new_page();
            (fresh, self.top())
        } else {
            (content, y)
        }
    }

    pub fn into_bytes(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
        drop(pages);
        self.pdf.finish()
    }
}

fn dollars(d: rust_decimal::Decimal) -> String {
    format!("${}", fmt_amount(d))
}

pub fn render_invoice(doc: &InvoiceDocument, sender: &Sender) -> Vec<u8> {
    let mut pdf = DocumentPdf::new();
    let mut content = pdf.new_page();
    let mut y = pdf.top();

    pdf.sender_block(&mut content, sender);

    y -= 70.0;
    pdf.draw_bold(
        &mut content,
        pdf.margin,
        y,
        pdf.title_font_size,
        &format!("Invoice INV-{}", doc.invoice_number),
    );
    y -= 18.0;
    pdf.draw_text(
        &mut content,
        pdf.margin,
        y,
        pdf.font_size,
        &format!("Date: {}", full_date(&chrono::Local::now().date_naive())),
    );
    y -= 24.0;

    y = pdf.kv_block(
        &mut content,
        pdf.margin,
        y,
        &[
            ("Client Name:", doc.client_name.clone()),
            ("Subjects:", doc.subjects.clone()),
            ("Hourly Rate:", dollars(doc.hourly_rate)),
        ],
    );
    y -= 20.0;

    let rows: Vec<Vec<String>> = doc
        .rows
        .iter()
        .map(|r| vec![r.date.clone(), r.hours.clone(), r.fee.clone()])
        .collect();
    let (c, new_y) = pdf.write_table(
        content,
        y,
        "Session Summary",
        &["Date", "Hours", "Fee ($)"],
        &rows,
        Some(vec![
            "Session Total:".to_string(),
            String::new(),
            dollars(doc.totals.session_total),
        ]),
        pdf.margin,
        260.0,
    );
    content = c;
    y = new_y - 20.0;

    let (c, mut y) = pdf.ensure_room(content, y, 7.0 * 15.0 + 20.0);
    content = c;
    pdf.draw_bold(&mut content, pdf.margin, y, pdf.header_font_size, "Invoice Summary");
    y -= pdf.row_h;
    y = pdf.kv_block(
        &mut content,
        pdf.margin,
        y,
        &[
            ("Sessions", doc.totals.session_count.to_string()),
            ("Total Hours", fmt_hours(doc.totals.total_hours)),
            ("Hourly Rate", dollars(doc.hourly_rate)),
            ("Session Total", dollars(doc.totals.session_total)),
            ("Current Tab", dollars(doc.running_tab)),
            ("Total Due", dollars(doc.totals.total_due)),
        ],
    );
    y -= 20.0;

    let (c, mut y) = pdf.ensure_room(content, y, 4.0 * 14.0);
    content = c;
    pdf.draw_bold(&mut content, pdf.margin, y, pdf.font_size, "Payment Terms:");
    y -= 14.0;
    for line in [
        "Payment is due within 10 days of invoice date.",
        "Please send an e-transfer to the email or phone number found at the top of this invoice.",
        "Late fee of 1.5% per month applies to unpaid balances.",
    ] {
        pdf.draw_text(&mut content, pdf.margin, y, pdf.font_size, line);
        y -= 14.0;
    }

    pdf.finalize_page(content);
    pdf.into_bytes()
}

pub fn render_summary(doc: &SummaryDocument, sender: &Sender) -> Vec<u8> {
    let mut pdf = DocumentPdf::new();
    let mut content = pdf.new_page();
    let mut y = pdf.top();

    pdf.sender_block(&mut content, sender);

    y = pdf.kv_block(
        &mut content,
        pdf.margin,
        y,
        &[
            ("Client Name:", doc.client_name.clone()),
            ("Subjects:", doc.subjects.clone()),
            ("Hourly Rate:", dollars(doc.hourly_rate)),
            ("Semester:", doc.semester.clone()),
        ],
    );
    y -= 25.0;

    let session_rows: Vec<Vec<String>> = doc
        .session_rows
        .iter()
        .map(|r| vec![r.date.clone(), r.hours.clone(), r.fee.clone()])
        .collect();
    let (c, new_y) = pdf.write_table(
        content,
        y,
        "All Sessions",
        &["Date", "Hours", "Fee ($)"],
        &session_rows,
        Some(vec![
            "Session Total:".to_string(),
            String::new(),
            dollars(doc.sessions.session_total),
        ]),
        pdf.margin,
        260.0,
    );
    content = c;
    y = new_y - 25.0;

    let payment_rows: Vec<Vec<String>> = doc
        .payment_rows
        .iter()
        .map(|r| vec![r.date.clone(), r.amount.clone()])
        .collect();
    let (c, new_y) = pdf.write_table(
        content,
        y,
        "All Payments",
        &["Date", "Amount ($)"],
        &payment_rows,
        Some(vec![
            "Payment Total:".to_string(),
            dollars(doc.payments.payment_total),
        ]),
        pdf.margin,
        220.0,
    );
    content = c;
    y = new_y - 25.0;

    let (c, mut y) = pdf.ensure_room(content, y, 7.0 * 15.0 + 20.0);
    content = c;
    pdf.draw_bold(&mut content, pdf.margin, y, pdf.header_font_size, "Semester Summary");
    y -= pdf.row_h;
    pdf.kv_block(
        &mut content,
        pdf.margin,
        y,
        &[
            ("Number of Sessions", doc.sessions.session_count.to_string()),
            ("Total Hours", fmt_hours(doc.sessions.total_hours)),
            ("Hourly Rate", dollars(doc.hourly_rate)),
            ("Session Total", dollars(doc.sessions.session_total)),
            ("Number of Payments", doc.payments.payment_count.to_string()),
            ("Total Paid", dollars(doc.payments.payment_total)),
        ],
    );

    pdf.finalize_page(content);
    pdf.into_bytes()
}
