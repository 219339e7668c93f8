use textwrap::core::display_width;

use crate::app::domain::document_model::IssuedDocument;
use crate::app::domain::money::format_amount;
use crate::app::infrastructure::error::Result;
use crate::app::services::labels::labels;

/// A finished, savable document.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub file_name: String,
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Turns an issued document into a printable artifact.
pub trait DocumentRenderer {
    fn render(&self, document: &IssuedDocument) -> Result<Artifact>;
}

/// Characters per line on a 58 mm thermal printer.
pub const RECEIPT_COLUMNS: usize = 32;

/// Plain-text POS receipt, one line per printer row.
#[derive(Debug, Clone)]
pub struct TextReceiptRenderer {
    columns: usize,
}

impl Default for TextReceiptRenderer {
    fn default() -> Self {
        Self::new(RECEIPT_COLUMNS)
    }
}

impl TextReceiptRenderer {
    pub fn new(columns: usize) -> Self {
        Self {
            columns: columns.max(16),
        }
    }

    fn center(&self, out: &mut Vec<String>, text: &str) {
        for line in textwrap::wrap(text, self.columns) {
            let pad = self.columns.saturating_sub(display_width(&line)) / 2;
            out.push(format!("{}{}", " ".repeat(pad), line));
        }
    }

    /// `left` and `right` on one row with at least one space between them,
    /// or `left` wrapped and `right` right-aligned below it when they do not fit.
    fn left_right(&self, out: &mut Vec<String>, left: &str, right: &str) {
        let used = display_width(left) + display_width(right);
        if used < self.columns {
            out.push(format!("{}{}{}", left, " ".repeat(self.columns - used), right));
            return;
        }
        self.wrapped(out, left);
        for line in textwrap::wrap(right, self.columns) {
            let pad = self.columns.saturating_sub(display_width(&line));
            out.push(format!("{}{}", " ".repeat(pad), line));
        }
    }

    fn wrapped(&self, out: &mut Vec<String>, text: &str) {
        out.extend(textwrap::wrap(text, self.columns).into_iter().map(|l| l.into_owned()));
    }

    fn rule(&self, out: &mut Vec<String>) {
        out.push("-".repeat(self.columns));
    }

    pub fn render_lines(&self, document: &IssuedDocument) -> Vec<String> {
        let model = &document.model;
        let l = labels(model.language);
        let mut out = Vec::new();

        if let Some(logo) = &model.logo {
            self.center(&mut out, &format!("[{}]", logo.file_name()));
        }

        let vendor = &model.vendor;
        self.center(&mut out, &vendor.name);
        if !vendor.address.is_empty() {
            self.center(&mut out, &vendor.address);
        }
        if !vendor.phone.is_empty() {
            self.center(&mut out, &format!("{} {}", l.phone, vendor.phone));
        }
        if !vendor.ntn.is_empty() {
            self.center(&mut out, &format!("{} {}", l.ntn, vendor.ntn));
        }
        out.push(String::new());

        out.push(format!("{} {}", l.number_label(model.kind), document.number));
        out.push(format!("{} {}", l.date, document.issued_at.format("%Y-%m-%d")));

        if let Some(client) = &model.client {
            self.wrapped(&mut out, &format!("{} {}", l.client, client.name));
            for extra in [&client.address, &client.contact, &client.ntn] {
                if !extra.is_empty() {
                    self.wrapped(&mut out, extra);
                }
            }
        }

        self.rule(&mut out);
        self.left_right(&mut out, l.description, l.total);
        self.rule(&mut out);

        for item in &model.items {
            self.wrapped(&mut out, &item.description);
            self.left_right(
                &mut out,
                &format!("{} x {}", item.quantity.normalize(), format_amount(item.unit_price)),
                &format_amount(item.line_total),
            );
        }

        self.rule(&mut out);
        self.left_right(&mut out, l.subtotal, &format_amount(model.grand_total));
        self.left_right(&mut out, l.discount, &format_amount(model.discount));
        self.left_right(&mut out, l.grand_total, &format_amount(model.amount_due));
        out.push(String::new());

        self.center(&mut out, l.thank_you(model.kind));
        out.push(String::new());
        self.wrapped(&mut out, &document.qr_payload);
        out.push(String::new());
        self.wrapped(&mut out, l.footnote(model.kind));

        out
    }
}

impl DocumentRenderer for TextReceiptRenderer {
    fn render(&self, document: &IssuedDocument) -> Result<Artifact> {
        let mut text = self.render_lines(document).join("\n");
        text.push('\n');
        Ok(Artifact {
            file_name: format!("{}.txt", document.number),
            media_type: "text/plain; charset=utf-8",
            bytes: text.into_bytes(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::ledger::Ledger;
    use crate::app::domain::numbering::DocumentNumber;
    use crate::app::domain::view_state::{ClientInfo, DocumentKind, DocumentViewState, VendorInfo};
    use crate::app::services::projection::render_model;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn issued(kind: DocumentKind, show_client: bool) -> IssuedDocument {
        let mut ledger = Ledger::new();
        ledger.add_item("Widget", dec!(5), dec!(10.00)).unwrap();
        ledger.add_item("Gadget", dec!(3), dec!(20.00)).unwrap();
        ledger.set_discount(dec!(10)).unwrap();

        let mut view = DocumentViewState::new();
        view.set_document_kind(kind);
        view.set_vendor(VendorInfo {
            name: "Corner Shop".to_string(),
            address: "12 Mall Road".to_string(),
            phone: "0300-1234567".to_string(),
            ntn: String::new(),
        });
        view.set_client(ClientInfo {
            name: "Bilal".to_string(),
            ..Default::default()
        });
        view.set_show_client_info(show_client);

        IssuedDocument {
            number: DocumentNumber(7),
            issued_at: Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
            model: render_model(&ledger.snapshot(), &view),
            qr_payload: "{\"no\":\"0007\"}".to_string(),
        }
    }

    #[test]
    fn test_receipt_contents() {
        let lines = TextReceiptRenderer::default().render_lines(&issued(DocumentKind::Invoice, false));
        let text = lines.join("\n");

        assert!(text.contains("Corner Shop"));
        assert!(text.contains("Phone: 0300-1234567"));
        assert!(!text.contains("NTN:"));
        assert!(text.contains("Invoice No: 0007"));
        assert!(text.contains("Date: 2025-01-02"));
        assert!(text.contains("5 x 10.00"));
        assert!(text.contains("Thank you for your business!"));
        assert!(text.contains("{\"no\":\"0007\"}"));
        assert!(!text.contains("Bilal"));
    }

    #[test]
    fn test_totals_are_right_aligned() {
        let lines = TextReceiptRenderer::default().render_lines(&issued(DocumentKind::Invoice, false));
        let subtotal = lines.iter().find(|l| l.starts_with("Subtotal:")).unwrap();
        assert!(subtotal.ends_with("110.00"));
        assert_eq!(subtotal.chars().count(), RECEIPT_COLUMNS);

        let grand = lines.iter().find(|l| l.starts_with("Grand Total:")).unwrap();
        assert!(grand.ends_with("100.00"));
    }

    #[test]
    fn test_quote_wording_and_client() {
        let text = TextReceiptRenderer::default()
            .render_lines(&issued(DocumentKind::Quote, true))
            .join("\n");
        assert!(text.contains("Quote No: 0007"));
        assert!(text.contains("We look forward to working with you!"));
        assert!(text.contains("Client: Bilal"));
    }

    #[test]
    fn test_lines_fit_width() {
        let lines = TextReceiptRenderer::default().render_lines(&issued(DocumentKind::Quote, true));
        assert!(lines.iter().all(|l| display_width(l) <= RECEIPT_COLUMNS));
    }

    #[test]
    fn test_large_amounts_fit_width() {
        let mut ledger = Ledger::new();
        ledger
            .add_item("Bulk order", dec!(1000000), dec!(123456.00))
            .unwrap();
        ledger
            .add_item("Single", dec!(1), dec!(79228162514264337593543950.33))
            .unwrap();
        let doc = IssuedDocument {
            number: DocumentNumber(1),
            issued_at: Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
            model: render_model(&ledger.snapshot(), &DocumentViewState::new()),
            qr_payload: String::new(),
        };

        let lines = TextReceiptRenderer::default().render_lines(&doc);
        for line in &lines {
            assert!(display_width(line) <= RECEIPT_COLUMNS, "too wide: {:?}", line);
        }

        // The amount moves below the quantity line, right-aligned
        let qty = lines.iter().position(|l| l == "1000000 x 123456.00").unwrap();
        assert_eq!(lines[qty + 1].trim_start(), "123456000000.00");
        assert!(lines[qty + 1].ends_with("123456000000.00"));
        assert_eq!(lines[qty + 1].chars().count(), RECEIPT_COLUMNS);
    }

    #[test]
    fn test_artifact_naming() {
        let artifact = TextReceiptRenderer::default()
            .render(&issued(DocumentKind::Invoice, false))
            .unwrap();
        assert_eq!(artifact.file_name, "0007.txt");
        assert!(artifact.media_type.starts_with("text/plain"));
        assert!(artifact.bytes.ends_with(b"\n"));
    }
}
