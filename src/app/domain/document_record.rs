use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::document_model::IssuedDocument;
use super::line_item::LineItem;
use super::numbering::DocumentNumber;
use super::view_state::{ClientInfo, DocumentKind, DocumentViewState, Language, VendorInfo};

/// One row of the form as it stood when the document was issued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedItem {
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

/// Archived copy of an issued document.
///
/// Keeps the whole form, hidden rows included, so the document can be
/// reopened for editing. The logo image itself is not archived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub number: DocumentNumber,
    pub issued_at: DateTime<Utc>,
    pub kind: DocumentKind,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub vendor: VendorInfo,
    #[serde(default)]
    pub show_client_info: bool,
    #[serde(default)]
    pub client: ClientInfo,
    pub items: Vec<RecordedItem>,
    #[serde(default)]
    pub discount: Decimal,
    pub amount_due: Decimal,
    #[serde(default)]
    pub logo_file: Option<String>,
    pub qr_payload: String,
}

impl DocumentRecord {
    pub fn new(document: &IssuedDocument, items: &[LineItem], view: &DocumentViewState) -> Self {
        Self {
            number: document.number,
            issued_at: document.issued_at,
            kind: document.model.kind,
            language: document.model.language,
            vendor: view.vendor.clone(),
            show_client_info: view.show_client_info,
            client: view.client.clone(),
            items: items
                .iter()
                .map(|i| RecordedItem {
                    description: i.description.clone(),
                    quantity: i.quantity,
                    unit_price: i.unit_price,
                    visible: i.visible,
                })
                .collect(),
            discount: document.model.discount,
            amount_due: document.model.amount_due,
            logo_file: view.logo.as_ref().map(|l| l.file_name().to_string()),
            qr_payload: document.qr_payload.clone(),
        }
    }

    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            number: self.number,
            issued_at: self.issued_at,
            kind: self.kind,
            vendor: self.vendor.name.clone(),
            amount_due: self.amount_due,
        }
    }
}

/// Listing entry for the past-documents table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentSummary {
    pub number: DocumentNumber,
    pub issued_at: DateTime<Utc>,
    pub kind: DocumentKind,
    pub vendor: String,
    pub amount_due: Decimal,
}
