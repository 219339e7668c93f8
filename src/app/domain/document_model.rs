use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::line_item::LineItemId;
use super::numbering::DocumentNumber;
use super::view_state::{ClientInfo, DocumentKind, Language, LogoRef, VendorInfo};

/// A visible line item as it appears on the printed document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedItem {
    pub id: LineItemId,
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

/// Everything a renderer needs to draw one document, and nothing more.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentModel {
    pub kind: DocumentKind,
    pub language: Language,
    pub vendor: VendorInfo,
    /// Present only while client info is switched on.
    pub client: Option<ClientInfo>,
    pub logo: Option<LogoRef>,
    pub items: Vec<RenderedItem>,
    pub grand_total: Decimal,
    pub discount: Decimal,
    pub amount_due: Decimal,
}

/// A document that has been assigned a number and a QR payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssuedDocument {
    pub number: DocumentNumber,
    pub issued_at: DateTime<Utc>,
    pub model: DocumentModel,
    /// Verification string encoded into the document's QR code.
    pub qr_payload: String,
}
