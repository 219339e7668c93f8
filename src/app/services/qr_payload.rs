use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::app::domain::document_model::DocumentModel;
use crate::app::domain::money::format_amount;
use crate::app::domain::numbering::DocumentNumber;

#[derive(Serialize)]
struct QrPayload<'a> {
    no: DocumentNumber,
    kind: &'a str,
    date: String,
    amount_due: String,
    items: usize,
    digest: String,
}

/// SHA-256 (hex) of the serialized document model.
pub fn model_digest(model: &DocumentModel) -> Result<String, serde_json::Error> {
    let json = serde_json::to_vec(model)?;
    Ok(hex::encode(Sha256::digest(&json)))
}

/// Compact JSON encoded into the QR code for later verification.
///
/// Identical inputs always produce the same string; the document number
/// makes it unique per issued document.
pub fn build_payload(
    number: DocumentNumber,
    issued_at: DateTime<Utc>,
    model: &DocumentModel,
) -> Result<String, serde_json::Error> {
    let payload = QrPayload {
        no: number,
        kind: model.kind.as_str(),
        date: issued_at.format("%Y-%m-%d").to_string(),
        amount_due: format_amount(model.amount_due),
        items: model.items.len(),
        digest: model_digest(model)?,
    };
    serde_json::to_string(&payload)
}
