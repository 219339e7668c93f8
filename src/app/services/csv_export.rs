use crate::app::domain::document_model::DocumentModel;
use crate::app::domain::money::format_amount;
use crate::app::infrastructure::error::{AppError, Result};

/// Items of a document as CSV bytes (header row included).
pub fn items_csv(model: &DocumentModel) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["id", "description", "quantity", "unit_price", "line_total"])?;
    for item in &model.items {
        writer.write_record([
            item.id.0.to_string(),
            item.description.clone(),
            item.quantity.normalize().to_string(),
            format_amount(item.unit_price),
            format_amount(item.line_total),
        ])?;
    }
    writer.into_inner().map_err(|e| AppError::Io(e.into_error()))
}
