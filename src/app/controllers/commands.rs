use rust_decimal::Decimal;

use crate::app::domain::line_item::{ItemPatch, LineItemId};
use crate::app::domain::thresholds::ThresholdConfig;
use crate::app::domain::view_state::{ClientInfo, DocumentKind, Language, LogoRef, VendorInfo};

/// All edits the form can make to an editing session.
/// Each widget callback sends one of these; the session applies it.
#[derive(Debug, Clone, PartialEq)]
pub enum EditCommand {
    // Items
    AddItem {
        description: String,
        quantity: Decimal,
        unit_price: Decimal,
    },
    UpdateItem(LineItemId, ItemPatch),
    RemoveItem(LineItemId),
    RemoveLastItem,
    SetItemVisible(LineItemId, bool),
    SetDiscount(Decimal),

    // Parties
    SetVendor(VendorInfo),
    SetClient(ClientInfo),
    ToggleClientInfo,

    // Document
    SetDocumentKind(DocumentKind),
    SetLanguage(Language),
    AttachLogo(LogoRef),
    DetachLogo,

    // Alarms
    SetThresholds(ThresholdConfig),
}

impl EditCommand {
    pub fn add_item(description: impl Into<String>, quantity: Decimal, unit_price: Decimal) -> Self {
        EditCommand::AddItem {
            description: description.into(),
            quantity,
            unit_price,
        }
    }
}
