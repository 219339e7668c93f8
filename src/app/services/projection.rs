use crate::app::domain::document_model::{DocumentModel, RenderedItem};
use crate::app::domain::ledger::LedgerSnapshot;
use crate::app::domain::view_state::DocumentViewState;

/// Combine ledger data and view-state into the structure handed to renderers.
///
/// Hidden items are dropped; client details are included only when switched on.
pub fn render_model(snapshot: &LedgerSnapshot, view: &DocumentViewState) -> DocumentModel {
    let items = snapshot
        .visible_items()
        .map(|item| RenderedItem {
            id: item.id,
            description: item.description.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
            line_total: item.line_total(),
        })
        .collect();

    DocumentModel {
        kind: view.document_kind,
        language: view.language,
        vendor: view.vendor.clone(),
        client: view.show_client_info.then(|| view.client.clone()),
        logo: view.logo.clone(),
        items,
        grand_total: snapshot.totals.grand_total,
        discount: snapshot.totals.discount,
        amount_due: snapshot.totals.amount_due,
    }
}
