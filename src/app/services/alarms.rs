use rust_decimal::Decimal;
use tracing::debug;

use crate::app::domain::ledger::LedgerSnapshot;
use crate::app::domain::thresholds::{Alert, AlertKind, ThresholdConfig};

fn exceeds(observed: Decimal, limit: Option<Decimal>) -> Option<Decimal> {
    limit.filter(|l| observed > *l)
}

/// Compare a ledger snapshot against the configured limits.
///
/// Per-item alerts come first, in item order, quantity before price. Hidden
/// items are checked too. The total check uses the visible grand total and
/// is appended last. A value equal to its limit does not alarm.
pub fn evaluate(snapshot: &LedgerSnapshot, config: &ThresholdConfig) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for item in &snapshot.items {
        if let Some(limit) = exceeds(item.quantity, config.max_quantity) {
            alerts.push(Alert {
                kind: AlertKind::QuantityExceeded,
                item_id: Some(item.id),
                observed_value: item.quantity,
                limit_value: limit,
            });
        }
        if let Some(limit) = exceeds(item.unit_price, config.max_unit_price) {
            alerts.push(Alert {
                kind: AlertKind::PriceExceeded,
                item_id: Some(item.id),
                observed_value: item.unit_price,
                limit_value: limit,
            });
        }
    }

    let grand_total = snapshot.grand_total();
    if let Some(limit) = exceeds(grand_total, config.max_grand_total) {
        alerts.push(Alert {
            kind: AlertKind::TotalExceeded,
            item_id: None,
            observed_value: grand_total,
            limit_value: limit,
        });
    }

    if !alerts.is_empty() {
        debug!(count = alerts.len(), "threshold alerts raised");
    }
    alerts
}
