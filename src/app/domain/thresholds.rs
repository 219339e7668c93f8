use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line_item::LineItemId;

/// Upper limits that raise alerts when exceeded. An unset bound never alarms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    #[serde(default)]
    pub max_quantity: Option<Decimal>,
    #[serde(default)]
    pub max_unit_price: Option<Decimal>,
    #[serde(default)]
    pub max_grand_total: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertKind {
    QuantityExceeded,
    PriceExceeded,
    TotalExceeded,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::QuantityExceeded => "quantity exceeded",
            AlertKind::PriceExceeded => "price exceeded",
            AlertKind::TotalExceeded => "total exceeded",
        }
    }
}

/// A violated threshold. `item_id` is `None` for `TotalExceeded`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub item_id: Option<LineItemId>,
    pub observed_value: Decimal,
    pub limit_value: Decimal,
}
