use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::{ensure_non_negative, round_currency, too_large};
use crate::app::infrastructure::error::LedgerError;

/// Stable identifier of a line item. Never reused within a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineItemId(pub u64);

impl fmt::Display for LineItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One billable row of the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub id: LineItemId,
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub visible: bool,
}

impl LineItem {
    /// Build a validated, visible item.
    pub fn new(
        id: LineItemId,
        description: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Result<Self, LedgerError> {
        let item = Self {
            id,
            description: description.into(),
            quantity: ensure_non_negative("quantity", quantity)?,
            unit_price: ensure_non_negative("unit_price", unit_price)?,
            visible: true,
        };
        item.checked_line_total().ok_or_else(|| too_large("unit_price"))?;
        Ok(item)
    }

    /// `quantity × unit_price`, rounded to currency precision, or `None`
    /// when the product leaves the decimal range.
    pub fn checked_line_total(&self) -> Option<Decimal> {
        self.quantity.checked_mul(self.unit_price).map(round_currency)
    }

    /// `quantity × unit_price`, rounded to currency precision.
    ///
    /// Items held by a [`Ledger`](super::ledger::Ledger) always have an
    /// in-range product; anything else saturates at `Decimal::MAX`.
    pub fn line_total(&self) -> Decimal {
        self.checked_line_total().unwrap_or(Decimal::MAX)
    }

    /// Whether this row would print as a real charge.
    pub fn is_billable(&self) -> bool {
        !self.description.trim().is_empty()
            && self.quantity > Decimal::ZERO
            && self.unit_price > Decimal::ZERO
    }
}

/// Partial update of a line item. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub description: Option<String>,
    pub quantity: Option<Decimal>,
    pub unit_price: Option<Decimal>,
}

impl ItemPatch {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn unit_price(mut self, unit_price: Decimal) -> Self {
        self.unit_price = Some(unit_price);
        self
    }

    /// Check every numeric field before anything is written.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if let Some(q) = self.quantity {
            ensure_non_negative("quantity", q)?;
        }
        if let Some(p) = self.unit_price {
            ensure_non_negative("unit_price", p)?;
        }
        Ok(())
    }

    /// Apply an already validated patch.
    pub(crate) fn apply_to(self, item: &mut LineItem) {
        if let Some(d) = self.description {
            item.description = d;
        }
        if let Some(q) = self.quantity {
            item.quantity = q;
        }
        if let Some(p) = self.unit_price {
            item.unit_price = p;
        }
    }
}
