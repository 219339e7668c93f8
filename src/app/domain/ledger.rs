use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use super::line_item::{ItemPatch, LineItem, LineItemId};
use super::money::{ensure_non_negative, round_currency, too_large};
use crate::app::infrastructure::error::LedgerError;

/// Aggregates derived from the item sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Totals {
    /// Sum of visible line totals.
    pub grand_total: Decimal,
    /// One entry per item, parallel to the item sequence (hidden items included).
    pub line_totals: Vec<(LineItemId, Decimal)>,
    pub discount: Decimal,
    /// `grand_total - discount`, never below zero.
    pub amount_due: Decimal,
}

impl Totals {
    fn empty() -> Self {
        Self {
            grand_total: Decimal::ZERO,
            line_totals: Vec::new(),
            discount: Decimal::ZERO,
            amount_due: Decimal::ZERO,
        }
    }

    /// Derive totals for `items`, failing if any amount leaves the decimal range.
    fn try_compute(items: &[LineItem], discount: Decimal) -> Result<Self, LedgerError> {
        let mut line_totals = Vec::with_capacity(items.len());
        let mut grand_total = Decimal::ZERO;
        for item in items {
            let line_total = item
                .checked_line_total()
                .ok_or_else(|| too_large("unit_price"))?;
            line_totals.push((item.id, line_total));
            if item.visible {
                grand_total = grand_total
                    .checked_add(line_total)
                    .ok_or_else(|| too_large("grand_total"))?;
            }
        }
        let grand_total = round_currency(grand_total);
        let amount_due = (grand_total - discount).max(Decimal::ZERO);
        Ok(Self {
            grand_total,
            line_totals,
            discount,
            amount_due,
        })
    }
}

/// Owned, read-only copy of a ledger taken before evaluation or rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerSnapshot {
    pub items: Vec<LineItem>,
    pub totals: Totals,
}

impl LedgerSnapshot {
    pub fn grand_total(&self) -> Decimal {
        self.totals.grand_total
    }

    pub fn visible_items(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter().filter(|i| i.visible)
    }
}

/// Ordered collection of line items with always-current totals.
///
/// Every mutating call builds the candidate item sequence and its totals
/// first and only then writes, so a failed call (bad input or an amount out
/// of range) leaves the ledger exactly as it was. Totals are recomputed in
/// full after each successful mutation.
#[derive(Debug, Clone)]
pub struct Ledger {
    items: Vec<LineItem>,
    next_id: u64,
    discount: Decimal,
    totals: Totals,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            discount: Decimal::ZERO,
            totals: Totals::empty(),
        }
    }

    fn next_item_id(&mut self) -> LineItemId {
        let id = LineItemId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Replace the item sequence and discount if their totals are in range.
    fn commit(&mut self, items: Vec<LineItem>, discount: Decimal) -> Result<(), LedgerError> {
        let totals = Totals::try_compute(&items, discount)?;
        self.items = items;
        self.discount = discount;
        self.totals = totals;
        debug!(
            items = self.items.len(),
            grand_total = %self.totals.grand_total,
            amount_due = %self.totals.amount_due,
            "ledger totals recomputed"
        );
        Ok(())
    }

    fn position(&self, id: LineItemId) -> Result<usize, LedgerError> {
        self.items
            .iter()
            .position(|i| i.id == id)
            .ok_or(LedgerError::NotFound(id))
    }

    /// Append a new item and return its id.
    pub fn add_item(
        &mut self,
        description: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Result<LineItemId, LedgerError> {
        // The id is only taken once the item is committed.
        let item = LineItem::new(LineItemId(self.next_id), description, quantity, unit_price)?;
        let mut items = self.items.clone();
        items.push(item);
        self.commit(items, self.discount)?;
        let id = self.next_item_id();
        debug!(%id, "line item added");
        Ok(id)
    }

    pub fn remove_item(&mut self, id: LineItemId) -> Result<LineItem, LedgerError> {
        let idx = self.position(id)?;
        let mut items = self.items.clone();
        let removed = items.remove(idx);
        self.commit(items, self.discount)?;
        debug!(%id, "line item removed");
        Ok(removed)
    }

    /// Remove the most recently appended item, if any.
    pub fn remove_last(&mut self) -> Option<LineItemId> {
        let mut items = self.items.clone();
        let removed = items.pop()?;
        // Dropping an item only lowers the sums, so this cannot fail.
        self.commit(items, self.discount).ok()?;
        debug!(id = %removed.id, "last line item removed");
        Some(removed.id)
    }

    pub fn update_item(&mut self, id: LineItemId, patch: ItemPatch) -> Result<(), LedgerError> {
        let idx = self.position(id)?;
        patch.validate()?;
        let mut items = self.items.clone();
        patch.apply_to(&mut items[idx]);
        self.commit(items, self.discount)?;
        debug!(%id, "line item updated");
        Ok(())
    }

    /// Include or exclude an item from totals and output without removing it.
    pub fn set_visible(&mut self, id: LineItemId, visible: bool) -> Result<(), LedgerError> {
        let idx = self.position(id)?;
        if self.items[idx].visible != visible {
            let mut items = self.items.clone();
            items[idx].visible = visible;
            self.commit(items, self.discount)?;
            debug!(%id, visible, "line item visibility changed");
        }
        Ok(())
    }

    pub fn set_discount(&mut self, discount: Decimal) -> Result<(), LedgerError> {
        let discount = ensure_non_negative("discount", discount)?;
        self.commit(self.items.clone(), discount)
    }

    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    pub fn grand_total(&self) -> Decimal {
        self.totals.grand_total
    }

    pub fn get(&self, id: LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            items: self.items.clone(),
            totals: self.totals.clone(),
        }
    }
}
