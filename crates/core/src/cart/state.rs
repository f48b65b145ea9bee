//! Cart snapshot.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::LineItemId;

/// One product/variant in the cart and how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: LineItemId,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub color: String,
    /// Always at least 1 while the line is in a cart.
    pub quantity: u32,
}

impl CartLineItem {
    /// `price × quantity`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// The `{items, total, isOpen}` snapshot read by every display surface.
///
/// Fields are only writable from the reducer. Deserializing rebuilds the
/// subtotal from the items and ignores any serialized `total`, so a stored
/// snapshot can never carry a subtotal that disagrees with its lines.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "StoredCart")]
pub struct CartState {
    pub(super) items: Vec<CartLineItem>,
    pub(super) total: Decimal,
    pub(super) is_open: bool,
}

impl CartState {
    /// Line items in the order they were first added.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Sum of `price × quantity` over all lines.
    #[must_use]
    pub const fn total(&self) -> Decimal {
        self.total
    }

    /// Whether the mini-cart drawer is showing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all lines (the header badge number).
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Look up a line by id.
    #[must_use]
    pub fn get(&self, id: &LineItemId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub(super) fn position(&self, id: &LineItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    /// Recompute `total` from `items`. Called after every items mutation.
    pub(super) fn recompute_total(&mut self) {
        self.total = self.items.iter().map(CartLineItem::line_total).sum();
    }
}

/// Serialized form of a cart: lines and the drawer flag, no subtotal.
#[derive(Deserialize)]
struct StoredCart {
    #[serde(default)]
    items: Vec<CartLineItem>,
    #[serde(default)]
    is_open: bool,
}

impl From<StoredCart> for CartState {
    fn from(stored: StoredCart) -> Self {
        // Re-establish the line invariants on anything read back from storage:
        // no zero quantities, one line per id.
        let mut items: Vec<CartLineItem> = Vec::with_capacity(stored.items.len());
        for item in stored.items.into_iter().filter(|item| item.quantity > 0) {
            match items.iter_mut().find(|existing| existing.id == item.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                None => items.push(item),
            }
        }

        let mut state = Self {
            items,
            total: Decimal::ZERO,
            is_open: stored.is_open,
        };
        state.recompute_total();
        state
    }
}
