//! Cart actions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::LineItemId;

/// An item descriptor for [`CartAction::AddItem`].
///
/// Carries everything a line item needs except the quantity, which is
/// always one per add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCartItem {
    pub id: LineItemId,
    pub name: String,
    /// Unit price captured now; never re-fetched.
    pub price: Decimal,
    pub image: String,
    /// Variant label shown next to the name.
    pub color: String,
}

/// A request to change the cart.
///
/// Serialized as `{"type": "ADD_ITEM", "payload": {...}}` so actions can be
/// logged or replayed in the same shape the storefront forms post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartAction {
    /// Append a new line, or bump the quantity of an existing one by 1.
    AddItem(NewCartItem),
    /// Drop a line. No-op for unknown ids.
    RemoveItem(LineItemId),
    /// Set a line's quantity. Zero or below removes the line.
    ///
    /// Signed because callers derive it from `current ± 1`.
    UpdateQuantity { id: LineItemId, quantity: i64 },
    /// Show or hide the mini-cart drawer.
    ToggleCart,
}

impl CartAction {
    /// Short name used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::AddItem(_) => "ADD_ITEM",
            Self::RemoveItem(_) => "REMOVE_ITEM",
            Self::UpdateQuantity { .. } => "UPDATE_QUANTITY",
            Self::ToggleCart => "TOGGLE_CART",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape_add_item() {
        let action = CartAction::AddItem(NewCartItem {
            id: LineItemId::new("1-champagne"),
            name: "The Elegance Tote".to_string(),
            price: Decimal::from(89),
            image: "tote.jpg".to_string(),
            color: "Champagne".to_string(),
        });
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], "ADD_ITEM");
        assert_eq!(json["payload"]["id"], "1-champagne");
        assert_eq!(json["payload"]["price"], "89");
    }

    #[test]
    fn test_wire_shape_toggle_and_update() {
        let toggle: CartAction = serde_json::from_str(r#"{"type":"TOGGLE_CART"}"#).unwrap();
        assert_eq!(toggle, CartAction::ToggleCart);

        let update: CartAction = serde_json::from_str(
            r#"{"type":"UPDATE_QUANTITY","payload":{"id":"1-wine","quantity":-1}}"#,
        )
        .unwrap();
        assert_eq!(
            update,
            CartAction::UpdateQuantity {
                id: LineItemId::new("1-wine"),
                quantity: -1,
            }
        );
        assert_eq!(update.kind(), "UPDATE_QUANTITY");
    }
}
