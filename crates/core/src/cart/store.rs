//! Cart store: one owned cart behind a dispatch entry point.

use serde::{Deserialize, Serialize};

use super::action::CartAction;
use super::reducer::{CartReducer, Reducer};
use super::state::CartState;

/// Owns a [`CartState`] and applies [`CartAction`]s to it.
///
/// There is no way to reach the line items mutably from outside; every
/// change goes through [`CartStore::dispatch`].
///
/// # Example
///
/// ```
/// use lulu_vine_core::{CartAction, CartStore, LineItemId, NewCartItem};
/// use rust_decimal::Decimal;
///
/// let mut cart = CartStore::new();
/// let tote = NewCartItem {
///     id: LineItemId::new("1-champagne"),
///     name: "The Elegance Tote".to_string(),
///     price: Decimal::from(89),
///     image: "tote.jpg".to_string(),
///     color: "Champagne".to_string(),
/// };
///
/// cart.dispatch(CartAction::AddItem(tote.clone()));
/// cart.dispatch(CartAction::AddItem(tote));
/// assert_eq!(cart.snapshot().total(), Decimal::from(178));
///
/// cart.dispatch(CartAction::UpdateQuantity { id: LineItemId::new("1-champagne"), quantity: 0 });
/// assert!(cart.snapshot().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartStore {
    state: CartState,
}

impl CartStore {
    /// An empty, closed cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action and return the resulting snapshot.
    pub fn dispatch(&mut self, action: CartAction) -> &CartState {
        let state = std::mem::take(&mut self.state);
        self.state = CartReducer::reduce(state, action);
        &self.state
    }

    /// Current snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &CartState {
        &self.state
    }

    /// Consume the store, keeping only the snapshot.
    #[must_use]
    pub fn into_snapshot(self) -> CartState {
        self.state
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    use super::*;
    use crate::cart::NewCartItem;
    use crate::types::LineItemId;

    fn champagne_tote() -> NewCartItem {
        NewCartItem {
            id: LineItemId::new("1-champagne"),
            name: "The Elegance Tote".to_string(),
            price: Decimal::from(89),
            image: "https://images.pexels.com/photos/5591663/pexels-photo-5591663.jpeg".to_string(),
            color: "Champagne".to_string(),
        }
    }

    fn expected_total(state: &CartState) -> Decimal {
        state
            .items()
            .iter()
            .map(|item| item.price * Decimal::from(item.quantity))
            .sum()
    }

    // =========================================================================
    // Walkthrough: add, add again, decrement, decrement to zero, toggle
    // =========================================================================

    #[test]
    fn test_add_then_merge_then_decrement_to_empty() {
        let mut cart = CartStore::new();

        // Start empty, add once
        let state = cart.dispatch(CartAction::AddItem(champagne_tote()));
        assert_eq!(state.items().len(), 1);
        assert_eq!(state.items()[0].id.as_str(), "1-champagne");
        assert_eq!(state.items()[0].quantity, 1);
        assert_eq!(state.total(), Decimal::from(89));

        // Same id again merges
        let state = cart.dispatch(CartAction::AddItem(champagne_tote()));
        assert_eq!(state.items().len(), 1);
        assert_eq!(state.items()[0].quantity, 2);
        assert_eq!(state.total(), Decimal::from(178));

        // Back down to one
        let state = cart.dispatch(CartAction::UpdateQuantity {
            id: LineItemId::new("1-champagne"),
            quantity: 1,
        });
        assert_eq!(state.items()[0].quantity, 1);
        assert_eq!(state.total(), Decimal::from(89));

        // Zero removes the line
        let state = cart.dispatch(CartAction::UpdateQuantity {
            id: LineItemId::new("1-champagne"),
            quantity: 0,
        });
        assert!(state.is_empty());
        assert_eq!(state.total(), Decimal::ZERO);
    }

    #[test]
    fn test_toggle_open_then_closed() {
        let mut cart = CartStore::new();
        assert!(cart.dispatch(CartAction::ToggleCart).is_open());
        assert!(!cart.dispatch(CartAction::ToggleCart).is_open());
    }

    #[test]
    fn test_negative_quantity_removes_like_remove_item() {
        let mut by_update = CartStore::new();
        by_update.dispatch(CartAction::AddItem(champagne_tote()));
        by_update.dispatch(CartAction::UpdateQuantity {
            id: LineItemId::new("1-champagne"),
            quantity: -1,
        });

        let mut by_remove = CartStore::new();
        by_remove.dispatch(CartAction::AddItem(champagne_tote()));
        by_remove.dispatch(CartAction::RemoveItem(LineItemId::new("1-champagne")));

        assert_eq!(by_update, by_remove);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut cart = CartStore::new();
        cart.dispatch(CartAction::AddItem(champagne_tote()));
        let before = cart.clone();

        cart.dispatch(CartAction::RemoveItem(LineItemId::new("missing")));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_session_roundtrip_preserves_snapshot() {
        let mut cart = CartStore::new();
        cart.dispatch(CartAction::AddItem(champagne_tote()));
        cart.dispatch(CartAction::ToggleCart);

        let json = serde_json::to_value(&cart).unwrap();
        let restored: CartStore = serde_json::from_value(json).unwrap();
        assert_eq!(restored, cart);
        assert_eq!(restored.into_snapshot().total(), Decimal::from(89));
    }

    // =========================================================================
    // Properties over arbitrary action sequences
    // =========================================================================

    fn arb_item() -> impl Strategy<Value = NewCartItem> {
        (0u8..4, 0i64..50_000).prop_map(|(id, cents)| NewCartItem {
            id: LineItemId::new(format!("p{id}")),
            name: format!("Product {id}"),
            price: Decimal::new(cents, 2),
            image: String::new(),
            color: String::new(),
        })
    }

    fn arb_action() -> impl Strategy<Value = CartAction> {
        prop_oneof![
            arb_item().prop_map(CartAction::AddItem),
            (0u8..5).prop_map(|id| CartAction::RemoveItem(LineItemId::new(format!("p{id}")))),
            (0u8..5, -3i64..20).prop_map(|(id, quantity)| CartAction::UpdateQuantity {
                id: LineItemId::new(format!("p{id}")),
                quantity,
            }),
            Just(CartAction::ToggleCart),
        ]
    }

    proptest! {
        #[test]
        fn prop_total_matches_lines(actions in prop::collection::vec(arb_action(), 0..40)) {
            let mut cart = CartStore::new();
            for action in actions {
                let state = cart.dispatch(action);
                prop_assert_eq!(state.total(), expected_total(state));
            }
        }

        #[test]
        fn prop_ids_unique_and_quantities_positive(actions in prop::collection::vec(arb_action(), 0..40)) {
            let mut cart = CartStore::new();
            for action in actions {
                cart.dispatch(action);
            }
            let items = cart.snapshot().items();
            for (index, item) in items.iter().enumerate() {
                prop_assert!(item.quantity >= 1);
                prop_assert!(items.iter().skip(index + 1).all(|other| other.id != item.id));
            }
        }

        #[test]
        fn prop_repeated_add_merges(times in 1u32..25) {
            let mut cart = CartStore::new();
            for _ in 0..times {
                cart.dispatch(CartAction::AddItem(champagne_tote()));
            }
            prop_assert_eq!(cart.snapshot().items().len(), 1);
            prop_assert_eq!(cart.snapshot().items()[0].quantity, times);
            prop_assert_eq!(cart.snapshot().total(), Decimal::from(89) * Decimal::from(times));
        }

        #[test]
        fn prop_toggle_twice_is_identity(actions in prop::collection::vec(arb_action(), 0..20)) {
            let mut cart = CartStore::new();
            for action in actions {
                cart.dispatch(action);
            }
            let before = cart.clone();
            cart.dispatch(CartAction::ToggleCart);
            cart.dispatch(CartAction::ToggleCart);
            prop_assert_eq!(cart, before);
        }

        #[test]
        fn prop_non_positive_update_equals_remove(
            actions in prop::collection::vec(arb_action(), 0..20),
            id in 0u8..5,
            quantity in -5i64..=0,
        ) {
            let mut cart = CartStore::new();
            for action in actions {
                cart.dispatch(action);
            }
            let id = LineItemId::new(format!("p{id}"));

            let mut updated = cart.clone();
            updated.dispatch(CartAction::UpdateQuantity { id: id.clone(), quantity });
            let mut removed = cart;
            removed.dispatch(CartAction::RemoveItem(id));
            prop_assert_eq!(updated, removed);
        }
    }
}
