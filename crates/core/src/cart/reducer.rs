//! Cart reducer.

use super::action::{CartAction, NewCartItem};
use super::state::{CartLineItem, CartState};
use crate::types::LineItemId;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State;

    /// The action type this reducer handles.
    type Action;

    /// Process an action and return the new state.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}

/// The cart's reducer.
pub struct CartReducer;

impl Reducer for CartReducer {
    type State = CartState;
    type Action = CartAction;

    fn reduce(mut state: Self::State, action: Self::Action) -> Self::State {
        match action {
            CartAction::AddItem(item) => {
                add_item(&mut state, item);
                state.recompute_total();
            }
            CartAction::RemoveItem(id) => {
                remove_item(&mut state, &id);
                state.recompute_total();
            }
            CartAction::UpdateQuantity { id, quantity } => {
                update_quantity(&mut state, &id, quantity);
                state.recompute_total();
            }
            CartAction::ToggleCart => state.is_open = !state.is_open,
        }
        state
    }
}

fn add_item(state: &mut CartState, item: NewCartItem) {
    // Existing lines keep their name, price and image: first write wins.
    if let Some(index) = state.position(&item.id) {
        if let Some(existing) = state.items.get_mut(index) {
            existing.quantity = existing.quantity.saturating_add(1);
        }
        return;
    }

    state.items.push(CartLineItem {
        id: item.id,
        name: item.name,
        price: item.price,
        image: item.image,
        color: item.color,
        quantity: 1,
    });
}

fn remove_item(state: &mut CartState, id: &LineItemId) {
    state.items.retain(|item| &item.id != id);
}

fn update_quantity(state: &mut CartState, id: &LineItemId, quantity: i64) {
    if quantity <= 0 {
        remove_item(state, id);
        return;
    }

    let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
    if let Some(item) = state.items.iter_mut().find(|item| &item.id == id) {
        item.quantity = quantity;
    }
}
