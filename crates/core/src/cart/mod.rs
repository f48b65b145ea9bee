//! Session-scoped shopping cart.
//!
//! # Architecture
//!
//! ```text
//! CartAction ──→ CartReducer ──→ CartState ──→ display surfaces
//!     ↑                                              │
//!     └──────────────── dispatch ────────────────────┘
//! ```
//!
//! - [`CartState`] is the snapshot every surface renders: line items, the
//!   derived subtotal, and the mini-cart visibility flag.
//! - [`CartAction`] is the closed set of mutations: add, remove, set
//!   quantity, toggle the drawer.
//! - [`CartReducer`] is the only code that builds a new state from an old
//!   one. The subtotal is recomputed there and nowhere else.
//! - [`CartStore`] owns one state and funnels every change through the
//!   reducer. It is what the storefront keeps in each browser session.
//!
//! None of the actions can fail. Unknown ids are silent no-ops.

mod action;
mod reducer;
mod state;
mod store;

pub use action::{CartAction, NewCartItem};
pub use reducer::{CartReducer, Reducer};
pub use state::{CartLineItem, CartState};
pub use store::CartStore;
