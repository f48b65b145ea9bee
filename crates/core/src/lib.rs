//! Lulu Vine Core - Shared types and the cart store.
//!
//! This crate provides the domain pieces used by the storefront binary:
//! - [`cart`] - The session-scoped shopping cart and its four actions
//! - [`order`] - Order summary math (promo codes, shipping, tax)
//! - [`types`] - Newtype wrappers for ids, prices, and emails
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP, no
//! sessions. The storefront decides where a cart lives; this crate decides
//! what a cart is allowed to become.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod order;
pub mod types;

pub use cart::{CartAction, CartLineItem, CartReducer, CartState, CartStore, NewCartItem, Reducer};
pub use order::{OrderSummary, PromoCode, PromoError};
pub use types::*;
