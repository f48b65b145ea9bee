//! Storefront-side models.
//!
//! The storefront has no database; the only state it owns is what lives in a
//! visitor's session.

pub mod session;

pub use session::ShopperSession;
pub use session::keys as session_keys;
