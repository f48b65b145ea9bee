//! Session-held shopper state: the cart and an applied promo code.
//!
//! Every request that touches the cart loads the [`CartStore`] from the
//! session, dispatches its actions, and writes the store back before
//! responding.

use axum::{extract::FromRequestParts, http::request::Parts};
use lulu_vine_core::{CartAction, CartStore, PromoCode};
use tower_sessions::Session;

use crate::error::{AppError, Result};

/// Session keys for shopper data.
pub mod keys {
    /// Key for the serialized cart store.
    pub const CART: &str = "cart";

    /// Key for the applied promo code.
    pub const PROMO: &str = "promo";
}

/// Extractor giving handlers typed access to the visitor's session.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(shopper: ShopperSession) -> Result<impl IntoResponse> {
///     let cart = shopper.cart().await?;
///     Ok(format!("{} items", cart.snapshot().item_count()))
/// }
/// ```
#[derive(Clone)]
pub struct ShopperSession(Session);

impl ShopperSession {
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self(session)
    }

    /// Current cart, empty if the session has none yet.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Session` if the session store cannot be read.
    pub async fn cart(&self) -> Result<CartStore> {
        Ok(self
            .0
            .get::<CartStore>(keys::CART)
            .await?
            .unwrap_or_default())
    }

    /// Apply `actions` in order to the session's cart and persist it.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Session` if the session store cannot be read or written.
    pub async fn dispatch(
        &self,
        actions: impl IntoIterator<Item = CartAction>,
    ) -> Result<CartStore> {
        let mut cart = self.cart().await?;
        for action in actions {
            tracing::debug!(action = action.kind(), "cart dispatch");
            cart.dispatch(action);
        }
        self.0.insert(keys::CART, &cart).await?;
        Ok(cart)
    }

    /// Applied promo code, if any.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Session` if the session store cannot be read.
    pub async fn promo(&self) -> Result<Option<PromoCode>> {
        Ok(self.0.get::<PromoCode>(keys::PROMO).await?)
    }

    /// Store or clear the applied promo code.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Session` if the session store cannot be written.
    pub async fn set_promo(&self, promo: Option<PromoCode>) -> Result<()> {
        match promo {
            Some(code) => self.0.insert(keys::PROMO, code).await?,
            None => {
                self.0.remove::<PromoCode>(keys::PROMO).await?;
            }
        }
        Ok(())
    }
}

impl<S> FromRequestParts<S> for ShopperSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        // Set by SessionManagerLayer
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .map(Self)
            .ok_or_else(|| AppError::Internal("session layer is not installed".to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use lulu_vine_core::{LineItemId, NewCartItem};
    use rust_decimal::Decimal;

    use super::*;
    use crate::middleware::session::CartSessionStore;

    fn shopper() -> ShopperSession {
        let store = Arc::new(CartSessionStore::default());
        ShopperSession::new(Session::new(None, store, None))
    }

    fn sleeve() -> NewCartItem {
        NewCartItem {
            id: LineItemId::new("4"),
            name: "The Minimalist Sleeve".to_string(),
            price: Decimal::from(45),
            image: "sleeve.jpg".to_string(),
            color: "Natural Linen".to_string(),
        }
    }

    #[tokio::test]
    async fn test_empty_session_has_empty_cart() {
        let shopper = shopper();
        assert!(shopper.cart().await.unwrap().snapshot().is_empty());
        assert_eq!(shopper.promo().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_dispatch_persists_between_loads() {
        let shopper = shopper();
        shopper
            .dispatch([
                CartAction::AddItem(sleeve()),
                CartAction::AddItem(sleeve()),
            ])
            .await
            .unwrap();

        let cart = shopper.cart().await.unwrap();
        assert_eq!(cart.snapshot().item_count(), 2);
        assert_eq!(cart.snapshot().total(), Decimal::from(90));
    }

    #[tokio::test]
    async fn test_promo_set_and_clear() {
        let shopper = shopper();
        shopper.set_promo(Some(PromoCode::Welcome10)).await.unwrap();
        assert_eq!(shopper.promo().await.unwrap(), Some(PromoCode::Welcome10));

        shopper.set_promo(None).await.unwrap();
        assert_eq!(shopper.promo().await.unwrap(), None);
    }
}
