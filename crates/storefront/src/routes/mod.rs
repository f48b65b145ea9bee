//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//! GET  /shop                   - Product listing (?category=&color=&sort=&view=)
//! GET  /product/{slug}         - Product detail
//! GET  /about                  - About page
//! GET  /journal                - Journal (?category=&q=)
//! GET  /contact                - Contact page
//! POST /contact                - Submit contact form (rate limited)
//! POST /newsletter/subscribe   - Newsletter sign-up (rate limited)
//!
//! # Cart (HTMX fragments, redirects for plain posts)
//! GET  /cart                   - Cart page with order summary
//! POST /cart/add               - Add item (returns count badge, triggers cart-updated)
//! POST /cart/update            - Set line quantity (returns page or drawer fragment)
//! POST /cart/remove            - Remove line (returns page or drawer fragment)
//! POST /cart/toggle            - Open or close the drawer
//! GET  /cart/count             - Cart count badge (fragment)
//! GET  /cart/drawer            - Mini-cart drawer (fragment)
//! POST /cart/promo             - Apply promo code
//! POST /cart/promo/remove      - Remove promo code
//! ```

pub mod cart;
pub mod contact;
pub mod home;
pub mod htmx;
pub mod journal;
pub mod newsletter;
pub mod pages;
pub mod products;
pub mod shop;

use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::form_rate_limiter;
use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/toggle", post(cart::toggle))
        .route("/count", get(cart::count))
        .route("/drawer", get(cart::drawer))
        .route("/promo", post(cart::apply_promo))
        .route("/promo/remove", post(cart::remove_promo))
}

/// Create all routes for the storefront.
///
/// The contact and newsletter posts share one rate limiter.
pub fn routes() -> Router<AppState> {
    let limiter = form_rate_limiter();

    Router::new()
        .route("/", get(home::home))
        .route("/shop", get(shop::index))
        .route("/product/{slug}", get(products::show))
        .route("/journal", get(journal::index))
        .route(
            "/contact",
            get(contact::show).merge(post(contact::submit).layer(limiter.clone())),
        )
        .route(
            "/newsletter/subscribe",
            post(newsletter::subscribe).layer(limiter),
        )
        .merge(pages::router())
        .nest("/cart", cart_routes())
}
