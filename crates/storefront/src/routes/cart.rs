//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! Each handler loads the visitor's cart from the session, dispatches one
//! action (or one action repeated), and renders the surface that changed.
//! Plain form posts get a redirect instead of a fragment.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{AppendHeaders, IntoResponse, Response},
};
use lulu_vine_core::{
    CartAction, CartLineItem, CartState, LineItemId, OrderSummary, Price, ProductId, PromoCode,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::models::ShopperSession;
use crate::routes::htmx::{CART_UPDATED, HxRequest, redirect_back};
use crate::state::AppState;

/// Largest quantity the add-to-cart form accepts in one post.
pub const MAX_ADD_QUANTITY: u32 = 10;

/// Extra products suggested on the cart page (display only).
const RELATED_EXTRAS: [(&str, &str); 2] = [
    ("Wine Glass Charms Set", "$24"),
    ("Bottle Stopper Collection", "$32"),
];

// =============================================================================
// View Models
// =============================================================================

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub color: String,
    pub image: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
    /// Quantity posted by the "-" button; zero removes the line.
    pub decrement_to: i64,
    /// Quantity posted by the "+" button.
    pub increment_to: i64,
}

impl From<&CartLineItem> for CartItemView {
    fn from(line: &CartLineItem) -> Self {
        let current = i64::from(line.quantity);
        Self {
            id: line.id.to_string(),
            name: line.name.clone(),
            color: line.color.clone(),
            image: line.image.clone(),
            quantity: line.quantity,
            price: Price::usd(line.price).display(),
            line_price: Price::usd(line.line_total()).display(),
            decrement_to: current - 1,
            increment_to: current.saturating_add(1),
        }
    }
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u64,
    pub is_open: bool,
}

impl From<&CartState> for CartView {
    fn from(state: &CartState) -> Self {
        Self {
            items: state.items().iter().map(CartItemView::from).collect(),
            subtotal: Price::usd(state.total()).display(),
            item_count: state.item_count(),
            is_open: state.is_open(),
        }
    }
}

impl CartView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Order summary display data for templates.
#[derive(Clone)]
pub struct SummaryView {
    pub subtotal: String,
    pub promo_code: Option<&'static str>,
    pub discount: Option<String>,
    pub shipping: String,
    pub tax: String,
    pub total: String,
    /// "Add $X more for free shipping", when shipping is charged.
    pub free_shipping_gap: Option<String>,
}

impl From<&OrderSummary> for SummaryView {
    fn from(summary: &OrderSummary) -> Self {
        let free_shipping_gap = if summary.ships_free() {
            None
        } else {
            let gap = lulu_vine_core::order::FREE_SHIPPING_THRESHOLD - summary.subtotal;
            Some(Price::usd(gap.max(Decimal::ZERO)).display())
        };

        Self {
            subtotal: Price::usd(summary.subtotal).display(),
            promo_code: summary.promo.map(PromoCode::code),
            discount: summary
                .promo
                .map(|_| format!("-{}", Price::usd(summary.discount).display())),
            shipping: if summary.ships_free() {
                "Free".to_string()
            } else {
                Price::usd(summary.shipping).display()
            },
            tax: Price::usd(summary.tax).display(),
            total: Price::usd(summary.total).display(),
            free_shipping_gap,
        }
    }
}

/// Message shown under the promo code field.
#[derive(Clone)]
pub struct PromoMessage {
    pub text: String,
    pub is_error: bool,
}

// =============================================================================
// Forms
// =============================================================================

/// Add to cart form data.
///
/// Without `color` this is a quick add of the product's default color.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    #[serde(default)]
    pub color: Option<String>,
    /// Raw field so a malformed value gets the same 400 as an out-of-range one.
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub return_to: Option<String>,
}

impl AddToCartForm {
    /// Units to add: 1 when the field is absent or blank.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` unless the value is a whole number in
    /// `1..=MAX_ADD_QUANTITY`.
    pub fn quantity(&self) -> Result<u32> {
        let Some(raw) = self
            .quantity
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
        else {
            return Ok(1);
        };
        raw.parse::<u32>()
            .ok()
            .filter(|q| (1..=MAX_ADD_QUANTITY).contains(q))
            .ok_or_else(|| {
                AppError::BadRequest(format!(
                    "quantity must be between 1 and {MAX_ADD_QUANTITY}"
                ))
            })
    }
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub id: String,
    pub quantity: String,
    #[serde(default)]
    pub surface: Option<String>,
    #[serde(default)]
    pub return_to: Option<String>,
}

impl UpdateCartForm {
    /// Requested quantity. Zero or negative is allowed and removes the line.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` when the value is not a whole number.
    pub fn quantity(&self) -> Result<i64> {
        self.quantity
            .trim()
            .parse()
            .map_err(|_| AppError::BadRequest("quantity must be a whole number".to_string()))
    }
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub id: String,
    #[serde(default)]
    pub surface: Option<String>,
    #[serde(default)]
    pub return_to: Option<String>,
}

/// Toggle drawer form data.
#[derive(Debug, Deserialize)]
pub struct ToggleCartForm {
    #[serde(default)]
    pub return_to: Option<String>,
}

/// Promo code form data.
#[derive(Debug, Deserialize)]
pub struct PromoForm {
    #[serde(default)]
    pub code: String,
}

/// Which cart surface an update or remove came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Surface {
    Page,
    Drawer,
}

impl Surface {
    fn from_form(value: Option<&str>) -> Self {
        if value == Some("drawer") {
            Self::Drawer
        } else {
            Self::Page
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    pub summary: SummaryView,
    pub promo_message: Option<PromoMessage>,
    pub extras: Vec<(&'static str, &'static str)>,
}

/// Cart items and order summary fragment (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_contents.html")]
pub struct CartContentsTemplate {
    pub cart: CartView,
    pub summary: SummaryView,
    pub promo_message: Option<PromoMessage>,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
}

/// Mini-cart drawer fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/mini_cart.html")]
pub struct MiniCartTemplate {
    pub cart: CartView,
}

// =============================================================================
// Rendering Helpers
// =============================================================================

async fn contents(
    shopper: &ShopperSession,
    state: &CartState,
    promo_message: Option<PromoMessage>,
) -> Result<CartContentsTemplate> {
    let promo = shopper.promo().await?;
    let summary = OrderSummary::compute(state.total(), promo);
    Ok(CartContentsTemplate {
        cart: CartView::from(state),
        summary: SummaryView::from(&summary),
        promo_message,
    })
}

async fn page(
    shopper: &ShopperSession,
    promo_message: Option<PromoMessage>,
) -> Result<CartShowTemplate> {
    let cart = shopper.cart().await?;
    let CartContentsTemplate {
        cart,
        summary,
        promo_message,
    } = contents(shopper, cart.snapshot(), promo_message).await?;

    Ok(CartShowTemplate {
        cart,
        summary,
        promo_message,
        extras: RELATED_EXTRAS.to_vec(),
    })
}

/// Fragment for the surface a line edit came from, with the refresh trigger.
async fn edited(
    shopper: &ShopperSession,
    state: &CartState,
    surface: Surface,
) -> Result<Response> {
    let fragment = match surface {
        Surface::Page => contents(shopper, state, None).await?.into_response(),
        Surface::Drawer => MiniCartTemplate {
            cart: CartView::from(state),
        }
        .into_response(),
    };
    Ok((AppendHeaders([CART_UPDATED]), fragment).into_response())
}

// =============================================================================
// Handlers
// =============================================================================

/// Display cart page.
///
/// # Errors
///
/// Returns `AppError::Session` if the session store fails.
#[instrument(skip(shopper))]
pub async fn show(shopper: ShopperSession) -> Result<impl IntoResponse> {
    page(&shopper, None).await
}

/// Add item to cart.
///
/// Dispatches one `ADD_ITEM` per unit of `quantity`. HTMX requests get the
/// updated count badge and a `cart-updated` trigger.
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown product and
/// `AppError::BadRequest` for an unknown color or out-of-range quantity.
#[instrument(skip(state, shopper, form), fields(product_id = %form.product_id))]
pub async fn add(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    shopper: ShopperSession,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let product_id = ProductId::new(form.product_id.trim());
    let product = state
        .catalog()
        .get(&product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?;

    let item = match form.color.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        Some(value) => {
            let variant = product.color_variant(value).ok_or_else(|| {
                AppError::BadRequest(format!("{} has no color '{value}'", product.name))
            })?;
            product.cart_item_for(variant)
        }
        None => product.cart_item(),
    };

    let quantity = form.quantity()?;

    add_breadcrumb(
        "cart",
        "Added to cart",
        Some(&[("line_id", item.id.as_str()), ("product", product.name.as_str())]),
    );

    let actions = (0..quantity).map(|_| CartAction::AddItem(item.clone()));
    let cart = shopper.dispatch(actions).await?;
    tracing::info!(
        line_id = %item.id,
        quantity,
        items = cart.snapshot().item_count(),
        "Added to cart"
    );

    if is_htmx {
        Ok((
            AppendHeaders([CART_UPDATED]),
            CartCountTemplate {
                count: cart.snapshot().item_count(),
            },
        )
            .into_response())
    } else {
        Ok(redirect_back(form.return_to.as_deref(), "/cart"))
    }
}

/// Set a line's quantity; zero or less removes it.
///
/// # Errors
///
/// Returns `AppError::BadRequest` for a non-numeric quantity and
/// `AppError::Session` if the session store fails.
#[instrument(skip(shopper))]
pub async fn update(
    HxRequest(is_htmx): HxRequest,
    shopper: ShopperSession,
    Form(form): Form<UpdateCartForm>,
) -> Result<Response> {
    let quantity = form.quantity()?;
    let cart = shopper
        .dispatch([CartAction::UpdateQuantity {
            id: LineItemId::new(form.id.as_str()),
            quantity,
        }])
        .await?;

    if is_htmx {
        edited(&shopper, cart.snapshot(), Surface::from_form(form.surface.as_deref())).await
    } else {
        Ok(redirect_back(form.return_to.as_deref(), "/cart"))
    }
}

/// Remove a line from the cart.
///
/// # Errors
///
/// Returns `AppError::Session` if the session store fails.
#[instrument(skip(shopper))]
pub async fn remove(
    HxRequest(is_htmx): HxRequest,
    shopper: ShopperSession,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Response> {
    let cart = shopper
        .dispatch([CartAction::RemoveItem(LineItemId::new(form.id))])
        .await?;

    if is_htmx {
        edited(&shopper, cart.snapshot(), Surface::from_form(form.surface.as_deref())).await
    } else {
        Ok(redirect_back(form.return_to.as_deref(), "/cart"))
    }
}

/// Open or close the mini-cart drawer.
///
/// # Errors
///
/// Returns `AppError::Session` if the session store fails.
#[instrument(skip(shopper))]
pub async fn toggle(
    HxRequest(is_htmx): HxRequest,
    shopper: ShopperSession,
    Form(form): Form<ToggleCartForm>,
) -> Result<Response> {
    let cart = shopper.dispatch([CartAction::ToggleCart]).await?;

    if is_htmx {
        Ok(MiniCartTemplate {
            cart: CartView::from(cart.snapshot()),
        }
        .into_response())
    } else {
        Ok(redirect_back(form.return_to.as_deref(), "/"))
    }
}

/// Get cart count badge (HTMX).
///
/// # Errors
///
/// Returns `AppError::Session` if the session store fails.
#[instrument(skip(shopper))]
pub async fn count(shopper: ShopperSession) -> Result<impl IntoResponse> {
    let cart = shopper.cart().await?;
    Ok(CartCountTemplate {
        count: cart.snapshot().item_count(),
    })
}

/// Get the mini-cart drawer (HTMX). Renders nothing while the drawer is closed.
///
/// # Errors
///
/// Returns `AppError::Session` if the session store fails.
#[instrument(skip(shopper))]
pub async fn drawer(shopper: ShopperSession) -> Result<impl IntoResponse> {
    let cart = shopper.cart().await?;
    Ok(MiniCartTemplate {
        cart: CartView::from(cart.snapshot()),
    })
}

/// Apply a promo code.
///
/// Invalid codes leave any applied promo in place and show a message. HTMX
/// gets the contents fragment; plain posts get the full page (422 on error).
///
/// # Errors
///
/// Returns `AppError::Session` if the session store fails.
#[instrument(skip(shopper))]
pub async fn apply_promo(
    HxRequest(is_htmx): HxRequest,
    shopper: ShopperSession,
    Form(form): Form<PromoForm>,
) -> Result<Response> {
    let (status, message) = match form.code.parse::<PromoCode>() {
        Ok(code) => {
            shopper.set_promo(Some(code)).await?;
            tracing::info!(code = code.code(), "Promo code applied");
            (
                StatusCode::OK,
                PromoMessage {
                    text: format!("{} applied: 10% off your order", code.code()),
                    is_error: false,
                },
            )
        }
        Err(e) => {
            tracing::debug!(error = %e, "Promo code rejected");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                PromoMessage {
                    text: capitalize(&e.to_string()),
                    is_error: true,
                },
            )
        }
    };

    if is_htmx {
        let cart = shopper.cart().await?;
        let fragment = contents(&shopper, cart.snapshot(), Some(message)).await?;
        Ok((status, fragment).into_response())
    } else {
        Ok((status, page(&shopper, Some(message)).await?).into_response())
    }
}

/// Remove the applied promo code.
///
/// # Errors
///
/// Returns `AppError::Session` if the session store fails.
#[instrument(skip(shopper))]
pub async fn remove_promo(
    HxRequest(is_htmx): HxRequest,
    shopper: ShopperSession,
) -> Result<Response> {
    shopper.set_promo(None).await?;

    if is_htmx {
        let cart = shopper.cart().await?;
        Ok(contents(&shopper, cart.snapshot(), None).await?.into_response())
    } else {
        Ok(redirect_back(None, "/cart"))
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
