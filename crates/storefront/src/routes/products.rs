//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use tracing::instrument;

use crate::catalog::{ColorVariant, Product, Specification};
use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

/// Number of related products shown under the detail page.
const RELATED_PRODUCTS_COUNT: usize = 3;

/// Product card display data (shop grid, home line-up, related products).
#[derive(Clone)]
pub struct ProductCardView {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub price: String,
    pub original_price: Option<String>,
    pub image: String,
    pub color: String,
    pub category: &'static str,
    pub rating: String,
    pub full_stars: usize,
    pub reviews: u32,
    pub is_new: bool,
    pub is_bestseller: bool,
    pub description: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            slug: product.slug.clone(),
            name: product.name.clone(),
            price: product.price.display_compact(),
            original_price: product.original_price.map(|p| p.display_compact()),
            image: product.image.clone(),
            color: product.color.clone(),
            category: product.category.label(),
            rating: format!("{:.1}", product.rating),
            full_stars: product.full_stars(),
            reviews: product.reviews,
            is_new: product.is_new,
            is_bestseller: product.is_bestseller,
            description: product.description.clone(),
        }
    }
}

/// Full product display data for the detail page.
pub struct ProductDetailView {
    pub card: ProductCardView,
    pub images: Vec<String>,
    pub colors: Vec<ColorVariant>,
    pub features: Vec<String>,
    pub specifications: Vec<Specification>,
}

impl From<&Product> for ProductDetailView {
    fn from(product: &Product) -> Self {
        Self {
            card: ProductCardView::from(product),
            images: product.images.clone(),
            colors: product.colors.clone(),
            features: product.features.clone(),
            specifications: product.specifications.clone(),
        }
    }
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductDetailView,
    pub related_products: Vec<ProductCardView>,
    /// Quantities offered by the quantity picker.
    pub quantities: Vec<u32>,
    /// Where a plain add-to-cart form redirects after posting.
    pub return_to: String,
}

/// Display product detail page.
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown slug.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse> {
    let catalog = state.catalog();
    let product = catalog
        .get_by_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("product {slug}")))?;

    let related_products = catalog
        .related(product, RELATED_PRODUCTS_COUNT)
        .into_iter()
        .map(ProductCardView::from)
        .collect();

    Ok(ProductShowTemplate {
        product: ProductDetailView::from(product),
        related_products,
        quantities: (1..=super::cart::MAX_ADD_QUANTITY).collect(),
        return_to: format!("/product/{}", product.slug),
    })
}
