//! Shop listing route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{OriginalUri, Query, State},
    response::IntoResponse,
};
use tracing::instrument;

use crate::catalog::{Category, ColorFamily, ShopFilter, ShopQuery, SortOrder, ViewMode};
use crate::filters;
use crate::routes::products::ProductCardView;
use crate::state::AppState;

/// One `<option>` in a filter select.
#[derive(Clone)]
pub struct OptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Shop page template.
#[derive(Template, WebTemplate)]
#[template(path = "shop/index.html")]
pub struct ShopIndexTemplate {
    pub products: Vec<ProductCardView>,
    pub total: usize,
    pub categories: Vec<OptionView>,
    pub colors: Vec<OptionView>,
    pub sorts: Vec<OptionView>,
    pub is_list_view: bool,
    pub is_filtered: bool,
    /// Current query string, for links that switch only the view mode.
    pub category_slug: &'static str,
    pub color_slug: &'static str,
    pub sort_slug: &'static str,
    /// The listing URL as requested, so a plain quick add keeps the filters.
    pub return_to: String,
}

fn all_option(label: &'static str, selected: bool) -> OptionView {
    OptionView {
        value: "all",
        label,
        selected,
    }
}

fn category_options(current: Option<Category>) -> Vec<OptionView> {
    std::iter::once(all_option("All Products", current.is_none()))
        .chain(Category::ALL.into_iter().map(|c| OptionView {
            value: c.slug(),
            label: c.label(),
            selected: current == Some(c),
        }))
        .collect()
}

fn color_options(current: Option<ColorFamily>) -> Vec<OptionView> {
    std::iter::once(all_option("All Colors", current.is_none()))
        .chain(ColorFamily::ALL.into_iter().map(|c| OptionView {
            value: c.slug(),
            label: c.label(),
            selected: current == Some(c),
        }))
        .collect()
}

fn sort_options(current: SortOrder) -> Vec<OptionView> {
    SortOrder::ALL
        .into_iter()
        .map(|s| OptionView {
            value: s.slug(),
            label: s.label(),
            selected: s == current,
        })
        .collect()
}

/// Display the shop listing with category, color and sort controls.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<ShopQuery>,
) -> impl IntoResponse {
    let filter = ShopFilter::from(&query);
    let catalog = state.catalog();
    let products: Vec<ProductCardView> = catalog
        .browse(&filter)
        .into_iter()
        .map(ProductCardView::from)
        .collect();

    tracing::debug!(shown = products.len(), total = catalog.len(), "shop listing");

    ShopIndexTemplate {
        products,
        total: catalog.len(),
        categories: category_options(filter.category),
        colors: color_options(filter.color),
        sorts: sort_options(filter.sort),
        is_list_view: filter.view == ViewMode::List,
        is_filtered: filter.is_filtered(),
        category_slug: filter.category.map_or("all", Category::slug),
        color_slug: filter.color.map_or("all", ColorFamily::slug),
        sort_slug: filter.sort.slug(),
        return_to: uri
            .path_and_query()
            .map_or_else(|| "/shop".to_string(), ToString::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_options_mark_selection() {
        let options = category_options(Some(Category::Purses));
        assert_eq!(options.len(), 5);
        assert!(!options[0].selected);
        assert!(options.iter().any(|o| o.value == "purses" && o.selected));
    }

    #[test]
    fn test_all_selected_without_filter() {
        let options = color_options(None);
        assert_eq!(options[0].value, "all");
        assert!(options[0].selected);
        assert_eq!(options.iter().filter(|o| o.selected).count(), 1);
    }

    #[test]
    fn test_sort_options_default_featured() {
        let options = sort_options(SortOrder::default());
        assert!(options[0].selected);
        assert_eq!(options[0].label, "Featured");
    }
}
