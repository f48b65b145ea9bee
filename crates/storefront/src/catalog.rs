//! In-memory product catalog.
//!
//! The catalog is fixed at startup and shared read-only between handlers.
//! Listing filters and sort orders mirror the shop page controls; unknown
//! query values fall back to "show everything" rather than erroring.

use std::sync::Arc;

use lulu_vine_core::{LineItemId, NewCartItem, Price, ProductId};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Totes,
    Purses,
    Carriers,
    Sleeves,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::Totes, Self::Purses, Self::Carriers, Self::Sleeves];

    /// Query-string value.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Totes => "totes",
            Self::Purses => "purses",
            Self::Carriers => "carriers",
            Self::Sleeves => "sleeves",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Totes => "Wine Totes",
            Self::Purses => "Wine Purses",
            Self::Carriers => "Bottle Carriers",
            Self::Sleeves => "Bottle Sleeves",
        }
    }

    /// Parse a query value. `all` and unknown values mean no filter.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

/// Color family used by the shop's color filter.
///
/// Matching is a substring test on the lowercased color label, so
/// "Deep Wine" and "Bordeaux" both land in [`ColorFamily::Wine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFamily {
    Champagne,
    Pink,
    Wine,
    Neutral,
    Black,
}

impl ColorFamily {
    pub const ALL: [Self; 5] = [
        Self::Champagne,
        Self::Pink,
        Self::Wine,
        Self::Neutral,
        Self::Black,
    ];

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Champagne => "champagne",
            Self::Pink => "pink",
            Self::Wine => "wine",
            Self::Neutral => "neutral",
            Self::Black => "black",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Champagne => "Champagne",
            Self::Pink => "Pink Tones",
            Self::Wine => "Wine Tones",
            Self::Neutral => "Neutrals",
            Self::Black => "Black",
        }
    }

    const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Champagne => &["champagne"],
            Self::Pink => &["pink", "blush"],
            Self::Wine => &["wine", "bordeaux"],
            Self::Neutral => &["linen", "natural"],
            Self::Black => &["black", "midnight"],
        }
    }

    /// Whether a color label belongs to this family.
    #[must_use]
    pub fn matches(self, color_label: &str) -> bool {
        let label = color_label.to_lowercase();
        self.keywords().iter().any(|keyword| label.contains(keyword))
    }

    /// Parse a query value. `all` and unknown values mean no filter.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

/// Shop listing order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Bestsellers first, then new arrivals, otherwise catalog order.
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    Newest,
    Rating,
}

impl SortOrder {
    pub const ALL: [Self; 5] = [
        Self::Featured,
        Self::PriceLow,
        Self::PriceHigh,
        Self::Newest,
        Self::Rating,
    ];

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Newest => "newest",
            Self::Rating => "rating",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
            Self::Newest => "Newest First",
            Self::Rating => "Highest Rated",
        }
    }

    /// Parse a query value, falling back to [`SortOrder::Featured`].
    #[must_use]
    pub fn from_slug(slug: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.slug() == slug)
            .unwrap_or_default()
    }

    /// Stable sort of `products` in this order.
    fn apply(self, products: &mut [&Product]) {
        match self {
            Self::Featured => products.sort_by_key(|p| (!p.is_bestseller, !p.is_new)),
            Self::PriceLow => products.sort_by_key(|p| p.price.amount),
            Self::PriceHigh => products.sort_by(|a, b| b.price.amount.cmp(&a.price.amount)),
            Self::Newest => products.sort_by_key(|p| !p.is_new),
            Self::Rating => products.sort_by(|a, b| b.rating.cmp(&a.rating)),
        }
    }
}

/// Grid or list layout on the shop page. Presentation only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    #[must_use]
    pub fn from_slug(slug: &str) -> Self {
        if slug == "list" { Self::List } else { Self::Grid }
    }

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }
}

/// Raw shop query string: `?category=&color=&sort=&view=`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShopQuery {
    pub category: Option<String>,
    pub color: Option<String>,
    pub sort: Option<String>,
    pub view: Option<String>,
}

/// Parsed shop filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShopFilter {
    pub category: Option<Category>,
    pub color: Option<ColorFamily>,
    pub sort: SortOrder,
    pub view: ViewMode,
}

impl From<&ShopQuery> for ShopFilter {
    fn from(query: &ShopQuery) -> Self {
        Self {
            category: query.category.as_deref().and_then(Category::from_slug),
            color: query.color.as_deref().and_then(ColorFamily::from_slug),
            sort: query.sort.as_deref().map(SortOrder::from_slug).unwrap_or_default(),
            view: query.view.as_deref().map(ViewMode::from_slug).unwrap_or_default(),
        }
    }
}

impl ShopFilter {
    /// Whether any narrowing filter is active.
    #[must_use]
    pub const fn is_filtered(&self) -> bool {
        self.category.is_some() || self.color.is_some()
    }
}

/// A selectable color of a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorVariant {
    /// Display name, e.g. "Blush Pink".
    pub name: String,
    /// Short value used in cart line ids, e.g. "pink".
    pub value: String,
    pub image: String,
}

/// A row in the specifications table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specification {
    pub label: String,
    pub value: String,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub slug: String,
    pub name: String,
    pub price: Price,
    /// Compare-at price when the product is on sale.
    pub original_price: Option<Price>,
    pub image: String,
    pub images: Vec<String>,
    pub category: Category,
    /// Default color label.
    pub color: String,
    pub colors: Vec<ColorVariant>,
    /// Average rating out of 5, one decimal place.
    pub rating: Decimal,
    pub reviews: u32,
    pub is_new: bool,
    pub is_bestseller: bool,
    pub description: String,
    pub features: Vec<String>,
    pub specifications: Vec<Specification>,
}

impl Product {
    /// Look up a color variant by its short value.
    #[must_use]
    pub fn color_variant(&self, value: &str) -> Option<&ColorVariant> {
        self.colors.iter().find(|c| c.value == value)
    }

    /// Cart item for a quick add: product id, default color and image.
    #[must_use]
    pub fn cart_item(&self) -> NewCartItem {
        NewCartItem {
            id: LineItemId::from(&self.id),
            name: self.name.clone(),
            price: self.price.amount,
            image: self.image.clone(),
            color: self.color.clone(),
        }
    }

    /// Cart item for a specific color: `"{id}-{value}"` and the variant's image.
    #[must_use]
    pub fn cart_item_for(&self, variant: &ColorVariant) -> NewCartItem {
        NewCartItem {
            id: LineItemId::for_variant(&self.id, &variant.value),
            name: self.name.clone(),
            price: self.price.amount,
            image: variant.image.clone(),
            color: variant.name.clone(),
        }
    }

    /// Rating rounded to whole stars, for the star row.
    #[must_use]
    pub fn full_stars(&self) -> usize {
        use rust_decimal::prelude::ToPrimitive;
        self.rating.round().to_usize().unwrap_or(0).min(5)
    }
}

/// Read-only product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<Vec<Product>>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(seed_products())
    }
}

impl Catalog {
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(products),
        }
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    #[must_use]
    pub fn get_by_slug(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }

    /// First `limit` products in catalog order (home page line-up).
    #[must_use]
    pub fn featured(&self, limit: usize) -> Vec<&Product> {
        self.products.iter().take(limit).collect()
    }

    /// Up to `limit` other products, in catalog order.
    #[must_use]
    pub fn related(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.id != product.id)
            .take(limit)
            .collect()
    }

    /// Products matching `filter`, sorted by its order.
    #[must_use]
    pub fn browse(&self, filter: &ShopFilter) -> Vec<&Product> {
        let mut products: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| filter.category.is_none_or(|c| p.category == c))
            .filter(|p| filter.color.is_none_or(|c| c.matches(&p.color)))
            .collect();
        filter.sort.apply(&mut products);
        products
    }
}

// =============================================================================
// Seed data
// =============================================================================

fn pexels(photo: u32) -> String {
    format!(
        "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=800"
    )
}

fn variant(name: &str, value: &str, photo: u32) -> ColorVariant {
    ColorVariant {
        name: name.to_string(),
        value: value.to_string(),
        image: pexels(photo),
    }
}

fn specs(rows: &[(&str, &str)]) -> Vec<Specification> {
    rows.iter()
        .map(|(label, value)| Specification {
            label: (*label).to_string(),
            value: (*value).to_string(),
        })
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[allow(clippy::too_many_lines)]
fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            slug: "elegance-tote".to_string(),
            name: "The Elegance Tote".to_string(),
            price: Price::usd_whole(89),
            original_price: None,
            image: pexels(5_591_663),
            images: vec![
                pexels(5_591_663),
                pexels(1_338_155),
                pexels(1_841_841),
                pexels(1_407_322),
            ],
            category: Category::Totes,
            color: "Champagne".to_string(),
            colors: vec![
                variant("Champagne", "champagne", 5_591_663),
                variant("Blush Pink", "pink", 1_338_155),
                variant("Deep Wine", "wine", 1_841_841),
            ],
            rating: Decimal::new(49, 1),
            reviews: 127,
            is_new: false,
            is_bestseller: true,
            description: "The Elegance Tote is our signature piece, designed for the modern wine \
                          enthusiast who values both style and function. Crafted from premium \
                          materials with thoughtful details, this tote securely carries your \
                          favorite bottles while making a sophisticated statement."
                .to_string(),
            features: strings(&[
                "Holds up to 2 standard wine bottles",
                "Padded interior compartments for protection",
                "Premium vegan leather construction",
                "Adjustable shoulder strap",
                "Interior pocket for accessories",
                "Magnetic closure for easy access",
            ]),
            specifications: specs(&[
                ("Dimensions", "12\" W x 14\" H x 6\" D"),
                ("Weight", "1.2 lbs"),
                ("Material", "Premium Vegan Leather"),
                ("Lining", "Soft Microfiber"),
                ("Hardware", "Antique Brass"),
                ("Care", "Spot clean with damp cloth"),
            ]),
        },
        Product {
            id: ProductId::new("2"),
            slug: "rose-purse".to_string(),
            name: "The Rosé Purse".to_string(),
            price: Price::usd_whole(65),
            original_price: None,
            image: pexels(1_338_155),
            images: vec![pexels(1_338_155), pexels(5_591_663)],
            category: Category::Purses,
            color: "Blush Pink".to_string(),
            colors: vec![
                variant("Blush Pink", "pink", 1_338_155),
                variant("Champagne", "champagne", 5_591_663),
            ],
            rating: Decimal::new(48, 1),
            reviews: 89,
            is_new: true,
            is_bestseller: false,
            description: "A crossbody purse with a hidden insulated sleeve for a single bottle. \
                          Dinner party on the way, nobody the wiser."
                .to_string(),
            features: strings(&[
                "Fits one standard wine bottle",
                "Insulated hidden sleeve",
                "Detachable crossbody chain",
                "Card slots and phone pocket",
            ]),
            specifications: specs(&[
                ("Dimensions", "9\" W x 13\" H x 4\" D"),
                ("Weight", "0.9 lbs"),
                ("Material", "Pebbled Vegan Leather"),
                ("Hardware", "Rose Gold"),
                ("Care", "Spot clean with damp cloth"),
            ]),
        },
        Product {
            id: ProductId::new("3"),
            slug: "bordeaux-carrier".to_string(),
            name: "The Bordeaux Carrier".to_string(),
            price: Price::usd_whole(95),
            original_price: None,
            image: pexels(1_841_841),
            images: vec![pexels(1_841_841), pexels(1_284_171)],
            category: Category::Carriers,
            color: "Deep Wine".to_string(),
            colors: vec![
                variant("Deep Wine", "wine", 1_841_841),
                variant("Midnight Black", "black", 1_649_565),
            ],
            rating: Decimal::new(50, 1),
            reviews: 203,
            is_new: false,
            is_bestseller: false,
            description: "A structured carrier with individually padded slots for three bottles \
                          and a reinforced base for the walk from car to table."
                .to_string(),
            features: strings(&[
                "Holds up to 3 standard wine bottles",
                "Individually padded dividers",
                "Reinforced flat base",
                "Leather-wrapped carry handle",
            ]),
            specifications: specs(&[
                ("Dimensions", "11\" W x 13\" H x 4\" D"),
                ("Weight", "1.6 lbs"),
                ("Material", "Waxed Canvas and Vegan Leather"),
                ("Lining", "Quilted Cotton"),
                ("Care", "Wipe clean"),
            ]),
        },
        Product {
            id: ProductId::new("4"),
            slug: "minimalist-sleeve".to_string(),
            name: "The Minimalist Sleeve".to_string(),
            price: Price::usd_whole(45),
            original_price: None,
            image: pexels(1_407_322),
            images: vec![pexels(1_407_322)],
            category: Category::Sleeves,
            color: "Natural Linen".to_string(),
            colors: vec![variant("Natural Linen", "linen", 1_407_322)],
            rating: Decimal::new(47, 1),
            reviews: 156,
            is_new: false,
            is_bestseller: false,
            description: "A slim linen sleeve that turns any bottle into a gift. Drawstring top, \
                          no wrapping paper required."
                .to_string(),
            features: strings(&[
                "Fits standard and magnum bottles",
                "Washed linen with drawstring",
                "Folds flat for storage",
            ]),
            specifications: specs(&[
                ("Dimensions", "5\" W x 15\" H"),
                ("Weight", "0.2 lbs"),
                ("Material", "Washed Linen"),
                ("Care", "Machine wash cold"),
            ]),
        },
        Product {
            id: ProductId::new("5"),
            slug: "statement-tote".to_string(),
            name: "The Statement Tote".to_string(),
            price: Price::usd_whole(110),
            original_price: Some(Price::usd_whole(125)),
            image: pexels(1_649_565),
            images: vec![pexels(1_649_565), pexels(5_591_663)],
            category: Category::Totes,
            color: "Midnight Black".to_string(),
            colors: vec![
                variant("Midnight Black", "black", 1_649_565),
                variant("Champagne", "champagne", 5_591_663),
            ],
            rating: Decimal::new(49, 1),
            reviews: 98,
            is_new: false,
            is_bestseller: false,
            description: "An oversized tote with room for two bottles, a picnic blanket and \
                          everything else the afternoon calls for."
                .to_string(),
            features: strings(&[
                "Holds up to 2 standard wine bottles",
                "Removable padded bottle insert",
                "Zip-top closure",
                "Exterior slip pocket",
            ]),
            specifications: specs(&[
                ("Dimensions", "16\" W x 14\" H x 7\" D"),
                ("Weight", "1.5 lbs"),
                ("Material", "Smooth Vegan Leather"),
                ("Hardware", "Gunmetal"),
                ("Care", "Spot clean with damp cloth"),
            ]),
        },
        Product {
            id: ProductId::new("6"),
            slug: "travel-companion".to_string(),
            name: "The Travel Companion".to_string(),
            price: Price::usd_whole(75),
            original_price: None,
            image: pexels(1_284_171),
            images: vec![pexels(1_284_171), pexels(1_841_841)],
            category: Category::Carriers,
            color: "Sage Green".to_string(),
            colors: vec![variant("Sage Green", "sage", 1_284_171)],
            rating: Decimal::new(46, 1),
            reviews: 67,
            is_new: true,
            is_bestseller: false,
            description: "A padded, leak-resistant carrier built for wine country weekends and \
                          checked luggage alike."
                .to_string(),
            features: strings(&[
                "Holds 2 bottles upright",
                "Leak-resistant lining",
                "Luggage trolley strap",
                "Lockable zip",
            ]),
            specifications: specs(&[
                ("Dimensions", "10\" W x 14\" H x 5\" D"),
                ("Weight", "1.1 lbs"),
                ("Material", "Recycled Nylon"),
                ("Lining", "Waterproof TPU"),
                ("Care", "Wipe clean"),
            ]),
        },
    ]
}
