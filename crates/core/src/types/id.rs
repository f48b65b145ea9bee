//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. Catalog and cart ids
//! are strings: products are keyed by short codes, and cart lines by
//! `"{productId}-{colorValue}"` when a variant was chosen.

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`
/// - `From<String>`, `From<&str>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use lulu_vine_core::define_id;
/// define_id!(WishlistId);
/// define_id!(ReviewId);
///
/// let wishlist = WishlistId::new("w-1");
/// let review = ReviewId::new("w-1");
///
/// // These are different types, so this won't compile:
/// // let _: WishlistId = review;
/// assert_eq!(wishlist.as_str(), review.as_str());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(LineItemId);
define_id!(PostId);

impl LineItemId {
    /// Cart line id for a product in a specific color.
    ///
    /// Two colors of the same product are distinct lines; the same color
    /// added twice merges into one line.
    #[must_use]
    pub fn for_variant(product: &ProductId, color_value: &str) -> Self {
        Self(format!("{product}-{color_value}"))
    }
}

impl From<&ProductId> for LineItemId {
    /// Cart line id for a product added without choosing a variant.
    fn from(product: &ProductId) -> Self {
        Self(product.as_str().to_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_line_id() {
        let product = ProductId::new("1");
        assert_eq!(
            LineItemId::for_variant(&product, "champagne").as_str(),
            "1-champagne"
        );
    }

    #[test]
    fn test_plain_line_id() {
        let product = ProductId::new("3");
        assert_eq!(LineItemId::from(&product).as_str(), "3");
    }

    #[test]
    fn test_serde_transparent() {
        let id = LineItemId::new("1-wine");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"1-wine\"");
        let parsed: LineItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
