//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::journal::Journal;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// configuration and the read-only catalog and journal. Carts are not here:
/// each lives in its visitor's session.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    journal: Journal,
}

impl AppState {
    /// Create application state with the built-in catalog and journal.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self::with_content(config, Catalog::default(), Journal::default())
    }

    /// Create application state with explicit content.
    #[must_use]
    pub fn with_content(config: StorefrontConfig, catalog: Catalog, journal: Journal) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                journal,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    #[must_use]
    pub fn journal(&self) -> &Journal {
        &self.inner.journal
    }
}
