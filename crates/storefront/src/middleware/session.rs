//! Session middleware configuration.
//!
//! Sets up in-memory sessions using tower-sessions. A visitor's cart lives
//! exactly as long as their session does; nothing is persisted across
//! restarts.
//!
//! Records are held in a bounded `moka` cache. Each entry expires at its
//! session's own expiry date, so an abandoned cart is evicted instead of
//! lingering until the process exits.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::future::Cache;
use tower_sessions::cookie::time::OffsetDateTime;
use tower_sessions::session::{Id, Record};
use tower_sessions::session_store::{self, SessionStore};
use tower_sessions::{Expiry, SessionManagerLayer};

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "lv_session";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Upper bound on live sessions held in memory.
const SESSION_CAPACITY: u64 = 100_000;

// =============================================================================
// CartSessionStore
// =============================================================================

/// Session store backed by an expiring `moka` cache.
#[derive(Debug, Clone)]
pub struct CartSessionStore {
    cache: Cache<Id, Record>,
}

impl CartSessionStore {
    /// Create a store holding at most `max_capacity` sessions.
    #[must_use]
    pub fn new(max_capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(RecordExpiry)
            .build();
        Self { cache }
    }

    /// Number of sessions currently held. Approximate until pending
    /// cache maintenance has run.
    #[must_use]
    pub fn session_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Run pending evictions now instead of on the next cache access.
    pub async fn evict_expired(&self) {
        self.cache.run_pending_tasks().await;
    }
}

impl Default for CartSessionStore {
    fn default() -> Self {
        Self::new(SESSION_CAPACITY)
    }
}

#[async_trait]
impl SessionStore for CartSessionStore {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        while self.cache.contains_key(&record.id) {
            record.id = Id::default();
        }
        self.cache.insert(record.id, record.clone()).await;
        Ok(())
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        self.cache.insert(record.id, record.clone()).await;
        Ok(())
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        Ok(self
            .cache
            .get(session_id)
            .await
            .filter(|record| time_left(record) > Duration::ZERO))
    }

    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        self.cache.invalidate(session_id).await;
        Ok(())
    }
}

/// Per-entry expiry that follows the record's own expiry date.
struct RecordExpiry;

impl moka::Expiry<Id, Record> for RecordExpiry {
    fn expire_after_create(
        &self,
        _id: &Id,
        record: &Record,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(time_left(record))
    }

    fn expire_after_update(
        &self,
        _id: &Id,
        record: &Record,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(time_left(record))
    }
}

/// Time until the record expires, zero once it has.
fn time_left(record: &Record) -> Duration {
    Duration::try_from(record.expiry_date - OffsetDateTime::now_utc()).unwrap_or(Duration::ZERO)
}

// =============================================================================
// Layer
// =============================================================================

/// Create the session layer with an in-memory store.
///
/// # Arguments
///
/// * `config` - Storefront configuration (for the `Secure` cookie flag)
#[must_use]
pub fn create_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<CartSessionStore> {
    SessionManagerLayer::new(CartSessionStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use tower_sessions::cookie::time::Duration as CookieDuration;

    use super::*;

    fn cart_record(expires_in: CookieDuration) -> Record {
        Record {
            id: Id::default(),
            data: HashMap::from([(
                "cart".to_string(),
                serde_json::json!({ "items": [], "total": "0", "is_open": false }),
            )]),
            expiry_date: OffsetDateTime::now_utc() + expires_in,
        }
    }

    #[tokio::test]
    async fn test_live_session_loads() {
        let store = CartSessionStore::default();
        let mut record = cart_record(CookieDuration::minutes(30));
        store.create(&mut record).await.unwrap();

        let loaded = store.load(&record.id).await.unwrap();
        assert_eq!(loaded, Some(record));
    }

    #[tokio::test]
    async fn test_expired_session_cart_is_evicted() {
        let store = CartSessionStore::default();
        let mut record = cart_record(CookieDuration::milliseconds(50));
        store.create(&mut record).await.unwrap();
        assert!(store.load(&record.id).await.unwrap().is_some());

        tokio::time::sleep(Duration::from_millis(120)).await;

        assert_eq!(store.load(&record.id).await.unwrap(), None);
        store.evict_expired().await;
        assert_eq!(store.session_count(), 0);
    }

    #[tokio::test]
    async fn test_save_extends_expiry() {
        let store = CartSessionStore::default();
        let mut record = cart_record(CookieDuration::milliseconds(50));
        store.create(&mut record).await.unwrap();

        record.expiry_date = OffsetDateTime::now_utc() + CookieDuration::minutes(30);
        store.save(&record).await.unwrap();
        tokio::time::sleep(Duration::from_millis(120)).await;

        assert!(store.load(&record.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_removes_session() {
        let store = CartSessionStore::default();
        let mut record = cart_record(CookieDuration::minutes(30));
        store.create(&mut record).await.unwrap();

        store.delete(&record.id).await.unwrap();
        assert_eq!(store.load(&record.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_capacity_is_bounded() {
        let store = CartSessionStore::new(10);
        for _ in 0..50 {
            let mut record = cart_record(CookieDuration::minutes(30));
            store.create(&mut record).await.unwrap();
        }
        store.evict_expired().await;
        assert!(store.session_count() <= 10);
    }
}
