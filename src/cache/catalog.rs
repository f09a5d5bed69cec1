//! Single-entry catalog cache with absolute expiry.
//!
//! [`CatalogCache`] holds at most one value, the most recently fetched
//! paint list, under the fixed key [`CATALOG_CACHE_KEY`]. The entry's
//! lifetime is measured from the moment it was written; reads do not
//! extend it (moka's `time_to_live`, not `time_to_idle`).
//!
//! # Concurrent misses
//!
//! Two requests that miss at the same time both go upstream and both
//! write. The last write wins. Moka guarantees a reader sees one whole
//! written list, never a mix, and both writers fetched the same source of
//! truth, so no lock is taken around the fetch.
//!
//! A fetch that fails, or whose future is dropped before completion,
//! never reaches [`CatalogCache::insert`], so the previous entry (or the
//! absence of one) survives untouched.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;

use crate::telemetry;
use crate::types::Paint;

/// The one key the catalog is stored under.
pub const CATALOG_CACHE_KEY: &str = "AllPaintsList";

/// Configuration for the catalog cache.
///
/// ```rust
/// # use colormix::CacheConfig;
/// # use std::time::Duration;
/// let config = CacheConfig::new().ttl(Duration::from_secs(3600));
/// assert_eq!(config.ttl, Duration::from_secs(3600));
/// ```
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Absolute lifetime of a cached catalog. Default: 24 hours.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(24 * 3600),
        }
    }
}

impl CacheConfig {
    /// Create a config with the default 24-hour lifetime.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the absolute lifetime of a cached catalog.
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

/// Process-wide store for the fetched catalog.
///
/// Cheap to clone; clones share the same underlying entry.
#[derive(Clone)]
pub struct CatalogCache {
    cache: Cache<&'static str, Arc<Vec<Paint>>>,
}

impl CatalogCache {
    /// Create an empty cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1)
            .time_to_live(config.ttl)
            .build();
        Self { cache }
    }

    /// Look up the cached catalog.
    ///
    /// Returns `None` when nothing was written yet or the entry expired.
    /// Emits cache hit/miss metrics.
    pub async fn get(&self) -> Option<Arc<Vec<Paint>>> {
        match self.cache.get(CATALOG_CACHE_KEY).await {
            Some(paints) => {
                metrics::counter!(telemetry::CACHE_HITS_TOTAL, "cache" => "catalog").increment(1);
                Some(paints)
            }
            None => {
                metrics::counter!(telemetry::CACHE_MISSES_TOTAL, "cache" => "catalog")
                    .increment(1);
                None
            }
        }
    }

    /// Store a freshly fetched catalog, replacing any previous one.
    ///
    /// The expiry clock starts now.
    pub async fn insert(&self, paints: Arc<Vec<Paint>>) {
        self.cache.insert(CATALOG_CACHE_KEY, paints).await;
    }

    /// Drop the cached catalog, if any.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

impl Default for CatalogCache {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}
