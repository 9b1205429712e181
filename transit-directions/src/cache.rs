//! Caching layer for route backend responses.
//!
//! Finalized itineraries are cached per query. Query times are bucketed
//! (5-minute buckets by default) so that repeated requests a few seconds
//! apart share an entry, while the TTL bounds staleness.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::backend::{RouteClient, RouteError, RouteQuery};
use crate::domain::Itinerary;

/// Cache key for a route query.
///
/// Coordinates are keyed by their display form since `f64` is not `Hash`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteKey {
    start: String,
    end: String,
    time_bucket: i64,
    arrive_by: bool,
    start_name: Option<String>,
    end_name: Option<String>,
}

/// Cached itinerary list.
type RouteEntry = Arc<Vec<Itinerary>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,

    /// Time bucket size in minutes.
    pub bucket_mins: u16,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
            max_capacity: 1000,
            bucket_mins: 5,
        }
    }
}

impl CacheConfig {
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_max_capacity(mut self, capacity: u64) -> Self {
        self.max_capacity = capacity;
        self
    }

    pub fn with_bucket_mins(mut self, mins: u16) -> Self {
        self.bucket_mins = mins;
        self
    }
}

/// Cache for finalized routes.
pub struct RouteCache {
    routes: MokaCache<RouteKey, RouteEntry>,

    /// Time bucket size in minutes (at least 1).
    bucket_mins: u16,
}

impl RouteCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self {
            routes,
            bucket_mins: config.bucket_mins.max(1),
        }
    }

    /// Compute the time bucket for a query time.
    fn time_bucket(&self, timestamp_secs: i64) -> i64 {
        timestamp_secs.div_euclid(i64::from(self.bucket_mins) * 60)
    }

    /// Build the cache key for a query.
    pub fn key(&self, query: &RouteQuery) -> RouteKey {
        RouteKey {
            start: query.start.to_string(),
            end: query.end.to_string(),
            time_bucket: self.time_bucket(query.time.timestamp()),
            arrive_by: query.arrive_by,
            start_name: query.start_name.clone(),
            end_name: query.end_name.clone(),
        }
    }

    pub async fn get(&self, key: &RouteKey) -> Option<RouteEntry> {
        self.routes.get(key).await
    }

    pub async fn insert(&self, key: RouteKey, entry: RouteEntry) {
        self.routes.insert(key, entry).await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }
}

/// Route client with caching.
pub struct CachedRouteClient {
    client: RouteClient,
    cache: RouteCache,
}

impl CachedRouteClient {
    pub fn new(client: RouteClient, cache_config: &CacheConfig) -> Self {
        Self {
            client,
            cache: RouteCache::new(cache_config),
        }
    }

    /// Get finalized routes, using the cache if available.
    ///
    /// Errors are not cached.
    pub async fn get_routes(&self, query: &RouteQuery) -> Result<RouteEntry, RouteError> {
        let key = self.cache.key(query);

        if let Some(cached) = self.cache.get(&key).await {
            debug!(start = %query.start, end = %query.end, "route cache hit");
            return Ok(cached);
        }

        let itineraries = Arc::new(self.client.get_routes(query).await?);
        self.cache.insert(key, itineraries.clone()).await;

        Ok(itineraries)
    }

    /// Access the underlying client for operations that bypass cache.
    pub fn client(&self) -> &RouteClient {
        &self.client
    }

    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}
