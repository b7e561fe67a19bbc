//! In-memory caching using moka
//!
//! Resolving availability means one or two upstream HTTP calls, so the
//! resolved window is cached per start date and refreshed in the background.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use moka::future::Cache;
use serde::Serialize;
use tokio::time::interval;
use tracing::info;

use crate::availability::{AvailabilityResolver, AvailabilitySource, ResolvedAvailability};

/// Application cache holding resolved availability windows
#[derive(Clone)]
pub struct AppCache {
    /// Window start date -> resolved window
    pub availability: Cache<NaiveDate, Arc<ResolvedAvailability>>,
}

impl AppCache {
    /// Create a new cache instance; `ttl` bounds how stale availability may get
    pub fn new(ttl: Duration) -> Self {
        Self {
            // Today's window, plus yesterday's around midnight
            availability: Cache::builder()
                .max_capacity(4)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Resolved window starting at `today`, loading it on a miss.
    ///
    /// Concurrent misses for the same day share a single resolution.
    pub async fn availability(
        &self,
        resolver: &AvailabilityResolver,
        today: NaiveDate,
    ) -> Arc<ResolvedAvailability> {
        self.availability
            .get_with(today, async {
                tracing::debug!("Cache MISS for availability window {}", today);
                Arc::new(resolver.resolve(today).await)
            })
            .await
    }

    /// Get cache statistics for monitoring
    pub async fn stats(&self, today: NaiveDate) -> CacheStats {
        let current_source = self.availability.get(&today).await.map(|r| r.source);
        CacheStats {
            availability_windows: self.availability.entry_count(),
            current_source,
        }
    }

    /// Invalidate all caches
    pub fn invalidate_all(&self) {
        self.availability.invalidate_all();
        info!("All caches invalidated");
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub availability_windows: u64,
    /// Stage that produced the cached window for today, if cached
    pub current_source: Option<AvailabilitySource>,
}

/// Start background cache warmer
///
/// Resolves today's window on startup and again every `every`.
pub async fn start_cache_warmer(cache: AppCache, resolver: Arc<AvailabilityResolver>, every: Duration) {
    let mut interval = interval(every);
    loop {
        interval.tick().await;
        warm_cache(&cache, &resolver).await;
    }
}

/// Replace today's window with a fresh resolution
async fn warm_cache(cache: &AppCache, resolver: &AvailabilityResolver) {
    let today = Local::now().date_naive();
    let resolved = resolver.resolve(today).await;
    info!(
        "Availability cache warmed for {} from {}",
        today, resolved.source
    );
    cache.availability.insert(today, Arc::new(resolved)).await;
}
