//! Live wait-time data
//!
//! [`LiveWaits`] sits between a [`WaitSource`] and everything that matches
//! names against wait tables. Callers always get a table back: a fresh one,
//! a cached one, the last one that was fetched, or the built-in fallback
//! list for the park. Fetch errors are logged, never returned.

pub mod cache;
pub mod fallback;
pub mod http;

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt, Shared};
use log::{debug, warn};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::matcher::{WaitRecord, WaitTable};
use crate::parks::Park;

pub use cache::WaitCache;
pub use fallback::{fallback_records, UnavailableSource};
pub use http::ThemeParksSource;

#[derive(Debug, thiserror::Error)]
pub enum LiveDataError {
    #[error("Live data request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("No wait data available for park '{0}'")]
    UnknownPark(String),
    #[error("Live data source unavailable: {0}")]
    Unavailable(String),
}

/// Anything that can produce the current wait records for a park.
#[async_trait]
pub trait WaitSource: Send + Sync {
    async fn fetch(&self, park: &Park) -> Result<Vec<WaitRecord>, LiveDataError>;
}

/// The HTTP source for `base_url`, or an [`UnavailableSource`] when no
/// client can be built, so lookups still reach the offline lists.
pub fn http_source_or_offline(base_url: &str, timeout: Duration) -> Arc<dyn WaitSource> {
    match ThemeParksSource::new(base_url, timeout) {
        Ok(source) => Arc::new(source),
        Err(e) => {
            warn!("Could not set up live data client, using offline lists: {}", e);
            Arc::new(UnavailableSource::new(e.to_string()))
        }
    }
}

/// Where a snapshot's table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Live,
    Cached,
    /// The last good table, served because a refresh failed.
    Stale,
    Fallback,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Origin::Live => "live",
            Origin::Cached => "cached",
            Origin::Stale => "stale (refresh failed)",
            Origin::Fallback => "offline list (no live data)",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone)]
pub struct WaitSnapshot {
    pub table: Arc<WaitTable>,
    pub origin: Origin,
}

// Errors are flattened to strings so the shared output is Clone.
type SharedFetch = Shared<BoxFuture<'static, Result<Arc<WaitTable>, String>>>;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct LiveWaits {
    source: Arc<dyn WaitSource>,
    cache: Arc<Mutex<WaitCache>>,
    in_flight: Mutex<HashMap<&'static str, SharedFetch>>,
}

impl LiveWaits {
    pub fn new(source: Arc<dyn WaitSource>, ttl: Duration) -> Self {
        Self::with_cache(source, WaitCache::new(ttl))
    }

    pub fn with_cache(source: Arc<dyn WaitSource>, cache: WaitCache) -> Self {
        Self {
            source,
            cache: Arc::new(Mutex::new(cache)),
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    /// Current table for `park`.
    ///
    /// Concurrent calls for the same park share a single fetch.
    pub async fn snapshot(&self, park: &'static Park) -> WaitSnapshot {
        if let Some(table) = lock(&self.cache).get(park.slug) {
            debug!("Serving cached wait table for {}", park.slug);
            return WaitSnapshot { table, origin: Origin::Cached };
        }

        let fetch = self.join_fetch(park);
        let result = fetch.clone().await;
        {
            let mut in_flight = lock(&self.in_flight);
            if in_flight.get(park.slug).is_some_and(|current| current.ptr_eq(&fetch)) {
                in_flight.remove(park.slug);
            }
        }

        match result {
            Ok(table) => WaitSnapshot { table, origin: Origin::Live },
            Err(e) => {
                warn!("Could not fetch wait times for {}: {}", park.name, e);
                self.substitute(park)
            }
        }
    }

    /// Drop the cached table and fetch again.
    pub async fn refresh(&self, park: &'static Park) -> WaitSnapshot {
        lock(&self.cache).invalidate(park.slug);
        self.snapshot(park).await
    }

    fn join_fetch(&self, park: &'static Park) -> SharedFetch {
        let mut in_flight = lock(&self.in_flight);
        if let Some(existing) = in_flight.get(park.slug) {
            debug!("Joining in-flight fetch for {}", park.slug);
            return existing.clone();
        }

        let source = Arc::clone(&self.source);
        let cache = Arc::clone(&self.cache);
        let fetch = async move {
            let records = source.fetch(park).await.map_err(|e| e.to_string())?;
            let table = Arc::new(WaitTable::from_records(records));
            lock(&cache).set(park.slug, Arc::clone(&table));
            Ok(table)
        }
        .boxed()
        .shared();
        in_flight.insert(park.slug, fetch.clone());
        fetch
    }

    fn substitute(&self, park: &Park) -> WaitSnapshot {
        if let Some(table) = lock(&self.cache).get_stale(park.slug) {
            return WaitSnapshot { table, origin: Origin::Stale };
        }
        let records = fallback_records(park).unwrap_or_else(|e| {
            warn!("{}", e);
            Vec::new()
        });
        WaitSnapshot { table: Arc::new(WaitTable::from_records(records)), origin: Origin::Fallback }
    }
}
