//! Time-bounded cache of wait tables, keyed by park slug.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::matcher::WaitTable;

const DEFAULT_CAPACITY: usize = 16;

#[derive(Debug)]
struct CacheEntry {
    table: Arc<WaitTable>,
    fetched_at: Instant,
}

/// LRU cache of wait tables.
///
/// An entry is fresh for `ttl` after it was stored. Stale entries are kept
/// until evicted so a failed refresh can still serve them.
#[derive(Debug)]
pub struct WaitCache {
    entries: LruCache<String, CacheEntry>,
    ttl: Duration,
}

impl WaitCache {
    pub fn new(ttl: Duration) -> Self {
        Self::with_capacity(ttl, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(ttl: Duration, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self { entries: LruCache::new(capacity), ttl }
    }

    /// Fresh table for `scope`, if any.
    pub fn get(&mut self, scope: &str) -> Option<Arc<WaitTable>> {
        let ttl = self.ttl;
        self.entries
            .get(scope)
            .filter(|entry| entry.fetched_at.elapsed() < ttl)
            .map(|entry| Arc::clone(&entry.table))
    }

    /// Table for `scope` regardless of age.
    pub fn get_stale(&mut self, scope: &str) -> Option<Arc<WaitTable>> {
        self.entries.get(scope).map(|entry| Arc::clone(&entry.table))
    }

    pub fn set(&mut self, scope: &str, table: Arc<WaitTable>) {
        self.entries.put(scope.to_string(), CacheEntry { table, fetched_at: Instant::now() });
    }

    pub fn invalidate(&mut self, scope: &str) {
        self.entries.pop(scope);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
