use std::collections::BTreeSet;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};
use lru::LruCache;
use parking_lot::Mutex;
use serde::{Serialize, Deserialize};
use crate::search::results::SearchResult;

/// Which engine produced a cached result
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchMode {
    Boolean,
    Vector,
}

/// Cache key. `corpus_version` changes on every corpus mutation, so an entry
/// can only be hit against the exact corpus it was computed from.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct QueryKey {
    pub mode: SearchMode,
    pub query: String,
    pub corpus_version: u64,
}

impl QueryKey {
    pub fn new(mode: SearchMode, query: &str, corpus_version: u64) -> Self {
        QueryKey {
            mode,
            query: query.to_lowercase(),
            corpus_version,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CachedResult {
    Boolean(BTreeSet<String>),
    Ranked(Vec<SearchResult>),
}

/// Query result cache for avoiding recomputation
pub struct QueryCache {
    cache: Option<Mutex<LruCache<QueryKey, CachedResult>>>,
    size_limit: usize,
    hit_count: AtomicUsize,
    miss_count: AtomicUsize,
}

impl QueryCache {
    /// A `size_limit` of zero disables caching.
    pub fn new(size_limit: usize) -> Self {
        QueryCache {
            cache: NonZeroUsize::new(size_limit).map(|cap| Mutex::new(LruCache::new(cap))),
            size_limit,
            hit_count: AtomicUsize::new(0),
            miss_count: AtomicUsize::new(0),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.cache.is_some()
    }

    pub fn get(&self, key: &QueryKey) -> Option<CachedResult> {
        let cache = self.cache.as_ref()?;

        if let Some(results) = cache.lock().get(key) {
            self.hit_count.fetch_add(1, Ordering::Relaxed);
            Some(results.clone())
        } else {
            self.miss_count.fetch_add(1, Ordering::Relaxed);
            None
        }
    }

    pub fn put(&self, key: QueryKey, results: CachedResult) {
        if let Some(cache) = &self.cache {
            cache.lock().put(key, results);
        }
    }

    pub fn clear(&self) {
        if let Some(cache) = &self.cache {
            cache.lock().clear();
        }
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hit_count: self.hit_count.load(Ordering::Relaxed),
            miss_count: self.miss_count.load(Ordering::Relaxed),
            size: self.cache.as_ref().map_or(0, |cache| cache.lock().len()),
            capacity: self.size_limit,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hit_count: usize,
    pub miss_count: usize,
    pub size: usize,
    pub capacity: usize,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hit_count + self.miss_count;
        if total == 0 {
            0.0
        } else {
            self.hit_count as f64 / total as f64
        }
    }
}
