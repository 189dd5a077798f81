//! Bounded LRU cache from raw position input to canonical positions.
//!
//! Training sessions replay the same small set of starting positions over
//! and over; this cache skips repeated oracle canonicalization for them.
//! Entries never go stale (the raw-to-canonical mapping is pure), so there
//! is no TTL: eviction is strict least-recently-used only.

use std::collections::{HashMap, VecDeque};

use log::debug;

use crate::chess_types::Position;

/// Default entry capacity. Tunable per instance, not a behavioral invariant.
pub const DEFAULT_CACHE_CAPACITY: usize = 100;

#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub evictions: u64,
}

/// Strict-LRU map from raw position text to its canonical `Position`.
///
/// Every successful `get` promotes the entry to most-recently-used;
/// inserting past capacity evicts exactly the least-recently-used entry.
#[derive(Debug)]
pub struct CanonicalizationCache {
    capacity: usize,
    map: HashMap<String, Position>,
    // Front is least recently used, back is most recently used.
    recency: VecDeque<String>,
    stats: CacheStats,
}

impl CanonicalizationCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            map: HashMap::with_capacity(capacity),
            recency: VecDeque::with_capacity(capacity),
            stats: CacheStats::default(),
        }
    }

    /// Look up a raw key, promoting it to most-recently-used on a hit.
    pub fn get(&mut self, raw_key: &str) -> Option<Position> {
        match self.map.get(raw_key) {
            Some(position) => {
                let position = position.clone();
                self.stats.hits += 1;
                self.promote(raw_key);
                Some(position)
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Insert or refresh an entry, evicting the least-recently-used entry
    /// when the insertion would exceed capacity.
    pub fn put(&mut self, raw_key: &str, canonical: Position) {
        if self.map.insert(raw_key.to_owned(), canonical).is_some() {
            self.promote(raw_key);
            return;
        }

        self.stats.insertions += 1;
        self.recency.push_back(raw_key.to_owned());

        if self.map.len() > self.capacity {
            if let Some(evicted) = self.recency.pop_front() {
                self.map.remove(&evicted);
                self.stats.evictions += 1;
                debug!("canonicalization cache evicted entry for {evicted:?}");
            }
        }
    }

    pub fn clear(&mut self) {
        self.map.clear();
        self.recency.clear();
        self.stats = CacheStats::default();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    fn promote(&mut self, raw_key: &str) {
        if let Some(index) = self.recency.iter().position(|k| k == raw_key) {
            let key = self
                .recency
                .remove(index)
                .expect("recency index was just located");
            self.recency.push_back(key);
        }
    }
}

impl Default for CanonicalizationCache {
    fn default() -> Self {
        Self::new()
    }
}
