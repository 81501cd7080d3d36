//! Response cache backing store
//!
//! Stores parsed JSON payloads together with their insertion instant. The
//! TTL is supplied on every read so the store itself carries no policy; a
//! client with a different TTL sees the same entries through its own window.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use serde_json::Value;

/// A cached payload and the instant it was stored
#[derive(Debug, Clone)]
struct CacheEntry {
    /// Parsed payload as returned by the fetch pipeline
    data: Value,
    /// When the entry was written
    inserted_at: Instant,
}

/// Thread-safe in-memory cache mapping request URLs to response payloads
///
/// Entries are replaced on write, never mutated in place, and never removed
/// on expiry: a lookup either returns a fresh entry (age strictly less than
/// the TTL) or behaves as if the entry were absent. Memory therefore grows
/// with the number of distinct URLs fetched over the cache's lifetime, which
/// is acceptable for the low URL cardinality of a single blog. [`clear`]
/// exists for long-lived processes that want to drop everything.
///
/// [`clear`]: ResponseCache::clear
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl ResponseCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the payload cached for `url` if its age is strictly less
    /// than `ttl`
    ///
    /// Stale entries are treated as absent but left in place; the next
    /// successful fetch overwrites them.
    pub fn get(&self, url: &str, ttl: Duration) -> Option<Value> {
        let entries = self.entries.read();
        let entry = entries.get(url)?;
        if entry.inserted_at.elapsed() < ttl {
            Some(entry.data.clone())
        } else {
            None
        }
    }

    /// Stores `data` under `url` with the current instant, replacing any
    /// previous entry for that URL
    pub fn put(&self, url: &str, data: Value) {
        let mut entries = self.entries.write();
        entries.insert(
            url.to_string(),
            CacheEntry {
                data,
                inserted_at: Instant::now(),
            },
        );
    }

    /// Number of entries currently held, fresh and stale alike
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the cache holds no entries at all
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drops every entry
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}
