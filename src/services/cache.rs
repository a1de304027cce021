use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::hash::Hash;
use std::time::Duration;

/// A thread-safe, time-windowed result cache.
///
/// Entries are never evicted on read: a stale entry is still returned, flagged
/// as not fresh, so the caller decides whether to recompute and overwrite it.
pub struct ResultCache<K, V> {
    data: DashMap<K, CacheEntry<V>>,
    ttl: Duration,
}

struct CacheEntry<V> {
    value: V,
    stored_at: DateTime<Utc>,
}

impl<K: Eq + Hash, V: Clone> ResultCache<K, V> {
    /// Create a new cache whose entries stay fresh for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            data: DashMap::new(),
            ttl,
        }
    }

    /// Get a value and whether it is still fresh.
    pub fn get(&self, key: &K) -> Option<(V, bool)> {
        self.get_at(key, Utc::now())
    }

    /// Get a value and whether it was fresh at `now`.
    pub fn get_at(&self, key: &K, now: DateTime<Utc>) -> Option<(V, bool)> {
        let entry = self.data.get(key)?;
        let age = now.signed_duration_since(entry.stored_at);
        // A stamp ahead of `now` is fresh only within one window of it.
        let distance = if age < chrono::Duration::zero() { -age } else { age };
        let fresh = distance.to_std().map(|d| d < self.ttl).unwrap_or(false);
        Some((entry.value.clone(), fresh))
    }

    /// Store a value computed at `timestamp`, replacing any previous entry.
    pub fn put(&self, key: K, value: V, timestamp: DateTime<Utc>) {
        self.data.insert(
            key,
            CacheEntry {
                value,
                stored_at: timestamp,
            },
        );
    }

    /// Remove a value from the cache.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.data.remove(key).map(|(_, entry)| entry.value)
    }

    /// Clear all entries from the cache.
    pub fn clear(&self) {
        self.data.clear();
    }

    /// Get the number of entries in the cache (including stale).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
