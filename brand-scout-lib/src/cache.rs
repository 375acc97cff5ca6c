//! Short-TTL result cache for probe results.
//!
//! Keys come from [`ProbeTarget::cache_key`]. The map is split into a fixed
//! number of independently locked shards, so unrelated keys never contend
//! on the same lock. Expiry is checked lazily on read: an expired entry is
//! evicted and reported as a miss.

use crate::types::ProbeResult;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, warn};

const SHARD_COUNT: usize = 16;

#[derive(Debug, Clone)]
struct CacheEntry {
    value: ProbeResult,
    expires_at: Instant,
}

/// Process-local cache of probe results with per-entry TTLs.
#[derive(Debug)]
pub struct ResultCache {
    shards: Vec<Mutex<HashMap<String, CacheEntry>>>,
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            shards: (0..SHARD_COUNT).map(|_| Mutex::new(HashMap::new())).collect(),
        }
    }

    /// Look up a cached result.
    ///
    /// Returns `None` on a miss, on an expired entry (which is evicted), and
    /// on an entry whose stored target does not match `key`.
    pub fn get(&self, key: &str) -> Option<ProbeResult> {
        let mut shard = self.shard(key);
        let entry = shard.get(key)?;

        if Instant::now() >= entry.expires_at {
            debug!(key, "cache entry expired");
            shard.remove(key);
            return None;
        }

        if entry.value.target.cache_key() != key {
            warn!(key, stored = %entry.value.target.label(), "cache entry does not match its key, evicting");
            shard.remove(key);
            return None;
        }

        Some(entry.value.clone())
    }

    /// Store a result for `ttl`, replacing any previous entry for `key`.
    pub fn set(&self, key: &str, value: ProbeResult, ttl: Duration) {
        let entry = CacheEntry {
            value,
            expires_at: Instant::now() + ttl,
        };
        self.shard(key).insert(key.to_string(), entry);
    }

    /// Remove a single entry, e.g. before a caller-initiated retry.
    pub fn invalidate(&self, key: &str) -> bool {
        self.shard(key).remove(key).is_some()
    }

    /// Drop every expired entry. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut removed = 0;
        for shard in &self.shards {
            let mut guard = lock(shard);
            let before = guard.len();
            guard.retain(|_, entry| entry.expires_at > now);
            removed += before - guard.len();
        }
        removed
    }

    /// Number of stored entries, including ones not yet lazily evicted.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|s| lock(s).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        for shard in &self.shards {
            lock(shard).clear();
        }
    }

    fn shard(&self, key: &str) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        let index = (hasher.finish() as usize) % self.shards.len();
        lock(&self.shards[index])
    }
}

/// Lock a shard, recovering from poisoning; entries are replaced whole so a
/// panicked writer cannot leave one half-written.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
