//! In-process query cache, used when no Redis URL is configured

use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;

use super::store::{CacheResult, QueryCache};

struct Entry {
    value: String,
    expires_at: Instant,
}

/// TTL map keyed by query identity
pub struct MemoryQueryCache {
    entries: DashMap<String, Entry>,
    ttl: Duration,
}

impl MemoryQueryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Number of stored entries, expired ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for MemoryQueryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryQueryCache")
            .field("entries", &self.entries.len())
            .field("ttl", &self.ttl)
            .finish()
    }
}

#[async_trait]
impl QueryCache for MemoryQueryCache {
    async fn get_raw(&self, key: &str) -> CacheResult<Option<String>> {
        let now = Instant::now();
        if let Some(entry) = self.entries.get(key) {
            if entry.expires_at > now {
                return Ok(Some(entry.value.clone()));
            }
        }
        self.entries.remove_if(key, |_, e| e.expires_at <= now);
        Ok(None)
    }

    async fn set_raw(&self, key: &str, value: String) -> CacheResult<()> {
        let now = Instant::now();
        // Listing keys carry free-text search terms, so unread keys must not pile up.
        self.entries.retain(|_, e| e.expires_at > now);
        self.entries.insert(
            key.to_string(),
            Entry {
                value,
                expires_at: now + self.ttl,
            },
        );
        Ok(())
    }

    async fn remove(&self, keys: &[String]) -> CacheResult<()> {
        for key in keys {
            self.entries.remove(key);
        }
        Ok(())
    }

    async fn remove_prefix(&self, prefix: &str) -> CacheResult<()> {
        self.entries.retain(|k, _| !k.starts_with(prefix));
        Ok(())
    }
}
