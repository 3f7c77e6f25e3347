//! Query cache abstraction

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::pool::RedisPoolError;

use super::keys::{Invalidation, QueryKey};

/// Query cache errors
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error(transparent)]
    Redis(#[from] RedisPoolError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for cache operations
pub type CacheResult<T> = Result<T, CacheError>;

/// Storage backend for serialized query results. Entries expire after the
/// backend's TTL even without an explicit invalidation.
#[async_trait]
pub trait QueryCache: Send + Sync {
    /// Get the stored value for a key
    async fn get_raw(&self, key: &str) -> CacheResult<Option<String>>;

    /// Store a value under a key
    async fn set_raw(&self, key: &str, value: String) -> CacheResult<()>;

    /// Remove exact keys
    async fn remove(&self, keys: &[String]) -> CacheResult<()>;

    /// Remove every key starting with `prefix`
    async fn remove_prefix(&self, prefix: &str) -> CacheResult<()>;
}

/// Shared cache handle
pub type SharedQueryCache = Arc<dyn QueryCache>;

/// Typed access on top of any [`QueryCache`]
#[async_trait]
pub trait QueryCacheExt: QueryCache {
    /// Look up a cached query result
    async fn fetch<V>(&self, key: &QueryKey) -> CacheResult<Option<V>>
    where
        V: DeserializeOwned + Send,
    {
        match self.get_raw(&key.key()).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Store a query result
    async fn put<V>(&self, key: &QueryKey, value: &V) -> CacheResult<()>
    where
        V: Serialize + Sync,
    {
        let raw = serde_json::to_string(value)?;
        self.set_raw(&key.key(), raw).await
    }

    /// Drop a single cached query result
    async fn forget(&self, key: &QueryKey) -> CacheResult<()> {
        self.remove(&[key.key()]).await
    }

    /// Drop everything a write made stale
    async fn invalidate(&self, invalidation: &Invalidation) -> CacheResult<()> {
        let keys: Vec<String> = invalidation.stale_keys().iter().map(QueryKey::key).collect();
        self.remove(&keys).await?;
        for prefix in invalidation.stale_prefixes() {
            self.remove_prefix(prefix).await?;
        }
        debug!(?invalidation, keys = keys.len(), "Query cache invalidated");
        Ok(())
    }
}

impl<T: QueryCache + ?Sized> QueryCacheExt for T {}
