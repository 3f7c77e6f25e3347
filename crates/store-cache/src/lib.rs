//! # store-cache
//!
//! Query result cache keyed by query identity, with explicit invalidation
//! after every successful write.
//!
//! ## Features
//!
//! - **Connection Pool**: deadpool-redis pool shared by the cache and readiness probe
//! - **Query Keys**: one [`QueryKey`] per cacheable read, and an
//!   [`Invalidation`] per kind of write naming the keys it makes stale
//! - **Backends**: Redis when configured, an in-process TTL map otherwise
//!
//! ## Example
//!
//! ```ignore
//! use store_cache::{Invalidation, MemoryQueryCache, QueryCacheExt, QueryKey};
//!
//! let cache = MemoryQueryCache::new(Duration::from_secs(60));
//! cache.put(&QueryKey::Categories, &categories).await?;
//! let hit: Option<Vec<String>> = cache.fetch(&QueryKey::Categories).await?;
//!
//! // after a game was created
//! cache.invalidate(&Invalidation::GameChanged(game_id)).await?;
//! ```

pub mod pool;
pub mod query;

// Re-export pool types
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};

// Re-export query cache types
pub use query::{
    CacheError, CacheResult, Invalidation, MemoryQueryCache, QueryCache, QueryCacheExt, QueryKey,
    RedisQueryCache, SharedQueryCache,
};
