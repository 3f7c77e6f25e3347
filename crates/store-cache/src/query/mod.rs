//! Query result cache

mod keys;
mod memory;
mod redis_store;
mod store;

pub use keys::{Invalidation, QueryKey, GAME_LIST_PREFIX};
pub use memory::MemoryQueryCache;
pub use redis_store::RedisQueryCache;
pub use store::{CacheError, CacheResult, QueryCache, QueryCacheExt, SharedQueryCache};
