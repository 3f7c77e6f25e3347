//! Redis-backed query cache

use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;

use crate::pool::{RedisPool, RedisPoolError};

use super::store::{CacheResult, QueryCache};

/// SCAN batch size used for prefix removal
const SCAN_COUNT: usize = 100;

/// Query cache stored in Redis under a namespace, with a TTL on every entry
#[derive(Debug, Clone)]
pub struct RedisQueryCache {
    pool: RedisPool,
    namespace: String,
    ttl: Duration,
}

impl RedisQueryCache {
    pub fn new(pool: RedisPool, namespace: impl Into<String>, ttl: Duration) -> Self {
        Self {
            pool,
            namespace: namespace.into(),
            ttl,
        }
    }

    fn namespaced(&self, key: &str) -> String {
        format!("{}:{key}", self.namespace)
    }

    /// SCAN MATCH pattern for every key under `prefix`
    fn prefix_pattern(&self, prefix: &str) -> String {
        let mut pattern = String::new();
        for c in self.namespaced(prefix).chars() {
            if matches!(c, '*' | '?' | '[' | ']' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('*');
        pattern
    }
}

#[async_trait]
impl QueryCache for RedisQueryCache {
    async fn get_raw(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.pool.get().await?;
        let value: Option<String> = conn
            .get(self.namespaced(key))
            .await
            .map_err(RedisPoolError::from)?;
        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: String) -> CacheResult<()> {
        let mut conn = self.pool.get().await?;
        // SETEX rejects a zero TTL
        let ttl = self.ttl.as_secs().max(1);
        conn.set_ex::<_, _, ()>(self.namespaced(key), value, ttl)
            .await
            .map_err(RedisPoolError::from)?;
        Ok(())
    }

    async fn remove(&self, keys: &[String]) -> CacheResult<()> {
        if keys.is_empty() {
            return Ok(());
        }
        let keys: Vec<String> = keys.iter().map(|k| self.namespaced(k)).collect();
        let mut conn = self.pool.get().await?;
        conn.del::<_, ()>(keys)
            .await
            .map_err(RedisPoolError::from)?;
        Ok(())
    }

    async fn remove_prefix(&self, prefix: &str) -> CacheResult<()> {
        let pattern = self.prefix_pattern(prefix);
        let mut conn = self.pool.get().await?;
        let mut cursor: u64 = 0;

        // delete page by page so a large keyspace is never held in memory
        loop {
            let (next, keys): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .arg("COUNT")
                .arg(SCAN_COUNT)
                .query_async(&mut conn)
                .await
                .map_err(RedisPoolError::from)?;

            if !keys.is_empty() {
                conn.del::<_, ()>(keys)
                    .await
                    .map_err(RedisPoolError::from)?;
            }
            if next == 0 {
                return Ok(());
            }
            cursor = next;
        }
    }
}
