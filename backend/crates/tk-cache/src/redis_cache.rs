//! Redis-backed response cache.
//!
//! Entries live under `{prefix}{request key}` as JSON with a Redis TTL.
//! Clearing scans for `{prefix}*` and deletes the matches in batches, so
//! other data in the same Redis database is left alone.

use crate::{CachedResponse, ResponseCache, Result};

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};

pub const DEFAULT_KEY_PREFIX: &str = "tk:response:";

const SCAN_BATCH: usize = 200;

#[derive(Clone)]
pub struct RedisResponseCache {
    conn_manager: ConnectionManager,
    prefix: String,
}

impl RedisResponseCache {
    /// Connect to Redis at `redis_url` using the default key prefix
    pub async fn connect(redis_url: &str) -> Result<Self> {
        Self::connect_with_prefix(redis_url, DEFAULT_KEY_PREFIX).await
    }

    pub async fn connect_with_prefix(redis_url: &str, prefix: &str) -> Result<Self> {
        let client = Client::open(redis_url)?;
        let conn_manager = ConnectionManager::new(client).await?;
        log::info!("Connected response cache to Redis (prefix '{prefix}')");

        Ok(Self {
            conn_manager,
            prefix: prefix.to_string(),
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn entry_key(&self, key: &str) -> String {
        entry_key(&self.prefix, key)
    }
}

pub(crate) fn entry_key(prefix: &str, key: &str) -> String {
    format!("{prefix}{key}")
}

/// SCAN pattern matching every entry under `prefix`, with glob
/// metacharacters in the prefix escaped
pub(crate) fn clear_pattern(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for ch in prefix.chars() {
        if matches!(ch, '*' | '?' | '[' | ']' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('*');
    pattern
}

#[async_trait]
impl ResponseCache for RedisResponseCache {
    async fn get(&self, key: &str) -> Result<Option<CachedResponse>> {
        let mut conn = self.conn_manager.clone();
        let raw: Option<Vec<u8>> = conn.get(self.entry_key(key)).await?;

        match raw {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn put(&self, key: &str, response: &CachedResponse, ttl: Duration) -> Result<()> {
        let ttl_seconds = ttl.as_secs();
        if ttl_seconds == 0 {
            return Ok(());
        }

        let mut conn = self.conn_manager.clone();
        let bytes = serde_json::to_vec(response)?;
        let _: () = conn.set_ex(self.entry_key(key), bytes, ttl_seconds).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let mut conn = self.conn_manager.clone();
        let pattern = clear_pattern(&self.prefix);
        let mut cursor: u64 = 0;
        let mut deleted: usize = 0;

        loop {
            let (next, keys): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .arg("COUNT")
                .arg(SCAN_BATCH)
                .query_async(&mut conn)
                .await?;

            if !keys.is_empty() {
                let removed: usize = conn.del(&keys).await?;
                deleted += removed;
            }

            if next == 0 {
                break;
            }
            cursor = next;
        }

        log::debug!("Cleared {deleted} cached responses from Redis");
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
