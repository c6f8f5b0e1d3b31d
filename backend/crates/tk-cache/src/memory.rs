use crate::{CachedResponse, ResponseCache, Result};

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

/// Process-local cache. Expired entries are dropped when read and swept
/// on every write, so the map never outlives its TTL by more than one put.
#[derive(Default)]
pub struct InMemoryResponseCache {
    entries: RwLock<HashMap<String, (Instant, CachedResponse)>>,
}

impl InMemoryResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, expired or not
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl ResponseCache for InMemoryResponseCache {
    async fn get(&self, key: &str) -> Result<Option<CachedResponse>> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                None => return Ok(None),
                Some((expires_at, response)) if Instant::now() < *expires_at => {
                    return Ok(Some(response.clone()));
                }
                Some(_) => {}
            }
        }

        let mut entries = self.entries.write().await;
        if let Some((expires_at, _)) = entries.get(key)
            && Instant::now() >= *expires_at
        {
            entries.remove(key);
        }
        Ok(None)
    }

    async fn put(&self, key: &str, response: &CachedResponse, ttl: Duration) -> Result<()> {
        if ttl.is_zero() {
            return Ok(());
        }
        let now = Instant::now();
        let mut entries = self.entries.write().await;

        let before = entries.len();
        entries.retain(|_, (expires_at, _)| *expires_at > now);
        let swept = before - entries.len();
        if swept > 0 {
            log::debug!("Swept {swept} expired cached responses");
        }

        entries.insert(key.to_string(), (now + ttl, response.clone()));
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let mut entries = self.entries.write().await;
        let dropped = entries.len();
        entries.clear();
        log::debug!("Cleared {dropped} cached responses");
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
