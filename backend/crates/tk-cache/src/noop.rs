use crate::{CachedResponse, ResponseCache, Result};

use std::time::Duration;

use async_trait::async_trait;

/// Cache that stores nothing; every lookup is a miss.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopResponseCache;

#[async_trait]
impl ResponseCache for NoopResponseCache {
    async fn get(&self, _key: &str) -> Result<Option<CachedResponse>> {
        Ok(None)
    }

    async fn put(&self, _key: &str, _response: &CachedResponse, _ttl: Duration) -> Result<()> {
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "none"
    }
}
