use crate::{CachedResponse, Result};

use std::time::Duration;

use async_trait::async_trait;

/// Storage for rendered GET responses.
///
/// Entries are keyed by the full request target and expire after the TTL
/// given to [`ResponseCache::put`]. [`ResponseCache::clear`] drops every
/// entry at once; writes to the underlying data call it instead of
/// tracking which keys they touched.
#[async_trait]
pub trait ResponseCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<CachedResponse>>;

    async fn put(&self, key: &str, response: &CachedResponse, ttl: Duration) -> Result<()>;

    async fn clear(&self) -> Result<()>;

    /// Short backend name for logs
    fn backend(&self) -> &'static str;
}
