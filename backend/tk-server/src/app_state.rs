use crate::Metrics;
use crate::error::Result as ServerErrorResult;

use std::sync::Arc;
use std::time::Duration;

use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::SqlitePool;
use tk_auth::JwtValidator;
use tk_cache::{InMemoryResponseCache, NoopResponseCache, RedisResponseCache, ResponseCache};
use tk_config::{CacheBackend, CacheConfig};
use tk_core::TicketValidator;

/// Shared, cheaply cloneable state handed to every handler and middleware
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub cache: Arc<dyn ResponseCache>,
    pub cache_ttl: Duration,
    /// `None` when authentication is disabled
    pub jwt_validator: Option<Arc<JwtValidator>>,
    /// Identity used for every request while authentication is disabled
    pub anonymous_user: String,
    pub validator: TicketValidator,
    pub page_size: u64,
    pub metrics: Metrics,
    /// `None` when metrics export is disabled
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    /// Drop every cached response. Called after each successful write.
    ///
    /// A failing cache is logged and otherwise ignored; the write has
    /// already been committed.
    pub async fn invalidate_cache(&self) {
        match self.cache.clear().await {
            Ok(()) => {
                self.metrics.cache_invalidated();
                log::debug!("Response cache cleared ({})", self.cache.backend());
            }
            Err(e) => {
                self.metrics.cache_error("clear");
                log::warn!("Failed to clear response cache: {e}");
            }
        }
    }
}

/// Create the response cache selected by `cache.backend`.
///
/// A Redis backend that cannot be reached fails startup.
pub async fn build_response_cache(
    config: &CacheConfig,
) -> ServerErrorResult<Arc<dyn ResponseCache>> {
    let cache: Arc<dyn ResponseCache> = match config.backend {
        CacheBackend::Memory => Arc::new(InMemoryResponseCache::new()),
        CacheBackend::Redis => Arc::new(RedisResponseCache::connect(&config.redis_url).await?),
        CacheBackend::None => Arc::new(NoopResponseCache),
    };

    log::info!(
        "Response cache: {} (ttl {}s)",
        cache.backend(),
        config.ttl_secs
    );
    Ok(cache)
}
