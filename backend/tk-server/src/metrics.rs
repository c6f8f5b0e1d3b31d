use crate::error::{Result as ServerErrorResult, ServerError};

use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Counters for cache behaviour and ticket writes
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            prefix: "tk_server",
        }
    }

    pub fn cache_hit(&self) {
        counter!(format!("{}.cache.hits", self.prefix)).increment(1);
    }

    pub fn cache_miss(&self) {
        counter!(format!("{}.cache.misses", self.prefix)).increment(1);
    }

    /// Record a wholesale cache clear after a write
    pub fn cache_invalidated(&self) {
        counter!(format!("{}.cache.invalidations", self.prefix)).increment(1);
    }

    pub fn cache_error(&self, operation: &str) {
        counter!(format!("{}.cache.errors.{}", self.prefix, operation)).increment(1);
    }

    pub fn ticket_created(&self) {
        counter!(format!("{}.tickets.created", self.prefix)).increment(1);
    }

    pub fn ticket_updated(&self) {
        counter!(format!("{}.tickets.updated", self.prefix)).increment(1);
    }

    pub fn ticket_deleted(&self) {
        counter!(format!("{}.tickets.deleted", self.prefix)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the global Prometheus recorder. Call at most once per process.
pub fn install_prometheus() -> ServerErrorResult<PrometheusHandle> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Metrics {
            message: format!("Failed to install Prometheus recorder: {e}"),
        })
}
