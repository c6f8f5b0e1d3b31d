use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CACHE_TTL_SECS, DEFAULT_REDIS_URL, MAX_CACHE_TTL_SECS,
    MIN_CACHE_TTL_SECS,
};

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

/// Where cached responses are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    #[default]
    Memory,
    Redis,
    None,
}

impl CacheBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Redis => "redis",
            Self::None => "none",
        }
    }
}

impl fmt::Display for CacheBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CacheBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "redis" => Ok(Self::Redis),
            "none" | "off" => Ok(Self::None),
            other => Err(ConfigError::cache(format!(
                "cache.backend must be one of memory, redis, none; got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub backend: CacheBackend,
    pub ttl_secs: u64,
    pub redis_url: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackend::default(),
            ttl_secs: DEFAULT_CACHE_TTL_SECS,
            redis_url: String::from(DEFAULT_REDIS_URL),
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.ttl_secs < MIN_CACHE_TTL_SECS || self.ttl_secs > MAX_CACHE_TTL_SECS {
            return Err(ConfigError::cache(format!(
                "cache.ttl_secs must be {}-{}, got {}",
                MIN_CACHE_TTL_SECS, MAX_CACHE_TTL_SECS, self.ttl_secs
            )));
        }

        if self.backend == CacheBackend::Redis
            && !(self.redis_url.starts_with("redis://") || self.redis_url.starts_with("rediss://"))
        {
            return Err(ConfigError::cache(
                "cache.redis_url must start with redis:// or rediss://",
            ));
        }

        Ok(())
    }
}
