mod auth_config;
mod cache_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod metrics_config;
mod pagination_config;
mod server_config;
mod validation_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use cache_config::{CacheBackend, CacheConfig};
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use metrics_config::MetricsConfig;
pub use pagination_config::PaginationConfig;
pub use server_config::ServerConfig;
pub use validation_config::ValidationConfig;

pub const CONFIG_DIR_ENV: &str = "TK_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR: &str = ".tk";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "tickets.db";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const MIN_DB_MAX_CONNECTIONS: u32 = 1;
const MAX_DB_MAX_CONNECTIONS: u32 = 100;

const DEFAULT_AUTH_ENABLED: bool = true;
const DEFAULT_ANONYMOUS_USER: &str = "anonymous";
const MIN_JWT_SECRET_LENGTH: usize = 32;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_CACHE_TTL_SECS: u64 = 60;
const MIN_CACHE_TTL_SECS: u64 = 1;
const MAX_CACHE_TTL_SECS: u64 = 86_400;
const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";

const DEFAULT_PAGE_SIZE: u64 = 2;
const MIN_PAGE_SIZE: u64 = 1;
const MAX_PAGE_SIZE: u64 = 1000;

const DEFAULT_METRICS_ENABLED: bool = true;
