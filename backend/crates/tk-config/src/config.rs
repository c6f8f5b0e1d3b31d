use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, CacheBackend, CacheConfig, ConfigError,
    ConfigErrorResult, DEFAULT_CONFIG_DIR, DatabaseConfig, LoggingConfig, MetricsConfig,
    PaginationConfig, ServerConfig, ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub cache: CacheConfig,
    pub pagination: PaginationConfig,
    pub validation: ValidationConfig,
    pub metrics: MetricsConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. TK_CONFIG_DIR env var, else ./.tk/
    /// 2. Create the config directory if missing
    /// 3. Parse config.toml if present, else defaults
    /// 4. Apply TK_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Config directory.
    /// Priority: TK_CONFIG_DIR env var > ./.tk/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all sections. Call once after load().
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.cache.validate()?;
        self.pagination.validate()?;
        self.validation.validate()?;

        Ok(())
    }

    /// Absolute path to the database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Directory log files are written to, under the config directory.
    pub fn log_dir(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.logging.dir))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}", self.bind_addr());
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  auth: {}",
            if self.auth.enabled {
                "enabled (HS256)"
            } else {
                "disabled"
            }
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );

        match self.cache.backend {
            CacheBackend::Redis => info!(
                "  cache: redis, ttl={}s ({})",
                self.cache.ttl_secs,
                redact_url(&self.cache.redis_url)
            ),
            backend => info!("  cache: {}, ttl={}s", backend, self.cache.ttl_secs),
        }

        info!("  pagination: page_size={}", self.pagination.page_size);
        info!(
            "  validation: title={}, desc={}, category={}, priority={}",
            self.validation.max_title_length,
            self.validation.max_description_length,
            self.validation.max_category_length,
            self.validation.max_priority_length
        );
        info!(
            "  metrics: {}",
            if self.metrics.enabled {
                "enabled"
            } else {
                "disabled"
            }
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("TK_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("TK_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("TK_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "TK_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_bool("TK_AUTH_ENABLED", &mut self.auth.enabled);
        Self::apply_env_option_string("TK_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_string("TK_AUTH_ANONYMOUS_USER", &mut self.auth.anonymous_user);

        // Logging
        Self::apply_env_parse("TK_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("TK_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("TK_LOG_FILE", &mut self.logging.file);

        // Cache
        Self::apply_env_parse("TK_CACHE_BACKEND", &mut self.cache.backend);
        Self::apply_env_parse("TK_CACHE_TTL_SECS", &mut self.cache.ttl_secs);
        Self::apply_env_string("TK_CACHE_REDIS_URL", &mut self.cache.redis_url);

        // Pagination
        Self::apply_env_parse("TK_PAGINATION_PAGE_SIZE", &mut self.pagination.page_size);

        // Validation
        Self::apply_env_parse(
            "TK_VALIDATION_MAX_TITLE_LENGTH",
            &mut self.validation.max_title_length,
        );
        Self::apply_env_parse(
            "TK_VALIDATION_MAX_DESCRIPTION_LENGTH",
            &mut self.validation.max_description_length,
        );
        Self::apply_env_parse(
            "TK_VALIDATION_MAX_CATEGORY_LENGTH",
            &mut self.validation.max_category_length,
        );
        Self::apply_env_parse(
            "TK_VALIDATION_MAX_PRIORITY_LENGTH",
            &mut self.validation.max_priority_length,
        );

        // Metrics
        Self::apply_env_bool("TK_METRICS_ENABLED", &mut self.metrics.enabled);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values.
    /// Unparseable values are ignored with a warning.
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name) {
            match val.parse() {
                Ok(parsed) => *target = parsed,
                Err(_) => warn!("Ignoring {var_name}={val:?}: not a valid value"),
            }
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}

/// Drop any `user:password@` part of a URL before logging it
pub(crate) fn redact_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://***@{}", &url[..scheme_end], &url[at + 1..])
        }
        _ => url.to_string(),
    }
}
