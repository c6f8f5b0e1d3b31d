use thiserror::Error;

/// Startup failures surfaced from `main`
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] tk_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] tk_db::DbError),

    #[error("Cache error: {0}")]
    Cache(#[from] tk_cache::CacheError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Metrics error: {message}")]
    Metrics { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
