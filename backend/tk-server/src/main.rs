use tk_server::app_state::build_response_cache;
use tk_server::{AppState, Metrics, build_router, logger, metrics};

use tk_auth::JwtValidator;
use tk_config::Config;
use tk_core::{TicketLimits, TicketValidator};

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = match config.logging.file {
        Some(ref filename) => {
            let log_dir = config.log_dir()?;
            std::fs::create_dir_all(&log_dir)?;
            Some(log_dir.join(filename))
        }
        None => None,
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting tk-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Database
    let database_path = config.database_path()?;
    let pool = tk_db::create_pool(&database_path, config.database.max_connections).await?;
    tk_db::run_migrations(&pool).await?;

    let cache = build_response_cache(&config.cache).await?;

    let jwt_validator = if config.auth.enabled {
        // validate() guarantees a secret when auth is enabled
        let secret = config.auth.jwt_secret.as_deref().unwrap_or_default();
        info!("JWT: HS256 authentication enabled");
        Some(Arc::new(JwtValidator::with_hs256(secret.as_bytes())))
    } else {
        warn!(
            "Authentication DISABLED - every request runs as '{}'",
            config.auth.anonymous_user
        );
        None
    };

    let prometheus = if config.metrics.enabled {
        Some(metrics::install_prometheus()?)
    } else {
        None
    };

    let app_state = AppState {
        pool,
        cache,
        cache_ttl: config.cache.ttl(),
        jwt_validator,
        anonymous_user: config.auth.anonymous_user.clone(),
        validator: TicketValidator::new(TicketLimits::from(&config.validation)),
        page_size: config.pagination.page_size,
        metrics: Metrics::new(),
        prometheus,
    };

    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Actual address matters when port is 0 / auto-assigned
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
