use crate::tests::{EnvGuard, setup_config_dir, write_config};
use crate::{CacheBackend, Config};

use googletest::assert_that;
use googletest::prelude::{anything, eq, ok};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let (_temp, _dir, _auth) = setup_config_dir();
    let _enabled = EnvGuard::remove("TK_AUTH_ENABLED");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
    assert_that!(config.server.host.as_str(), eq("127.0.0.1"));
    assert_that!(config.database.path.as_str(), eq("tickets.db"));
    assert_that!(config.auth.enabled, eq(true));
    assert_that!(config.auth.anonymous_user.as_str(), eq("anonymous"));
    assert_that!(config.cache.backend, eq(CacheBackend::Memory));
    assert_that!(config.cache.ttl_secs, eq(60));
    assert_that!(config.pagination.page_size, eq(2));
    assert_that!(config.validation.max_description_length, eq(100));
    assert_that!(config.metrics.enabled, eq(true));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_is_created() {
    // Given
    let (temp, _dir, _auth) = setup_config_dir();
    let nested = temp.path().join("nested").join(".tk");
    let _nested = EnvGuard::set("TK_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_auth_disabled_and_defaults_when_load_and_validate_then_ok() {
    // Given
    let (_temp, _dir, _auth) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _dir, _auth) = setup_config_dir();
    write_config(
        &temp,
        r#"
            [server]
            port = 9000

            [cache]
            backend = "none"
            ttl_secs = 120

            [pagination]
            page_size = 25

            [logging]
            level = "debug"
            colored = false
        "#,
    );

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9000));
    assert_that!(config.cache.backend, eq(CacheBackend::None));
    assert_that!(config.cache.ttl_secs, eq(120));
    assert_that!(config.pagination.page_size, eq(25));
    assert_that!(*config.logging.level, eq(LevelFilter::Debug));
    assert_that!(config.logging.colored, eq(false));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _dir, _auth) = setup_config_dir();
    write_config(&temp, "[server]\nport = 9000");
    let _port = EnvGuard::set("TK_SERVER_PORT", "8888");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(8888));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let (_temp, _dir, _auth) = setup_config_dir();
    let _host = EnvGuard::set("TK_SERVER_HOST", "0.0.0.0");
    let _backend = EnvGuard::set("TK_CACHE_BACKEND", "redis");
    let _url = EnvGuard::set("TK_CACHE_REDIS_URL", "redis://cache:6379/2");
    let _page = EnvGuard::set("TK_PAGINATION_PAGE_SIZE", "10");
    let _desc = EnvGuard::set("TK_VALIDATION_MAX_DESCRIPTION_LENGTH", "500");
    let _colored = EnvGuard::set("TK_LOG_COLORED", "0");
    let _metrics = EnvGuard::set("TK_METRICS_ENABLED", "false");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.host.as_str(), eq("0.0.0.0"));
    assert_that!(config.cache.backend, eq(CacheBackend::Redis));
    assert_that!(config.cache.redis_url.as_str(), eq("redis://cache:6379/2"));
    assert_that!(config.pagination.page_size, eq(10));
    assert_that!(config.validation.max_description_length, eq(500));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.metrics.enabled, eq(false));
}

#[test]
#[serial]
fn given_unparseable_env_value_when_load_then_keeps_previous_value() {
    // Given
    let (_temp, _dir, _auth) = setup_config_dir();
    let _port = EnvGuard::set("TK_SERVER_PORT", "not-a-port");
    let _backend = EnvGuard::set("TK_CACHE_BACKEND", "memcached");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
    assert_that!(config.cache.backend, eq(CacheBackend::Memory));
}

#[test]
#[serial]
fn given_config_when_database_path_then_joined_to_config_dir() {
    // Given
    let (temp, _dir, _auth) = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.database_path().unwrap(), temp.path().join("tickets.db"));
    assert_eq!(config.log_dir().unwrap(), temp.path().join("log"));
    assert_eq!(config.bind_addr(), "127.0.0.1:8000");
}

#[test]
fn given_validation_config_when_converted_then_limits_match() {
    let config = Config::default();

    let limits = tk_core::TicketLimits::from(&config.validation);

    assert_eq!(limits, tk_core::TicketLimits::default());
}
