use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ANONYMOUS_USER, DEFAULT_AUTH_ENABLED,
    MIN_JWT_SECRET_LENGTH,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub enabled: bool,
    /// HS256 signing secret; required when auth is enabled
    pub jwt_secret: Option<String>,
    /// Identity assumed for every request while auth is disabled
    pub anonymous_user: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AUTH_ENABLED,
            jwt_secret: None,
            anonymous_user: String::from(DEFAULT_ANONYMOUS_USER),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.enabled {
            if self.anonymous_user.trim().is_empty() {
                return Err(ConfigError::auth(
                    "auth.anonymous_user cannot be empty when auth is disabled",
                ));
            }
            return Ok(());
        }

        match &self.jwt_secret {
            None => Err(ConfigError::auth(
                "auth.enabled is true but auth.jwt_secret is not set",
            )),
            Some(secret) if secret.len() < MIN_JWT_SECRET_LENGTH => Err(ConfigError::auth(
                format!(
                    "auth.jwt_secret must be at least {} characters",
                    MIN_JWT_SECRET_LENGTH
                ),
            )),
            Some(_) => Ok(()),
        }
    }
}
