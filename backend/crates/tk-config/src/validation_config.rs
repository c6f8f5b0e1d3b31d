use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;
use tk_core::TicketLimits;
use tk_core::validation::ticket_limits::{
    DEFAULT_MAX_CATEGORY_LENGTH, DEFAULT_MAX_DESCRIPTION_LENGTH, DEFAULT_MAX_PRIORITY_LENGTH,
    DEFAULT_MAX_TITLE_LENGTH,
};

// Validation constraints
pub const MIN_FIELD_LENGTH: usize = 1;
pub const MAX_TITLE_LENGTH: usize = 10_000;
pub const MAX_DESCRIPTION_LENGTH: usize = 100_000;
pub const MAX_CATEGORY_LENGTH: usize = 1000;
pub const MAX_PRIORITY_LENGTH: usize = 1000;

/// Maximum lengths for ticket fields, in characters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub max_title_length: usize,
    pub max_description_length: usize,
    pub max_category_length: usize,
    pub max_priority_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
            max_category_length: DEFAULT_MAX_CATEGORY_LENGTH,
            max_priority_length: DEFAULT_MAX_PRIORITY_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::check_range("max_title_length", self.max_title_length, MAX_TITLE_LENGTH)?;
        Self::check_range(
            "max_description_length",
            self.max_description_length,
            MAX_DESCRIPTION_LENGTH,
        )?;
        Self::check_range(
            "max_category_length",
            self.max_category_length,
            MAX_CATEGORY_LENGTH,
        )?;
        Self::check_range(
            "max_priority_length",
            self.max_priority_length,
            MAX_PRIORITY_LENGTH,
        )?;

        Ok(())
    }

    #[track_caller]
    fn check_range(key: &str, value: usize, max: usize) -> ConfigErrorResult<()> {
        if !(MIN_FIELD_LENGTH..=max).contains(&value) {
            return Err(ConfigError::config(format!(
                "validation.{} must be {}-{}, got {}",
                key, MIN_FIELD_LENGTH, max, value
            )));
        }
        Ok(())
    }
}

impl From<&ValidationConfig> for TicketLimits {
    fn from(config: &ValidationConfig) -> Self {
        TicketLimits {
            max_title_length: config.max_title_length,
            max_description_length: config.max_description_length,
            max_category_length: config.max_category_length,
            max_priority_length: config.max_priority_length,
        }
    }
}
