use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

// Retry constraints
pub const MAX_MAX_RETRIES: u32 = 10;
pub const DEFAULT_MAX_RETRIES: u32 = 3;

pub const MAX_DELAY_MS: u64 = 60_000;
pub const DEFAULT_DELAY_MS: u64 = 1_000;

/// Retry policy for refreshing the dashboard over a flaky network.
///
/// Only transport failures are retried. The delay is fixed between attempts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Retries after the initial attempt
    pub max_retries: u32,
    /// Pause between attempts in milliseconds
    pub delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

impl RetryConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_retries > MAX_MAX_RETRIES {
            return Err(ConfigError::retry(format!(
                "retry.max_retries must be 0-{}, got {}",
                MAX_MAX_RETRIES, self.max_retries
            )));
        }

        if self.delay_ms > MAX_DELAY_MS {
            return Err(ConfigError::retry(format!(
                "retry.delay_ms must be 0-{}, got {}",
                MAX_DELAY_MS, self.delay_ms
            )));
        }

        Ok(())
    }
}
