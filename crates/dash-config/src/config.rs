use crate::{
    ApiConfig, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR_NAME, LoggingConfig,
    RetryConfig, StorageConfig,
};

use std::path::PathBuf;
use std::str::FromStr;

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub retry: RetryConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for DASH_CONFIG_DIR env var, else use ./.dash/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply DASH_* environment variable overrides
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

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: DASH_CONFIG_DIR env var > ./.dash/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("DASH_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.retry.validate()?;
        self.storage.validate()?;

        Ok(())
    }

    /// Absolute path of the persistence directory.
    pub fn storage_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.storage.dir))
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (platform: {})",
            self.api.resolved_base_url(),
            self.api.platform
        );
        info!(
            "  retry: max_retries={}, delay={}ms",
            self.retry.max_retries, self.retry.delay_ms
        );
        info!("  storage: {}", self.storage.dir);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_parse("DASH_API_PLATFORM", &mut self.api.platform);
        Self::apply_env_option_string("DASH_API_BASE_URL", &mut self.api.base_url);

        // Retry
        Self::apply_env_parse("DASH_RETRY_MAX_RETRIES", &mut self.retry.max_retries);
        Self::apply_env_parse("DASH_RETRY_DELAY_MS", &mut self.retry.delay_ms);

        // Storage
        Self::apply_env_string("DASH_STORAGE_DIR", &mut self.storage.dir);

        // Logging
        Self::apply_env_parse("DASH_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("DASH_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("DASH_LOG_FILE", &mut self.logging.file);
    }

    fn apply_env_string(key: &str, target: &mut String) {
        if let Ok(val) = std::env::var(key) {
            *target = val;
        }
    }

    fn apply_env_option_string(key: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(key) {
            *target = if val.is_empty() { None } else { Some(val) };
        }
    }

    fn apply_env_parse<T: FromStr>(key: &str, target: &mut T) {
        if let Ok(val) = std::env::var(key) {
            match val.parse() {
                Ok(parsed) => *target = parsed,
                Err(_) => warn!("Ignoring {key}: cannot parse '{val}'"),
            }
        }
    }

    fn apply_env_bool(key: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(key) {
            match val.to_lowercase().as_str() {
                "true" | "1" | "yes" => *target = true,
                "false" | "0" | "no" => *target = false,
                _ => warn!("Ignoring {key}: expected a boolean, got '{val}'"),
            }
        }
    }
}
