mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod platform;
mod retry_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use platform::Platform;
pub use retry_config::RetryConfig;
pub use storage_config::StorageConfig;

const DEFAULT_CONFIG_DIR_NAME: &str = ".dash";
const DEFAULT_DESKTOP_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_ANDROID_EMULATOR_BASE_URL: &str = "http://10.0.2.2:3000";
const DEFAULT_STORAGE_DIR: &str = "cache";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
