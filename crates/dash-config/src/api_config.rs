use crate::{ConfigError, ConfigErrorResult, Platform};

use serde::Deserialize;

/// Remote user-management API settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub platform: Platform,
    /// Explicit server root (e.g. "https://dash.example.com"); overrides the platform default
    pub base_url: Option<String>,
}

impl ApiConfig {
    /// Server root with any trailing slash removed.
    pub fn resolved_base_url(&self) -> String {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.platform.default_base_url())
            .trim_end_matches('/')
            .to_string()
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self.resolved_base_url();

        if url.is_empty() {
            return Err(ConfigError::api("api.base_url must not be empty"));
        }

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::api(format!(
                "api.base_url must start with http:// or https://, got {url}"
            )));
        }

        Ok(())
    }
}
