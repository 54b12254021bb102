use crate::{ConfigError, DEFAULT_ANDROID_EMULATOR_BASE_URL, DEFAULT_DESKTOP_BASE_URL};

use std::str::FromStr;

use serde::Deserialize;

/// Where the client runs; decides how "localhost" is reached by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    #[default]
    Desktop,
    /// The Android emulator reaches the host loopback through 10.0.2.2
    AndroidEmulator,
}

impl Platform {
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Self::Desktop => DEFAULT_DESKTOP_BASE_URL,
            Self::AndroidEmulator => DEFAULT_ANDROID_EMULATOR_BASE_URL,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::AndroidEmulator => "android-emulator",
        }
    }
}

impl FromStr for Platform {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "desktop" | "ios" => Ok(Self::Desktop),
            "android-emulator" | "android" => Ok(Self::AndroidEmulator),
            other => Err(ConfigError::api(format!("unknown platform '{other}'"))),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
