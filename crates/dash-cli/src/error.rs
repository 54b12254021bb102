use dash_client::ClientError;
use dash_config::ConfigError;
use dash_core::CoreError;
use dash_sync::SyncError;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] CoreError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error("User not found: {id} {location}")]
    UserNotFound { id: String, location: ErrorLocation },

    #[error("Signup rejected: {message} {location}")]
    SignupRejected {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to serialize output: {source} {location}")]
    Output {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn user_not_found(id: &str) -> Self {
        Self::UserNotFound {
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn signup_rejected<S: Into<String>>(message: S) -> Self {
        Self::SignupRejected {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Text for stderr; sync failures use their banner message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Sync(e) => e.user_message(),
            Self::Validation(CoreError::Validation { message, .. }) => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Output {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CliError>;
