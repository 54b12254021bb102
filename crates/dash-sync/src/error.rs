use dash_client::ClientError;

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures of the key-value persistence layer.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid storage key '{key}' {location}")]
    InvalidKey {
        key: String,
        location: ErrorLocation,
    },

    #[error("Storage I/O failed for '{key}' at {path}: {source} {location}")]
    Io {
        key: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to serialize '{key}': {source} {location}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    /// Failure reported by a backend that is not file based.
    #[error("Storage backend failed for '{key}': {message} {location}")]
    Backend {
        key: String,
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn invalid_key(key: &str) -> Self {
        Self::InvalidKey {
            key: key.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(key: &str, path: PathBuf, source: std::io::Error) -> Self {
        Self::Io {
            key: key.to_string(),
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn serialization(key: &str, source: serde_json::Error) -> Self {
        Self::Serialization {
            key: key.to_string(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn backend(key: &str, message: impl Into<String>) -> Self {
        Self::Backend {
            key: key.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors surfaced by [`crate::SyncEngine`] operations.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Refresh kept hitting transport failures until the retry budget ran out.
    #[error("Network connection failed after multiple retries ({attempts} attempts): {source} {location}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },

    #[error("Storage error: {source} {location}")]
    Storage {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("No dashboard data loaded {location}")]
    NoSnapshot { location: ErrorLocation },
}

impl SyncError {
    #[track_caller]
    pub fn retries_exhausted(attempts: u32, source: ClientError) -> Self {
        Self::RetriesExhausted {
            attempts,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn no_snapshot() -> Self {
        Self::NoSnapshot {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_token() -> Self {
        Self::Client(ClientError::auth("No authentication token"))
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Client(e) if e.is_auth())
    }

    /// True for both a single transport failure and an exhausted retry budget.
    pub fn is_network(&self) -> bool {
        match self {
            Self::Client(e) => e.is_retryable(),
            Self::RetriesExhausted { .. } => true,
            _ => false,
        }
    }

    /// Short text suitable for an error banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::Client(ClientError::Auth { message, .. }) => {
                format!("Authentication failed: {message}")
            }
            Self::Client(ClientError::Server { status, body, .. }) => {
                format!("Server error: {status} {body}")
            }
            Self::Client(ClientError::Network { .. }) => {
                "Network connection failed. Please check your internet connection.".to_string()
            }
            Self::RetriesExhausted { .. } => {
                "Network connection failed after multiple retries".to_string()
            }
            Self::Storage { .. } => "Failed to save dashboard data".to_string(),
            Self::NoSnapshot { .. } => "No dashboard data loaded".to_string(),
        }
    }
}

impl From<StoreError> for SyncError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type SyncResult<T> = std::result::Result<T, SyncError>;
