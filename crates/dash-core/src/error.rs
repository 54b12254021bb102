use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// Required input missing or malformed; raised before any network call.
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid region code: {value} {location}")]
    InvalidRegion {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error for a specific field
    #[track_caller]
    pub fn validation<S: Into<String>>(field: &str, message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a validation error not tied to a single field
    #[track_caller]
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            Self::InvalidRegion { .. } => Some("region"),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
