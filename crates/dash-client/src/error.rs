use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Body text reported when a response cannot be decoded
pub const MALFORMED_RESPONSE: &str = "malformed response";

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    /// The server rejected the credentials or token (401), or no token was available.
    #[error("Authentication failed: {message} {location}")]
    Auth {
        message: String,
        location: ErrorLocation,
    },

    /// Any other non-2xx status, or a 2xx body that could not be understood.
    #[error("Server error ({status}): {body} {location}")]
    Server {
        status: u16,
        body: String,
        location: ErrorLocation,
    },

    /// DNS failure, refused connection, timeout, or a body cut off mid-transfer.
    #[error("Network error: {message} {location}")]
    Network {
        message: String,
        location: ErrorLocation,
        #[source]
        source: Option<reqwest::Error>,
    },
}

impl ClientError {
    #[track_caller]
    pub fn auth<S: Into<String>>(message: S) -> Self {
        ClientError::Auth {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn server<S: Into<String>>(status: u16, body: S) -> Self {
        ClientError::Server {
            status,
            body: body.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn malformed(status: u16) -> Self {
        Self::server(status, MALFORMED_RESPONSE)
    }

    #[track_caller]
    pub fn network<S: Into<String>>(message: S) -> Self {
        ClientError::Network {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
            source: None,
        }
    }

    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Network {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: Some(err),
        }
    }

    /// Only transport failures can succeed on a plain retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth { .. } => Some(401),
            Self::Server { status, .. } => Some(*status),
            Self::Network { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
