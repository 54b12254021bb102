//! HTTP client for the user-management API.
//!
//! Every outcome is normalised into [`ClientError`]: `Auth` for 401,
//! `Server` for any other non-2xx or an unreadable body, `Network` when the
//! transport itself failed.

pub(crate) mod auth_token;
pub(crate) mod client;
pub(crate) mod dto;
pub(crate) mod error;


pub use auth_token::AuthToken;
pub use client::ApiClient;
pub use dto::dashboard_payload::{DashboardPayload, ServerAnalytics};
pub use dto::login_response::{LoginResponse, LoginUser};
pub use dto::signup_response::SignupResponse;
pub use error::{ClientError, MALFORMED_RESPONSE, Result as ClientResult};
