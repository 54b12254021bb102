pub(crate) mod dashboard_payload;
pub(crate) mod login_response;
pub(crate) mod signup_response;
