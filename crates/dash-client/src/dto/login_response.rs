use crate::AuthToken;

use serde::Deserialize;

/// Identity echoed back by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginUser {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct LoginResponse {
    /// Already carries the `Bearer ` prefix
    pub token: AuthToken,
    pub user: Option<LoginUser>,
}

#[derive(Deserialize)]
pub(crate) struct LoginBody {
    pub token: String,
    #[serde(default)]
    pub user: Option<LoginUser>,
}
