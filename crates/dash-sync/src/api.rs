use dash_client::{ApiClient, AuthToken, ClientResult, LoginResponse};
use dash_core::{DashboardSnapshot, NewUser, User};

use async_trait::async_trait;

/// The remote operations the engine depends on.
///
/// [`ApiClient`] is the production implementation; tests script their own.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn health_check(&self) -> bool;

    async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse>;

    async fn fetch_users(&self, token: &AuthToken) -> ClientResult<DashboardSnapshot>;

    async fn create_user(&self, token: &AuthToken, user: &NewUser) -> ClientResult<User>;

    /// Replace the full membership list; returns the server's accepted list.
    async fn update_users(&self, token: &AuthToken, users: &[User]) -> ClientResult<Vec<User>>;
}

#[async_trait]
impl DashboardApi for ApiClient {
    async fn health_check(&self) -> bool {
        ApiClient::health_check(self).await
    }

    async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        ApiClient::login(self, email, password).await
    }

    async fn fetch_users(&self, token: &AuthToken) -> ClientResult<DashboardSnapshot> {
        ApiClient::fetch_users(self, token).await
    }

    async fn create_user(&self, token: &AuthToken, user: &NewUser) -> ClientResult<User> {
        ApiClient::create_user(self, token, user).await
    }

    async fn update_users(&self, token: &AuthToken, users: &[User]) -> ClientResult<Vec<User>> {
        ApiClient::update_users(self, token, users).await
    }
}
