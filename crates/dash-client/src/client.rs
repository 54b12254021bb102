use crate::dto::dashboard_payload::DashboardData;
use crate::dto::login_response::LoginBody;
use crate::{
    AuthToken, ClientError, ClientResult, DashboardPayload, LoginResponse, SignupResponse,
};

use dash_core::{DashboardSnapshot, NewUser, User};

use log::{debug, info, warn};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

const DEFAULT_AUTH_MESSAGE: &str = "Authentication failed";

/// HTTP client for the admin dashboard REST API
pub struct ApiClient {
    pub base_url: String,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server root (e.g., "http://localhost:3000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, &url)
            .header(ACCEPT, "application/json")
    }

    /// The stored token is forwarded verbatim as the header value.
    fn authorized(&self, method: Method, path: &str, token: &AuthToken) -> reqwest::RequestBuilder {
        self.request(method, path)
            .header(AUTHORIZATION, token.as_header_value())
    }

    /// Send the request and read the whole body. Only transport failures error here.
    async fn send(&self, req: reqwest::RequestBuilder) -> ClientResult<(StatusCode, String)> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;
        Ok((status, text))
    }

    /// Execute request and classify the outcome
    async fn execute(&self, req: reqwest::RequestBuilder) -> ClientResult<Value> {
        let (status, text) = self.send(req).await?;
        classify(status, &text)
    }

    // =========================================================================
    // Unauthenticated Operations
    // =========================================================================

    /// Best-effort reachability probe. Never fails; any problem yields `false`.
    pub async fn health_check(&self) -> bool {
        let req = self.request(Method::GET, "/api/health");
        match self.execute(req).await {
            Ok(_) => true,
            Err(e) => {
                warn!("Health check failed: {e}");
                false
            }
        }
    }

    /// Exchange credentials for a bearer token. No retry.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        debug!("Login attempt for {email}");
        let req = self
            .request(Method::POST, "/api/login")
            .json(&LoginRequest { email, password });
        let (status, text) = self.send(req).await?;
        let body = classify(status, &text)?;
        let login: LoginBody = decode(status, body)?;

        if login.token.trim().is_empty() {
            return Err(ClientError::malformed(status.as_u16()));
        }

        let token = AuthToken::from_raw(&login.token);
        info!("Login succeeded for {email}");

        Ok(LoginResponse {
            token,
            user: login.user,
        })
    }

    /// Register an account.
    ///
    /// A readable `{success, message}` body is returned even on a non-2xx
    /// status so the caller can show the server's message.
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> ClientResult<SignupResponse> {
        #[derive(Serialize)]
        struct SignupRequest<'a> {
            name: &'a str,
            email: &'a str,
            password: &'a str,
        }

        let req = self
            .request(Method::POST, "/api/signup")
            .json(&SignupRequest {
                name,
                email,
                password,
            });
        let (status, text) = self.send(req).await?;

        match serde_json::from_str::<SignupResponse>(&text) {
            Ok(response) => Ok(response),
            Err(_) => {
                classify(status, &text)?;
                Err(ClientError::malformed(status.as_u16()))
            }
        }
    }

    // =========================================================================
    // Authenticated Operations
    // =========================================================================

    /// Fetch the full dashboard, including the server's own aggregates.
    pub async fn fetch_dashboard(&self, token: &AuthToken) -> ClientResult<DashboardPayload> {
        let req = self.authorized(Method::GET, "/api/dashboard", token);
        let (status, text) = self.send(req).await?;
        let mut body = classify(status, &text)?;
        let data: DashboardData = decode(status, body["data"].take())?;

        debug!("Fetched {} users", data.snapshot.users.len());
        Ok(data.into())
    }

    /// Fetch the current user list as a fresh snapshot.
    pub async fn fetch_users(&self, token: &AuthToken) -> ClientResult<DashboardSnapshot> {
        self.fetch_dashboard(token)
            .await
            .map(|payload| payload.snapshot)
    }

    /// Create a user. The returned record, not the input, is ground truth.
    pub async fn create_user(&self, token: &AuthToken, user: &NewUser) -> ClientResult<User> {
        let req = self.authorized(Method::POST, "/api/users", token).json(user);
        let (status, text) = self.send(req).await?;
        let mut body = classify(status, &text)?;
        let created: User = decode(status, body["user"].take())?;

        if !created.has_id() {
            warn!("Server created a user without an id");
            return Err(ClientError::malformed(status.as_u16()));
        }

        Ok(created)
    }

    /// Replace the membership list. The server answers with the full resulting list.
    pub async fn update_users(&self, token: &AuthToken, users: &[User]) -> ClientResult<Vec<User>> {
        #[derive(Serialize)]
        struct UpdateRequest<'a> {
            users: &'a [User],
        }

        let req = self
            .authorized(Method::PUT, "/api/users", token)
            .json(&UpdateRequest { users });
        let (status, text) = self.send(req).await?;
        let mut body = classify(status, &text)?;

        decode(status, body["users"].take())
    }
}

/// Map status and body text onto the error taxonomy.
#[track_caller]
pub(crate) fn classify(status: StatusCode, text: &str) -> ClientResult<Value> {
    let parsed = serde_json::from_str::<Value>(text).ok();

    if status == StatusCode::UNAUTHORIZED {
        let message = parsed
            .as_ref()
            .and_then(server_message)
            .unwrap_or_else(|| DEFAULT_AUTH_MESSAGE.to_string());
        return Err(ClientError::auth(message));
    }

    if !status.is_success() {
        return Err(ClientError::server(status.as_u16(), text));
    }

    let Some(body) = parsed else {
        return Err(ClientError::malformed(status.as_u16()));
    };

    if body.get("success").and_then(Value::as_bool) != Some(true) {
        let message = server_message(&body).unwrap_or_else(|| text.to_string());
        return Err(ClientError::server(status.as_u16(), message));
    }

    Ok(body)
}

fn server_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .map(String::from)
}

#[track_caller]
fn decode<T: DeserializeOwned>(status: StatusCode, value: Value) -> ClientResult<T> {
    serde_json::from_value(value).map_err(|e| {
        warn!("Failed to decode response body: {e}");
        ClientError::malformed(status.as_u16())
    })
}
