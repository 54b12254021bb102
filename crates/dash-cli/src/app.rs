use crate::{CliError, CliResult, Commands, parse_region};

use dash_client::ApiClient;
use dash_config::Config;
use dash_core::{
    Analytics, CoreError, Credentials, DashboardSnapshot, NewUser, Registration, UserUpdate,
};
use dash_sync::{FileStore, KeyValueStore, LogEventSink, RetryPolicy, SyncEngine};

use std::sync::Arc;

use chrono::Utc;
use log::info;
use serde_json::{Value, json};

/// Validates command input and drives the sync engine.
pub struct App {
    client: Arc<ApiClient>,
    engine: SyncEngine,
}

impl App {
    pub async fn new(base_url: &str, store: Arc<dyn KeyValueStore>, retry: RetryPolicy) -> Self {
        let client = Arc::new(ApiClient::new(base_url));
        let engine =
            SyncEngine::start(client.clone(), store, retry, Arc::new(LogEventSink)).await;
        Self { client, engine }
    }

    /// Engine persisting under the configured storage directory.
    pub async fn from_config(config: &Config) -> CliResult<Self> {
        let store = Arc::new(FileStore::new(config.storage_path()?));
        let retry = RetryPolicy::from(&config.retry);
        Ok(Self::new(&config.api.resolved_base_url(), store, retry).await)
    }

    pub fn engine(&self) -> &SyncEngine {
        &self.engine
    }

    pub async fn execute(&self, command: Commands) -> CliResult<Value> {
        match command {
            Commands::Login { email, password } => self.login(email, password).await,
            Commands::Logout => {
                self.engine.logout().await?;
                Ok(json!({"success": true}))
            }
            Commands::Signup {
                name,
                email,
                password,
            } => self.signup(Registration::new(name, email, password)).await,
            Commands::Health => Ok(json!({"healthy": self.engine.health_check().await})),
            Commands::Refresh => Ok(serde_json::to_value(self.engine.refresh().await?)?),
            Commands::Users { refresh } => Ok(serde_json::to_value(self.snapshot(refresh).await?)?),
            Commands::AddUser {
                name,
                email,
                region,
            } => {
                let new_user = NewUser::new(name, email, parse_region(&region)?);
                new_user.validate()?;
                let created = self.engine.add_user(&new_user).await?;
                Ok(serde_json::to_value(created)?)
            }
            Commands::UpdateUser {
                id,
                name,
                email,
                region,
                active,
            } => {
                let update = UserUpdate {
                    name,
                    email,
                    region: region.as_deref().map(parse_region).transpose()?,
                    is_active: active,
                };
                self.update_user(&id, &update).await
            }
            Commands::DeleteUser { id } => {
                let remaining = self.engine.delete_user(&id).await?;
                Ok(json!({"users": remaining}))
            }
            Commands::Analytics { months, refresh } => {
                let snapshot = self.snapshot(refresh).await?;
                let analytics = Analytics::project_months(&snapshot.users, months, Utc::now());
                Ok(serde_json::to_value(analytics)?)
            }
        }
    }

    async fn login(&self, email: String, password: String) -> CliResult<Value> {
        let credentials = Credentials::new(email, password);
        credentials.validate()?;

        let response = self
            .engine
            .login(&credentials.email, &credentials.password)
            .await?;

        let user = response
            .user
            .map(|u| json!({"id": u.id, "email": u.email}))
            .unwrap_or(Value::Null);
        Ok(json!({"success": true, "user": user}))
    }

    async fn signup(&self, registration: Registration) -> CliResult<Value> {
        registration.validate()?;

        let response = self
            .client
            .signup(
                &registration.name,
                &registration.email,
                &registration.password,
            )
            .await?;

        if !response.success {
            return Err(CliError::signup_rejected(
                response
                    .message
                    .unwrap_or_else(|| "Signup failed".to_string()),
            ));
        }

        info!("Registered {}", registration.email);
        Ok(json!({"success": true, "message": response.message}))
    }

    async fn update_user(&self, id: &str, update: &UserUpdate) -> CliResult<Value> {
        if update.is_empty() {
            return Err(CoreError::invalid_input("Nothing to update").into());
        }

        let current = self.snapshot(false).await?;
        let existing = current
            .find_user(id)
            .ok_or_else(|| CliError::user_not_found(id))?;
        let edited = update.apply(existing)?;

        let users = current
            .users
            .iter()
            .map(|u| if u.id == id { edited.clone() } else { u.clone() })
            .collect();

        let accepted = self.engine.update_users(users).await?;
        Ok(json!({"users": accepted}))
    }

    /// Cached snapshot, fetched first when asked to or when nothing is cached.
    async fn snapshot(&self, refresh: bool) -> CliResult<DashboardSnapshot> {
        match self.engine.snapshot() {
            Some(snapshot) if !refresh => Ok(snapshot),
            _ => Ok(self.engine.refresh().await?),
        }
    }
}
