use crate::{KeyValueStore, StoreResult};

use dash_client::AuthToken;

use std::sync::Arc;

use log::{debug, warn};

/// Storage key of the bearer token
pub const TOKEN_KEY: &str = "userToken";

/// Persists the single bearer credential.
///
/// Reads never fail: a storage error is logged and reported as "no token",
/// which routes the caller back to sign-in.
#[derive(Clone)]
pub struct TokenStore {
    store: Arc<dyn KeyValueStore>,
}

impl TokenStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn get_token(&self) -> Option<AuthToken> {
        match self.store.get(TOKEN_KEY).await {
            Ok(Some(value)) if !value.trim().is_empty() => Some(AuthToken::from_stored(value)),
            Ok(_) => None,
            Err(e) => {
                warn!("Failed to read auth token, treating as signed out: {e}");
                None
            }
        }
    }

    pub async fn set_token(&self, token: &AuthToken) -> StoreResult<()> {
        self.store.set(TOKEN_KEY, token.as_header_value()).await?;
        debug!("Stored auth token {}", token.preview());
        Ok(())
    }

    pub async fn clear_token(&self) -> StoreResult<()> {
        self.store.remove(TOKEN_KEY).await?;
        debug!("Cleared auth token");
        Ok(())
    }

    pub async fn is_authenticated(&self) -> bool {
        self.get_token().await.is_some()
    }
}
