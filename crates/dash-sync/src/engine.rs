use crate::{
    DashboardApi, EventSink, KeyValueStore, RetryError, RetryPolicy, SnapshotCache, SyncError,
    SyncEvent, SyncResult, SyncState, TokenStore, with_retry,
};

use dash_client::{AuthToken, LoginResponse};
use dash_core::{DashboardSnapshot, NewUser, User, advance_timestamp};

use std::sync::Arc;

use chrono::Utc;
use log::{debug, info};
use tokio::sync::{Mutex, watch};

const REFRESH_OPERATION: &str = "refresh";

/// Owns the client's dashboard snapshot and keeps it in step with the server.
///
/// Snapshot-touching operations (`refresh`, `add_user`, `update_users`,
/// `delete_user`) run one at a time. Every successful one replaces the
/// snapshot and persists it before returning; a persistence failure is
/// reported as an event and does not fail the operation.
///
/// Any `Auth` failure clears the stored token.
pub struct SyncEngine {
    api: Arc<dyn DashboardApi>,
    tokens: TokenStore,
    cache: SnapshotCache,
    retry: RetryPolicy,
    events: Arc<dyn EventSink>,
    operation_lock: Mutex<()>,
    state_tx: watch::Sender<SyncState>,
    snapshot_tx: watch::Sender<Option<DashboardSnapshot>>,
}

impl SyncEngine {
    /// Build the engine and load whatever snapshot the store already holds.
    ///
    /// A cached snapshot puts the engine straight into `Ready`; otherwise it
    /// starts `Idle` with no snapshot.
    pub async fn start(
        api: Arc<dyn DashboardApi>,
        store: Arc<dyn KeyValueStore>,
        retry: RetryPolicy,
        events: Arc<dyn EventSink>,
    ) -> Self {
        let cache = SnapshotCache::new(store.clone(), events.clone());
        let cached = cache.load().await;

        let initial_state = match &cached {
            Some(snapshot) => SyncState::Ready(snapshot.clone()),
            None => SyncState::Idle,
        };
        let (state_tx, _) = watch::channel(initial_state);
        let (snapshot_tx, _) = watch::channel(cached);

        Self {
            api,
            tokens: TokenStore::new(store),
            cache,
            retry,
            events,
            operation_lock: Mutex::new(()),
            state_tx,
            snapshot_tx,
        }
    }

    pub fn state(&self) -> SyncState {
        self.state_tx.borrow().clone()
    }

    pub fn snapshot(&self) -> Option<DashboardSnapshot> {
        self.snapshot_tx.borrow().clone()
    }

    /// Receiver notified on every state transition.
    pub fn subscribe(&self) -> watch::Receiver<SyncState> {
        self.state_tx.subscribe()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.tokens.is_authenticated().await
    }

    pub async fn health_check(&self) -> bool {
        self.api.health_check().await
    }

    /// Sign in and store the returned token.
    pub async fn login(&self, email: &str, password: &str) -> SyncResult<LoginResponse> {
        let response = self.api.login(email, password).await?;
        self.tokens.set_token(&response.token).await?;
        info!("Signed in as {email}");
        Ok(response)
    }

    pub async fn logout(&self) -> SyncResult<()> {
        self.tokens.clear_token().await?;
        self.events.emit(SyncEvent::TokenCleared { reason: "logout" });
        Ok(())
    }

    /// Fetch the full user list, retrying transport failures.
    ///
    /// `last_updated` is the server's timestamp, bumped if needed so it stays
    /// strictly after the previous snapshot's.
    pub async fn refresh(&self) -> SyncResult<DashboardSnapshot> {
        let _guard = self.operation_lock.lock().await;
        self.set_state(SyncState::Loading);

        match self.fetch_with_retry().await {
            Ok(fresh) => {
                let previous = self.snapshot().map(|s| s.last_updated);
                let snapshot = DashboardSnapshot {
                    last_updated: advance_timestamp(previous, fresh.last_updated),
                    users: fresh.users,
                };
                self.commit(snapshot.clone()).await;
                Ok(snapshot)
            }
            Err(e) => Err(self.fail(e).await),
        }
    }

    /// Create a user on the server and append the server's record.
    pub async fn add_user(&self, new_user: &NewUser) -> SyncResult<User> {
        let _guard = self.operation_lock.lock().await;
        self.set_state(SyncState::Loading);

        let created = match self.create_remote(new_user).await {
            Ok(user) => user,
            Err(e) => return Err(self.fail(e).await),
        };

        let now = Utc::now();
        let snapshot = match self.snapshot() {
            Some(current) => current.with_appended(created.clone(), now),
            None => DashboardSnapshot::new(vec![created.clone()], now),
        };
        self.commit(snapshot).await;
        Ok(created)
    }

    /// Send the whole membership list; the snapshot becomes what the server accepted.
    pub async fn update_users(&self, users: Vec<User>) -> SyncResult<Vec<User>> {
        let _guard = self.operation_lock.lock().await;
        self.set_state(SyncState::Loading);
        self.replace_membership(users).await
    }

    /// Remove one user by sending the current list without it.
    ///
    /// The list is computed under the operation lock so it always reflects
    /// the latest snapshot.
    pub async fn delete_user(&self, id: &str) -> SyncResult<Vec<User>> {
        let _guard = self.operation_lock.lock().await;

        let Some(current) = self.snapshot() else {
            return Err(self.fail(SyncError::no_snapshot()).await);
        };

        self.set_state(SyncState::Loading);
        debug!("Deleting user {id}");
        self.replace_membership(current.users_without(id)).await
    }

    async fn replace_membership(&self, users: Vec<User>) -> SyncResult<Vec<User>> {
        let accepted = match self.update_remote(&users).await {
            Ok(accepted) => accepted,
            Err(e) => return Err(self.fail(e).await),
        };

        let now = Utc::now();
        let snapshot = match self.snapshot() {
            Some(current) => current.with_users(accepted.clone(), now),
            None => DashboardSnapshot::new(accepted.clone(), now),
        };
        self.commit(snapshot).await;
        Ok(accepted)
    }

    async fn require_token(&self) -> SyncResult<AuthToken> {
        self.tokens
            .get_token()
            .await
            .ok_or_else(SyncError::missing_token)
    }

    async fn fetch_with_retry(&self) -> SyncResult<DashboardSnapshot> {
        let token = self.require_token().await?;
        let token = &token;
        let api = self.api.as_ref();

        with_retry(&self.retry, REFRESH_OPERATION, self.events.as_ref(), move || {
            api.fetch_users(token)
        })
        .await
        .map_err(|e| match e {
            RetryError::Exhausted { attempts, last } => SyncError::retries_exhausted(attempts, last),
            RetryError::Failed { error, .. } => SyncError::from(error),
        })
    }

    async fn create_remote(&self, new_user: &NewUser) -> SyncResult<User> {
        let token = self.require_token().await?;
        Ok(self.api.create_user(&token, new_user).await?)
    }

    async fn update_remote(&self, users: &[User]) -> SyncResult<Vec<User>> {
        let token = self.require_token().await?;
        Ok(self.api.update_users(&token, users).await?)
    }

    /// Publish and persist a new snapshot, ending in `Ready`.
    async fn commit(&self, snapshot: DashboardSnapshot) {
        match self.cache.save(&snapshot).await {
            Ok(()) => self.events.emit(SyncEvent::SnapshotPersisted {
                users: snapshot.users.len(),
            }),
            Err(e) => self.events.emit(SyncEvent::PersistFailed {
                error: e.to_string(),
            }),
        }

        self.snapshot_tx.send_replace(Some(snapshot.clone()));
        self.set_state(SyncState::Ready(snapshot));
    }

    /// Record a failed operation, keeping the last good snapshot visible.
    async fn fail(&self, error: SyncError) -> SyncError {
        if error.is_auth() {
            self.evict_token().await;
        }

        self.set_state(SyncState::Error {
            message: error.user_message(),
            last_known: self.snapshot(),
        });
        error
    }

    async fn evict_token(&self) {
        match self.tokens.clear_token().await {
            Ok(()) => self.events.emit(SyncEvent::TokenCleared {
                reason: "authentication rejected",
            }),
            Err(e) => self.events.emit(SyncEvent::TokenClearFailed {
                error: e.to_string(),
            }),
        }
    }

    fn set_state(&self, next: SyncState) {
        let to = next.kind();
        let previous = self.state_tx.send_replace(next);
        self.events.emit(SyncEvent::StateChanged {
            from: previous.kind(),
            to,
        });
    }
}
