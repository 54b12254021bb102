
use crate::{
    DashboardApi, KeyValueStore, MemoryStore, RecordingSink, RetryPolicy, StoreError,
    StoreResult, SyncEngine, TOKEN_KEY,
};

use dash_client::{AuthToken, ClientError, ClientResult, LoginResponse};
use dash_core::{DashboardSnapshot, NewUser, Region, User};

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

pub(crate) const TEST_TOKEN: &str = "Bearer test-token";

pub(crate) fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

pub(crate) fn user(id: &str) -> User {
    User {
        id: id.to_string(),
        name: format!("User {id}"),
        email: format!("user{id}@example.com"),
        region: Region::Europe,
        is_active: true,
        created_at: at(2024, 1, 1),
    }
}

pub(crate) fn snapshot(ids: &[&str], last_updated: DateTime<Utc>) -> DashboardSnapshot {
    DashboardSnapshot::new(ids.iter().map(|id| user(id)).collect(), last_updated)
}

pub(crate) fn one_second_retries() -> RetryPolicy {
    RetryPolicy {
        max_retries: 3,
        delay: Duration::from_secs(1),
    }
}

/// Fake API answering from per-operation queues.
///
/// An empty fetch or create queue answers with a network failure; an empty
/// update queue echoes the submitted list back. Every remote call yields
/// once while counted as in flight, so overlapping callers are observable.
#[derive(Default)]
pub(crate) struct ScriptedApi {
    pub fetch_results: Mutex<VecDeque<ClientResult<DashboardSnapshot>>>,
    pub create_results: Mutex<VecDeque<ClientResult<User>>>,
    pub update_results: Mutex<VecDeque<ClientResult<Vec<User>>>>,
    pub login_results: Mutex<VecDeque<ClientResult<LoginResponse>>>,
    pub fetch_calls: AtomicU32,
    pub create_calls: AtomicU32,
    pub update_payloads: Mutex<Vec<Vec<User>>>,
    pub tokens_seen: Mutex<Vec<String>>,
    pub healthy: AtomicBool,
    pub in_flight: AtomicU32,
    pub max_in_flight: AtomicU32,
}

impl ScriptedApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_fetch(&self, result: ClientResult<DashboardSnapshot>) {
        self.fetch_results.lock().unwrap().push_back(result);
    }

    pub fn push_create(&self, result: ClientResult<User>) {
        self.create_results.lock().unwrap().push_back(result);
    }

    pub fn push_update(&self, result: ClientResult<Vec<User>>) {
        self.update_results.lock().unwrap().push_back(result);
    }

    pub fn push_login(&self, result: ClientResult<LoginResponse>) {
        self.login_results.lock().unwrap().push_back(result);
    }

    pub fn fetch_count(&self) -> u32 {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn create_count(&self) -> u32 {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn update_payloads(&self) -> Vec<Vec<User>> {
        self.update_payloads.lock().unwrap().clone()
    }

    /// Highest number of remote calls that were running at once.
    pub fn max_in_flight(&self) -> u32 {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    async fn remote_call(&self) {
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);
        tokio::task::yield_now().await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }

    fn record_token(&self, token: &AuthToken) {
        self.tokens_seen
            .lock()
            .unwrap()
            .push(token.as_header_value().to_string());
    }
}

#[async_trait]
impl DashboardApi for ScriptedApi {
    async fn health_check(&self) -> bool {
        self.healthy.load(Ordering::SeqCst)
    }

    async fn login(&self, _email: &str, _password: &str) -> ClientResult<LoginResponse> {
        self.login_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(LoginResponse {
                    token: AuthToken::from_raw("scripted-token"),
                    user: None,
                })
            })
    }

    async fn fetch_users(&self, token: &AuthToken) -> ClientResult<DashboardSnapshot> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.record_token(token);
        self.remote_call().await;
        self.fetch_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::network("connection refused")))
    }

    async fn create_user(&self, token: &AuthToken, _user: &NewUser) -> ClientResult<User> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.record_token(token);
        self.remote_call().await;
        self.create_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::network("connection refused")))
    }

    async fn update_users(&self, token: &AuthToken, users: &[User]) -> ClientResult<Vec<User>> {
        self.record_token(token);
        self.update_payloads.lock().unwrap().push(users.to_vec());
        self.remote_call().await;
        self.update_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(users.to_vec()))
    }
}

/// In-memory store whose reads or writes can be switched to fail.
#[derive(Default)]
pub(crate) struct FlakyStore {
    pub inner: MemoryStore,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
}

impl FlakyStore {
    pub fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl KeyValueStore for FlakyStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::backend(key, "read refused"));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::backend(key, "disk full"));
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::backend(key, "disk full"));
        }
        self.inner.remove(key).await
    }
}

pub(crate) async fn signed_in_store() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    store.set(TOKEN_KEY, TEST_TOKEN).await.unwrap();
    store
}

pub(crate) async fn start_engine(
    api: &Arc<ScriptedApi>,
    store: Arc<dyn KeyValueStore>,
    retry: RetryPolicy,
) -> (SyncEngine, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    let engine = SyncEngine::start(api.clone(), store, retry, sink.clone()).await;
    (engine, sink)
}
