use crate::StateKind;

use std::sync::Mutex;
use std::time::Duration;

use log::{debug, info, warn};

/// Structured record of something the engine did or tolerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    StateChanged {
        from: StateKind,
        to: StateKind,
    },
    AttemptFailed {
        operation: &'static str,
        attempt: u32,
        error: String,
    },
    RetryScheduled {
        operation: &'static str,
        attempt: u32,
        delay: Duration,
    },
    Recovered {
        operation: &'static str,
        attempts: u32,
    },
    TokenCleared {
        reason: &'static str,
    },
    TokenClearFailed {
        error: String,
    },
    SnapshotPersisted {
        users: usize,
    },
    PersistFailed {
        error: String,
    },
    CacheLoaded {
        users: usize,
    },
    CacheCorrupted {
        error: String,
    },
    CacheReadFailed {
        error: String,
    },
}

/// Receives engine events. Must not block.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: SyncEvent);
}

/// Forwards events to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEventSink;

impl EventSink for LogEventSink {
    fn emit(&self, event: SyncEvent) {
        match event {
            SyncEvent::StateChanged { from, to } => debug!("Sync state {from} -> {to}"),
            SyncEvent::AttemptFailed {
                operation,
                attempt,
                error,
            } => warn!("{operation} attempt {attempt} failed: {error}"),
            SyncEvent::RetryScheduled {
                operation,
                attempt,
                delay,
            } => info!("Retrying {operation} in {delay:?} (retry {attempt})"),
            SyncEvent::Recovered {
                operation,
                attempts,
            } => info!("{operation} succeeded after {attempts} attempts"),
            SyncEvent::TokenCleared { reason } => info!("Auth token cleared: {reason}"),
            SyncEvent::TokenClearFailed { error } => {
                warn!("Failed to clear auth token: {error}")
            }
            SyncEvent::SnapshotPersisted { users } => {
                debug!("Persisted dashboard snapshot ({users} users)")
            }
            SyncEvent::PersistFailed { error } => {
                warn!("Failed to persist dashboard snapshot: {error}")
            }
            SyncEvent::CacheLoaded { users } => {
                info!("Loaded cached dashboard snapshot ({users} users)")
            }
            SyncEvent::CacheCorrupted { error } => {
                warn!("Cached dashboard snapshot is corrupted, ignoring it: {error}")
            }
            SyncEvent::CacheReadFailed { error } => {
                warn!("Failed to read cached dashboard snapshot: {error}")
            }
        }
    }
}

/// Keeps every event in memory for later inspection.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SyncEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SyncEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn count(&self, predicate: impl Fn(&SyncEvent) -> bool) -> usize {
        self.events().iter().filter(|e| predicate(e)).count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: SyncEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event);
    }
}
