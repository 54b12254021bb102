use dash_core::DashboardSnapshot;

/// Observable lifecycle of the engine.
///
/// `Error` keeps the last snapshot that was known good so the UI can keep
/// showing it under the error banner.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SyncState {
    #[default]
    Idle,
    Loading,
    Ready(DashboardSnapshot),
    Error {
        message: String,
        last_known: Option<DashboardSnapshot>,
    },
}

/// Payload-free discriminant of [`SyncState`], cheap to log and compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKind {
    Idle,
    Loading,
    Ready,
    Error,
}

impl SyncState {
    pub fn kind(&self) -> StateKind {
        match self {
            Self::Idle => StateKind::Idle,
            Self::Loading => StateKind::Loading,
            Self::Ready(_) => StateKind::Ready,
            Self::Error { .. } => StateKind::Error,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Snapshot visible in this state, if any.
    pub fn snapshot(&self) -> Option<&DashboardSnapshot> {
        match self {
            Self::Ready(snapshot) => Some(snapshot),
            Self::Error { last_known, .. } => last_known.as_ref(),
            Self::Idle | Self::Loading => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message, .. } => Some(message),
            _ => None,
        }
    }
}

impl std::fmt::Display for StateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}
