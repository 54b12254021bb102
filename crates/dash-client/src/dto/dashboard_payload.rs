use dash_core::DashboardSnapshot;

use serde::Deserialize;

/// Aggregates the server computes alongside the user list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerAnalytics {
    pub total_users: u64,
    pub active_users: u64,
    pub inactive_users: u64,
    pub deleted_users_count: u64,
}

/// Decoded `data` of `GET /api/dashboard`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardPayload {
    pub snapshot: DashboardSnapshot,
    pub analytics: Option<ServerAnalytics>,
}

#[derive(Deserialize)]
pub(crate) struct DashboardData {
    #[serde(flatten)]
    pub snapshot: DashboardSnapshot,
    #[serde(default)]
    pub analytics: Option<ServerAnalytics>,
}

impl From<DashboardData> for DashboardPayload {
    fn from(data: DashboardData) -> Self {
        Self {
            snapshot: data.snapshot,
            analytics: data.analytics,
        }
    }
}
