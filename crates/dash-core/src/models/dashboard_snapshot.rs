use crate::User;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// The client's copy of the remote user list plus its freshness timestamp.
///
/// `users` keeps server response order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub users: Vec<User>,
    pub last_updated: DateTime<Utc>,
}

impl DashboardSnapshot {
    pub fn new(users: Vec<User>, last_updated: DateTime<Utc>) -> Self {
        Self {
            users,
            last_updated,
        }
    }

    pub fn find_user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Membership list with one user removed; the basis of a delete.
    pub fn users_without(&self, id: &str) -> Vec<User> {
        self.users.iter().filter(|u| u.id != id).cloned().collect()
    }

    /// New snapshot with `user` appended, stamped after this one.
    pub fn with_appended(&self, user: User, now: DateTime<Utc>) -> Self {
        let mut users = self.users.clone();
        users.push(user);
        Self {
            users,
            last_updated: advance_timestamp(Some(self.last_updated), now),
        }
    }

    /// New snapshot with `users` as the full membership, stamped after this one.
    pub fn with_users(&self, users: Vec<User>, now: DateTime<Utc>) -> Self {
        Self {
            users,
            last_updated: advance_timestamp(Some(self.last_updated), now),
        }
    }
}

/// Pick a timestamp strictly after `previous`.
///
/// Uses `candidate` when it is already later, otherwise `previous + 1ms`.
pub fn advance_timestamp(previous: Option<DateTime<Utc>>, candidate: DateTime<Utc>) -> DateTime<Utc> {
    match previous {
        Some(prev) if candidate <= prev => prev + Duration::milliseconds(1),
        _ => candidate,
    }
}
