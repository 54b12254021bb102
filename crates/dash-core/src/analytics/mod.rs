//! Pure projections over a user list.
//!
//! No state and no I/O: every function here can be called repeatedly and from
//! any thread against the current snapshot.

mod monthly_registrations;
mod regional_distribution;
mod user_counts;

pub use monthly_registrations::{
    DEFAULT_MONTHS_BACK, MonthlyRegistration, monthly_registrations, monthly_registrations_at,
};
pub use regional_distribution::{RegionShare, regional_distribution};
pub use user_counts::{UserCounts, counts};

use crate::User;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything the analytics screens show, computed in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub counts: UserCounts,
    pub monthly_registrations: Vec<MonthlyRegistration>,
    pub regional_distribution: Vec<RegionShare>,
}

impl Analytics {
    pub fn project(users: &[User], now: DateTime<Utc>) -> Self {
        Self::project_months(users, DEFAULT_MONTHS_BACK, now)
    }

    pub fn project_months(users: &[User], months_back: u32, now: DateTime<Utc>) -> Self {
        Self {
            counts: counts(users),
            monthly_registrations: monthly_registrations_at(users, months_back, now),
            regional_distribution: regional_distribution(users),
        }
    }
}
