//! Domain model and analytics for the admin dashboard client.
//!
//! Nothing in this crate performs I/O. The sync engine owns the snapshot;
//! the projector functions in [`analytics`] derive aggregates from it.

pub mod analytics;
pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use analytics::{
    Analytics, DEFAULT_MONTHS_BACK, MonthlyRegistration, RegionShare, UserCounts, counts,
    monthly_registrations, monthly_registrations_at, regional_distribution,
};
pub use error::{CoreError, Result};
pub use models::credentials::{Credentials, Registration};
pub use models::dashboard_snapshot::{DashboardSnapshot, advance_timestamp};
pub use models::new_user::NewUser;
pub use models::region::Region;
pub use models::user::User;
pub use models::user_update::UserUpdate;
