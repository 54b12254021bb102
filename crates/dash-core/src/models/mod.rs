pub mod credentials;
pub mod dashboard_snapshot;
pub mod new_user;
pub mod region;
pub mod user;
pub mod user_update;
