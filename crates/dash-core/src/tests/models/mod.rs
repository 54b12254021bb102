mod credentials;
mod dashboard_snapshot;
mod region;
mod user;
mod user_update;
