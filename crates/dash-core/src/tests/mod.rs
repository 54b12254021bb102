mod models;

use crate::{Region, User};

use chrono::{DateTime, TimeZone, Utc};

pub(crate) fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

pub(crate) fn user(id: &str, region: Region, is_active: bool, created_at: DateTime<Utc>) -> User {
    User {
        id: id.to_string(),
        name: format!("User {id}"),
        email: format!("user{id}@example.com"),
        region,
        is_active,
        created_at,
    }
}
