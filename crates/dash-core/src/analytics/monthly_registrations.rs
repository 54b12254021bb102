use crate::User;

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

pub const DEFAULT_MONTHS_BACK: u32 = 6;

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Registrations within one calendar month (UTC).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyRegistration {
    pub year: i32,
    /// 1-based month number
    pub month: u32,
    pub label: String,
    pub count: usize,
}

/// Trailing `months_back` calendar months ending at the current month.
pub fn monthly_registrations(users: &[User], months_back: u32) -> Vec<MonthlyRegistration> {
    monthly_registrations_at(users, months_back, Utc::now())
}

/// Same as [`monthly_registrations`] with an explicit "current" instant.
///
/// Buckets are ordered oldest first; the last bucket is the month of `now`.
pub fn monthly_registrations_at(
    users: &[User],
    months_back: u32,
    now: DateTime<Utc>,
) -> Vec<MonthlyRegistration> {
    let current = month_index(now.year(), now.month());

    (0..i64::from(months_back))
        .rev()
        .map(|offset| {
            let index = current - offset;
            let year = index.div_euclid(12) as i32;
            let month = (index.rem_euclid(12) + 1) as u32;

            let count = users
                .iter()
                .filter(|u| u.created_at.year() == year && u.created_at.month() == month)
                .count();

            MonthlyRegistration {
                year,
                month,
                label: MONTH_LABELS[(month - 1) as usize].to_string(),
                count,
            }
        })
        .collect()
}

fn month_index(year: i32, month: u32) -> i64 {
    i64::from(year) * 12 + i64::from(month) - 1
}
