use crate::User;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct UserCounts {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

pub fn counts(users: &[User]) -> UserCounts {
    let total = users.len();
    let active = users.iter().filter(|u| u.is_active).count();

    UserCounts {
        total,
        active,
        inactive: total - active,
    }
}
