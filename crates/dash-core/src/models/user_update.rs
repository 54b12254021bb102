use crate::models::new_user::require_user_fields;
use crate::{Region, Result as CoreErrorResult, User};

/// Partial edit of an existing user. Unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub region: Option<Region>,
    pub is_active: Option<bool>,
}

impl UserUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.region.is_none()
            && self.is_active.is_none()
    }

    /// Produce the edited user. `id` and `createdAt` are carried over untouched.
    #[track_caller]
    pub fn apply(&self, user: &User) -> CoreErrorResult<User> {
        let updated = User {
            id: user.id.clone(),
            name: self.name.clone().unwrap_or_else(|| user.name.clone()),
            email: self.email.clone().unwrap_or_else(|| user.email.clone()),
            region: self.region.unwrap_or(user.region),
            is_active: self.is_active.unwrap_or(user.is_active),
            created_at: user.created_at,
        };

        require_user_fields(&updated.name, &updated.email, updated.region)?;

        Ok(updated)
    }
}
