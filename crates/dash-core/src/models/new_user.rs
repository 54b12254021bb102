use crate::{CoreError, Region, Result as CoreErrorResult};

use serde::{Deserialize, Serialize};

/// A user that has not been created remotely yet, so it carries no `id`
/// and no `createdAt`; the server assigns both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub region: Region,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>, region: Region) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            region,
        }
    }

    /// Reject incomplete input before it reaches the engine.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        require_user_fields(&self.name, &self.email, self.region)
    }
}

/// Name, email and region are all mandatory on the add and edit forms.
#[track_caller]
pub(crate) fn require_user_fields(name: &str, email: &str, region: Region) -> CoreErrorResult<()> {
    if name.trim().is_empty() {
        return Err(CoreError::validation("name", "Please fill in all fields"));
    }
    if email.trim().is_empty() {
        return Err(CoreError::validation("email", "Please fill in all fields"));
    }
    if !region.is_set() {
        return Err(CoreError::validation("region", "Please fill in all fields"));
    }
    Ok(())
}
