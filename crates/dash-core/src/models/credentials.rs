use crate::{CoreError, Result as CoreErrorResult};

/// Sign-in form input.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        require("email", &self.email)?;
        require("password", &self.password)
    }
}

/// Account registration form input.
#[derive(Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Registration {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("password", &self.password)
    }
}

#[track_caller]
fn require(field: &str, value: &str) -> CoreErrorResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(field, "Please fill in all fields"));
    }
    Ok(())
}

// Passwords stay out of logs and panic messages.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}
