use crate::{Error, Result};
use std::fmt;

/// Login credentials for the automation session.
///
/// Held in memory for the duration of one run, never persisted. The
/// password is excluded from `Debug` output so it cannot leak into logs.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub two_factor_enabled: bool,
}

impl Credentials {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        two_factor_enabled: bool,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            two_factor_enabled,
        }
    }

    /// Reject empty username or password before a session is opened.
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(Error::Validation("username must not be empty".to_string()));
        }
        if self.password.is_empty() {
            return Err(Error::Validation("password must not be empty".to_string()));
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("two_factor_enabled", &self.two_factor_enabled)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_filled_credentials() {
        let creds = Credentials::new("user@example.com", "hunter2", false);
        assert!(creds.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_username() {
        let creds = Credentials::new("   ", "hunter2", false);
        assert!(matches!(creds.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_empty_password() {
        let creds = Credentials::new("user@example.com", "", true);
        assert!(matches!(creds.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials::new("user@example.com", "hunter2", false);
        let rendered = format!("{:?}", creds);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
