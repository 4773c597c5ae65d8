//! Client and user credentials for the token endpoint
//!
//! Both credential types are validated where noted at construction time and
//! never mutated afterwards; a manager holding them can assume they stay
//! usable for its whole lifetime.

use crate::error::{Error, Result};
use crate::secret::SecretString;

/// Application credentials used by both grant types.
///
/// `client_id` and `client_secret` must be non-blank; this is checked once
/// here so the request path never has to.
#[derive(Debug, Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: SecretString,
}

impl Credentials {
    /// Create validated credentials.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self> {
        let client_id = client_id.into();
        let client_secret = SecretString::new(client_secret);
        if client_id.trim().is_empty() {
            return Err(Error::InvalidCredentials(
                "a valid client ID is required".into(),
            ));
        }
        if client_secret.is_blank() {
            return Err(Error::InvalidCredentials(
                "a valid client secret is required".into(),
            ));
        }
        Ok(Self {
            client_id,
            client_secret,
        })
    }

    /// The client access ID sent with every grant request.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub(crate) fn client_secret(&self) -> &str {
        self.client_secret.expose()
    }
}

/// End-user credentials for the password grant.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    username: String,
    password: SecretString,
}

impl UserCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::new(password),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn password(&self) -> &str {
        self.password.expose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_non_blank_credentials() {
        let credentials = Credentials::new("id", "secret").unwrap();
        assert_eq!(credentials.client_id(), "id");
        assert_eq!(credentials.client_secret(), "secret");
    }

    #[test]
    fn rejects_empty_client_id() {
        assert!(Credentials::new("", "secret").is_err());
    }

    #[test]
    fn rejects_whitespace_client_id() {
        assert!(Credentials::new("   \t \n", "secret").is_err());
    }

    #[test]
    fn rejects_empty_client_secret() {
        assert!(Credentials::new("id", "").is_err());
    }

    #[test]
    fn rejects_whitespace_client_secret() {
        assert!(Credentials::new("id", "  \t \n").is_err());
    }

    #[test]
    fn debug_redacts_the_secret() {
        let credentials = Credentials::new("id", "super-secret").unwrap();
        let debug = format!("{credentials:?}");
        assert!(!debug.contains("super-secret"), "got: {debug}");
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn user_credentials_redact_the_password() {
        let user = UserCredentials::new("jan", "pa55word");
        let debug = format!("{user:?}");
        assert!(!debug.contains("pa55word"), "got: {debug}");
        assert_eq!(user.username(), "jan");
        assert_eq!(user.password(), "pa55word");
    }
}
