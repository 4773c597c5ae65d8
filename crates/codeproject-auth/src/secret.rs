//! Redacting wrapper for credential secrets

use std::fmt;

use zeroize::Zeroize;

/// Client secret or user password - redacted in Debug/Display/logs and
/// zeroed on drop.
#[derive(Clone)]
pub struct SecretString(String);

impl SecretString {
    /// Wrap a sensitive value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Expose the inner value (use sparingly).
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// True when the value is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_debug_and_display() {
        let secret = SecretString::new("hunter2");
        assert_eq!(format!("{:?}", secret), "[REDACTED]");
        assert_eq!(format!("{}", secret), "[REDACTED]");
    }

    #[test]
    fn exposes_value() {
        let secret = SecretString::new("hunter2");
        assert_eq!(secret.expose(), "hunter2");
    }

    #[test]
    fn blank_detection() {
        assert!(SecretString::new("").is_blank());
        assert!(SecretString::new("  \t \n").is_blank());
        assert!(!SecretString::new("x").is_blank());
    }
}
