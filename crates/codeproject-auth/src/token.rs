//! Bearer token value object and the token-endpoint wire format

use std::time::Instant;

use serde::Deserialize;

/// Wire response from the token endpoint.
///
/// `expires_in` arrives as a JSON number or as a numeric string depending
/// on the server path, so it gets a tolerant deserializer. `token_type`
/// is absent in some error-shaped bodies and defaults to empty.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default, deserialize_with = "expires_in_seconds")]
    pub expires_in: u64,
}

fn expires_in_seconds<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// A client or user access token, stamped with its receipt time.
///
/// Immutable once created; a refresh produces a new token instead of
/// mutating this one.
#[derive(Debug, Clone)]
pub struct BearerToken {
    token: String,
    token_type: String,
    expires_in: u64,
    requested_at: Instant,
}

impl BearerToken {
    /// Create a token stamped with the current time.
    pub fn new(token: impl Into<String>, token_type: impl Into<String>, expires_in: u64) -> Self {
        Self {
            token: token.into(),
            token_type: token_type.into(),
            expires_in,
            requested_at: Instant::now(),
        }
    }

    pub(crate) fn from_response(response: TokenResponse) -> Self {
        Self::new(response.access_token, response.token_type, response.expires_in)
    }

    /// The opaque token string sent as `Authorization: Bearer <token>`.
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    /// Lifetime in seconds granted by the token endpoint.
    pub fn expires_in(&self) -> u64 {
        self.expires_in
    }

    /// True while the token string is non-blank and the token has not
    /// expired.
    ///
    /// Expiry compares elapsed whole seconds against `expires_in`, so near
    /// the boundary a token can read as expired up to a second early. The
    /// coarse comparison is intentional; the worst case is one refresh a
    /// second sooner than strictly needed.
    pub fn is_valid(&self) -> bool {
        !self.token.trim().is_empty() && self.requested_at.elapsed().as_secs() < self.expires_in
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn fresh_token_is_valid() {
        let token = BearerToken::new("tok", "bearer", 10_000);
        assert!(token.is_valid());
    }

    #[test]
    fn blank_token_is_invalid() {
        assert!(!BearerToken::new("", "bearer", 10_000).is_valid());
        assert!(!BearerToken::new("  \t \n", "bearer", 10_000).is_valid());
    }

    #[test]
    fn zero_lifetime_token_is_invalid() {
        // elapsed 0 is not strictly less than expires_in 0
        assert!(!BearerToken::new("tok", "bearer", 0).is_valid());
    }

    #[test]
    fn token_expires_after_its_lifetime() {
        let requested_at = Instant::now()
            .checked_sub(Duration::from_secs(5))
            .expect("5 seconds of uptime");
        let token = BearerToken {
            token: "tok".into(),
            token_type: "bearer".into(),
            expires_in: 5,
            requested_at,
        };
        assert!(!token.is_valid());

        let token = BearerToken {
            expires_in: 6,
            ..token
        };
        assert!(token.is_valid());
    }

    #[test]
    fn response_with_numeric_expires_in() {
        let json = r#"{"access_token":"tok","token_type":"bearer","expires_in":10000}"#;
        let response: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.access_token, "tok");
        assert_eq!(response.token_type, "bearer");
        assert_eq!(response.expires_in, 10_000);
    }

    #[test]
    fn response_with_string_expires_in() {
        // The endpoint quotes expires_in on some paths
        let json = r#"{"access_token":"tok","expires_in":"10000"}"#;
        let response: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.expires_in, 10_000);
        assert_eq!(response.token_type, "");
    }

    #[test]
    fn response_with_garbage_expires_in_fails() {
        let json = r#"{"access_token":"tok","expires_in":"soon"}"#;
        assert!(serde_json::from_str::<TokenResponse>(json).is_err());
    }
}
