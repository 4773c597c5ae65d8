//! Token acquisition and caching
//!
//! One manager owns the application credentials and two independent token
//! slots: one for the client-credential grant and one for the password
//! grant. A slot only hits the network when it is empty, expired, or the
//! caller forces a refresh; refreshing one slot never touches the other.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::constants::TOKEN_ENDPOINT;
use crate::credentials::{Credentials, UserCredentials};
use crate::error::{Error, Result};
use crate::token::{BearerToken, TokenResponse};

/// Timeout for requests to the token endpoint.
const TOKEN_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Requests and caches client and user access tokens.
///
/// Each slot is guarded by its own async mutex, held across the refresh
/// request, so two callers cannot race in-flight refreshes of the same
/// slot.
pub struct TokenManager {
    credentials: Credentials,
    token_url: String,
    http: reqwest::Client,
    client_slot: Mutex<Option<BearerToken>>,
    user_slot: Mutex<Option<BearerToken>>,
}

impl TokenManager {
    /// Create a manager requesting tokens from the production endpoint.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_token_url(credentials, TOKEN_ENDPOINT)
    }

    /// Create a manager with a custom token endpoint. Tests point this at
    /// a mock server.
    pub fn with_token_url(credentials: Credentials, token_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(TOKEN_REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Http(format!("building token client: {e}")))?;
        Ok(Self {
            credentials,
            token_url: token_url.into(),
            http,
            client_slot: Mutex::new(None),
            user_slot: Mutex::new(None),
        })
    }

    /// Get the client access token.
    ///
    /// A request to the endpoint is only made when no token was cached
    /// before, the cached one has expired, or `force` is set. Returns the
    /// cached token after the attempt; `None` means the endpoint refused
    /// the grant or returned an unusable token.
    pub async fn client_token(&self, force: bool) -> Result<Option<BearerToken>> {
        let mut slot = self.client_slot.lock().await;
        if force || !slot.as_ref().is_some_and(BearerToken::is_valid) {
            // Clear first: on a failed refresh the slot must not keep a
            // stale token.
            *slot = None;
            let form = [
                ("grant_type", "client_credentials"),
                ("client_id", self.credentials.client_id()),
                ("client_secret", self.credentials.client_secret()),
            ];
            *slot = self.fetch_token(&form, "client_credentials").await?;
        } else {
            debug!(grant = "client_credentials", "returning cached token");
        }
        Ok(slot.clone())
    }

    /// Get the user access token for `user`.
    ///
    /// Same caching and failure rules as [`client_token`], against the
    /// slot reserved for the password grant.
    ///
    /// [`client_token`]: TokenManager::client_token
    pub async fn user_token(
        &self,
        user: &UserCredentials,
        force: bool,
    ) -> Result<Option<BearerToken>> {
        let mut slot = self.user_slot.lock().await;
        if force || !slot.as_ref().is_some_and(BearerToken::is_valid) {
            *slot = None;
            let form = [
                ("grant_type", "password"),
                ("username", user.username()),
                ("password", user.password()),
                ("client_id", self.credentials.client_id()),
                ("client_secret", self.credentials.client_secret()),
            ];
            *slot = self.fetch_token(&form, "password").await?;
        } else {
            debug!(grant = "password", "returning cached token");
        }
        Ok(slot.clone())
    }

    /// POST a grant request and interpret the response.
    ///
    /// Transport failures and malformed bodies are errors; a non-200
    /// status or a token that fails validation yields `None`.
    async fn fetch_token(
        &self,
        form: &[(&str, &str)],
        grant: &'static str,
    ) -> Result<Option<BearerToken>> {
        debug!(grant, "requesting access token");
        let response = self
            .http
            .post(&self.token_url)
            .header(ACCEPT, "application/json")
            .form(form)
            .send()
            .await
            .map_err(|e| Error::Http(format!("token request failed: {e}")))?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(grant, status = status.as_u16(), "token endpoint refused the grant");
            return Ok(None);
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Http(format!("reading token response: {e}")))?;
        let parsed: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| Error::TokenParse(format!("invalid token response: {e}")))?;

        let token = BearerToken::from_response(parsed);
        if !token.is_valid() {
            warn!(grant, "token endpoint returned an unusable token");
            return Ok(None);
        }
        debug!(grant, expires_in = token.expires_in(), "access token obtained");
        Ok(Some(token))
    }
}
