//! Authenticated request execution
//!
//! `ApiClient` issues GET requests against the API root with the bearer
//! token installed on the shared transport, and keeps the status of the
//! last response readable for the caller. Construction acquires a
//! transport reference; dropping (or explicitly releasing) the client
//! gives it back, and the last release tears the transport down.

use codeproject_auth::BearerToken;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::PagedData;
use crate::transport::SharedTransport;

/// Executes authenticated GETs and exposes the outcome of the last one.
///
/// The Authorization header lives on the shared transport, so `set_token`
/// switches the identity used by every live client, not just this one.
/// That single shared identity is the design; callers juggling different
/// tokens concurrently must serialize their requests themselves.
#[derive(Debug)]
pub struct ApiClient {
    transport: SharedTransport,
    token: BearerToken,
    last_status: StatusCode,
    last_status_message: String,
    released: bool,
}

impl ApiClient {
    /// Create a client authenticating with `token`.
    ///
    /// Fails when the token string is blank. On success a transport
    /// reference has been acquired and the token installed as the
    /// transport-wide Authorization header.
    pub fn new(transport: SharedTransport, token: BearerToken) -> Result<Self> {
        validate(&token)?;
        transport.acquire()?;
        if let Err(e) = transport.set_bearer(token.token()) {
            transport.release();
            return Err(e);
        }
        Ok(Self {
            transport,
            token,
            last_status: StatusCode::OK,
            last_status_message: "OK".into(),
            released: false,
        })
    }

    /// Replace the token used for subsequent requests.
    ///
    /// A blank token is rejected and the previously installed token stays
    /// active. On success the shared header set is rewritten, which also
    /// switches the token used by every other live client.
    pub fn set_token(&mut self, token: BearerToken) -> Result<()> {
        validate(&token)?;
        self.transport.set_bearer(token.token())?;
        self.token = token;
        Ok(())
    }

    /// Token this client last installed.
    pub fn token(&self) -> &BearerToken {
        &self.token
    }

    /// Status code of the last response.
    pub fn last_status(&self) -> StatusCode {
        self.last_status
    }

    /// Reason phrase of the last response.
    pub fn last_status_message(&self) -> &str {
        &self.last_status_message
    }

    /// The transport handle this client holds a reference on.
    pub fn transport(&self) -> &SharedTransport {
        &self.transport
    }

    /// Issue a GET for `relative` under the API root.
    ///
    /// Returns `Ok(None)` on a non-2xx response or an empty body; the
    /// status accessors tell those two apart. Transport failures and
    /// malformed JSON bodies are errors.
    pub async fn get<T: DeserializeOwned>(&mut self, relative: &str) -> Result<Option<T>> {
        let url = self
            .transport
            .base_url()
            .join(relative)
            .map_err(|e| Error::Http(format!("invalid request URL {relative:?}: {e}")))?;
        let client = self.transport.client()?;

        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Http(format!("GET {relative} failed: {e}")))?;

        let status = response.status();
        self.last_status = status;
        self.last_status_message = status.canonical_reason().unwrap_or_default().to_string();
        debug!(url = relative, status = status.as_u16(), "request completed");

        if !status.is_success() {
            return Ok(None);
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Http(format!("reading response body: {e}")))?;
        if body.is_empty() {
            return Ok(None);
        }
        let data = serde_json::from_str(&body)
            .map_err(|e| Error::Parse(format!("invalid response body: {e}")))?;
        Ok(Some(data))
    }

    /// GET one page of a paged listing (`?page=<n>` appended).
    pub async fn get_paged(&mut self, relative: &str, page: u32) -> Result<Option<PagedData>> {
        self.get(&format!("{relative}?page={page}")).await
    }

    /// Give the transport reference back. Idempotent, and also run from
    /// `Drop`, so every exit path releases exactly once.
    pub fn release(&mut self) {
        if !self.released {
            self.released = true;
            self.transport.release();
        }
    }
}

impl Drop for ApiClient {
    fn drop(&mut self) {
        self.release();
    }
}

fn validate(token: &BearerToken) -> Result<()> {
    if token.token().trim().is_empty() {
        return Err(Error::InvalidToken("token must have a non-blank value".into()));
    }
    Ok(())
}
