//! Shared HTTP transport with reference-counted lifetime
//!
//! Every API client alive at the same time shares one `reqwest::Client`,
//! and with it the client's default headers, including the
//! `Authorization` header installed by the most recent token change. The
//! client is created lazily on first acquisition and torn down when the
//! last holder releases it; a later acquisition starts a fresh one.
//!
//! The handle is passed explicitly through constructors; there is no
//! global or static transport. Two handles cloned from the same origin
//! share one client, one reference count, and one header set.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};

/// Timeout applied to every request on the shared client.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Default)]
struct TransportState {
    client: Option<reqwest::Client>,
    holders: usize,
}

/// Cloneable handle to the transport shared by all live API clients.
#[derive(Debug, Clone)]
pub struct SharedTransport {
    base_url: Url,
    state: Arc<Mutex<TransportState>>,
}

impl SharedTransport {
    /// Handle rooted at the production API.
    pub fn new() -> Self {
        let base_url = Url::parse(codeproject_auth::API_BASE_URL).expect("API base URL parses");
        Self::with_base_url(base_url)
    }

    /// Handle rooted at a custom base URL. Tests point this at a mock
    /// server.
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            base_url,
            state: Arc::new(Mutex::new(TransportState::default())),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// True when every client that acquired this transport has released
    /// it again. Diagnostic; also what tests assert teardown with.
    pub fn fully_released(&self) -> bool {
        self.lock().holders == 0
    }

    /// Register a holder, creating the client on first acquisition.
    pub(crate) fn acquire(&self) -> Result<()> {
        let mut state = self.lock();
        if state.client.is_none() {
            state.client = Some(build_client(default_headers(None))?);
            debug!(base_url = %self.base_url, "created shared transport");
        }
        state.holders += 1;
        Ok(())
    }

    /// Drop one holder; the client is torn down with the last one.
    /// Calling without a matching acquire is a no-op.
    pub(crate) fn release(&self) {
        let mut state = self.lock();
        match state.holders {
            0 => {}
            1 => {
                state.holders = 0;
                state.client = None;
                debug!("tore down shared transport");
            }
            n => state.holders = n - 1,
        }
    }

    /// Install `Authorization: Bearer <token>` for every live holder.
    ///
    /// Default headers on a `reqwest::Client` are fixed at build time, so
    /// the rewrite swaps the shared client for one carrying the new header
    /// set: cleared, `Accept` re-added, `Authorization` added. Requests
    /// already in flight keep whichever client they started with.
    pub(crate) fn set_bearer(&self, token: &str) -> Result<()> {
        let value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| Error::InvalidToken(format!("token is not a valid header value: {e}")))?;
        let mut state = self.lock();
        if state.client.is_none() {
            return Err(Error::Http("shared transport has been released".into()));
        }
        state.client = Some(build_client(default_headers(Some(value)))?);
        Ok(())
    }

    /// Snapshot of the current client for issuing one request.
    pub(crate) fn client(&self) -> Result<reqwest::Client> {
        self.lock()
            .client
            .clone()
            .ok_or_else(|| Error::Http("shared transport has been released".into()))
    }

    fn lock(&self) -> MutexGuard<'_, TransportState> {
        // None of the critical sections can panic, so a poisoned lock
        // still holds consistent state.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SharedTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn default_headers(authorization: Option<HeaderValue>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(value) = authorization {
        headers.insert(AUTHORIZATION, value);
    }
    headers
}

fn build_client(headers: HeaderMap) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| Error::Http(format!("building shared client: {e}")))
}
