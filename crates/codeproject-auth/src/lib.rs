//! CodeProject OAuth token management
//!
//! Requests and caches the bearer tokens used by the CodeProject v1 REST
//! API. Two grants are supported: `client_credentials` (the application
//! itself) and `password` (an end user). This crate is a standalone
//! library with no dependency on the API client crate; it can be tested
//! and used independently.
//!
//! Token flow:
//! 1. Build [`Credentials`] (validated once, never mutated)
//! 2. [`TokenManager::client_token`] / [`TokenManager::user_token`] return
//!    the cached token for their slot, or fetch a fresh one when the slot
//!    is empty, expired, or the caller forces a refresh
//! 3. The returned [`BearerToken`] authenticates API requests until expiry

pub mod constants;
pub mod credentials;
pub mod error;
pub mod manager;
pub mod secret;
pub mod token;

pub use constants::*;
pub use credentials::{Credentials, UserCredentials};
pub use error::{Error, Result};
pub use manager::TokenManager;
pub use secret::SecretString;
pub use token::BearerToken;
