//! CodeProject v1 REST API client
//!
//! Authenticated, typed access to the CodeProject API on top of one
//! shared HTTP transport. Obtain a `BearerToken` from
//! `codeproject_auth::TokenManager`, then construct the endpoint wrappers
//! (or a bare [`ApiClient`]) with a [`SharedTransport`] handle.
//!
//! Request flow:
//! 1. [`SharedTransport::new`]: one handle per process, cloned freely
//! 2. [`ApiClient::new`]: acquires a transport reference and installs the
//!    token as the transport-wide Authorization header
//! 3. [`ApiClient::get`] / [`ApiClient::get_paged`]: typed GETs with
//!    soft-failure semantics; the last response status stays readable
//! 4. drop or [`ApiClient::release`]: the last release tears the
//!    transport down
//!
//! The transport and its default headers are shared, so a `set_token` on
//! one client switches the identity used by every live client. Single
//! shared identity is the design; callers needing distinct concurrent
//! identities must serialize their requests.

pub mod articles;
pub mod client;
pub mod constants;
pub mod error;
pub mod forum;
pub mod models;
pub mod my;
pub mod query;
pub mod questions;
pub mod transport;

mod scrape;

pub use articles::ArticlesApi;
pub use client::ApiClient;
pub use error::{Error, Result};
pub use forum::ForumApi;
pub use models::{
    ForumDisplayMode, ItemSummary, NamedIdPair, Notification, NotificationList, PagedData,
    Pagination, QuestionMode, Reputation, ReputationType, UserProfile,
};
pub use my::MyApi;
pub use query::to_query_string;
pub use questions::QuestionsApi;
pub use transport::SharedTransport;
