//! The "My" API: resources belonging to the token's member
//!
//! Every endpoint here requires a user token; with a client token the API
//! answers 401 and the calls come back absent.

use codeproject_auth::BearerToken;

use crate::client::ApiClient;
use crate::constants;
use crate::error::Result;
use crate::models::{NotificationList, PagedData, Reputation, UserProfile};
use crate::transport::SharedTransport;

/// Typed access to the `v1/My/...` endpoints.
pub struct MyApi {
    client: ApiClient,
}

impl MyApi {
    /// Create the wrapper; acquires its own reference on the transport.
    pub fn new(transport: SharedTransport, token: BearerToken) -> Result<Self> {
        Ok(Self {
            client: ApiClient::new(transport, token)?,
        })
    }

    /// The profile belonging to the request token.
    pub async fn profile(&mut self) -> Result<Option<UserProfile>> {
        self.client.get(constants::MY_PROFILE).await
    }

    /// Reputation totals and per-type breakdown.
    pub async fn reputation(&mut self) -> Result<Option<Reputation>> {
        self.client.get(constants::MY_REPUTATION).await
    }

    /// The member's notifications.
    pub async fn notifications(&mut self) -> Result<Option<NotificationList>> {
        self.client.get(constants::MY_NOTIFICATIONS).await
    }

    /// One page of the member's answers.
    pub async fn answers(&mut self, page: u32) -> Result<Option<PagedData>> {
        self.client.get_paged(constants::MY_ANSWERS, page).await
    }

    /// One page of the member's articles.
    pub async fn articles(&mut self, page: u32) -> Result<Option<PagedData>> {
        self.client.get_paged(constants::MY_ARTICLES, page).await
    }

    /// One page of the member's blog posts.
    pub async fn blog_posts(&mut self, page: u32) -> Result<Option<PagedData>> {
        self.client.get_paged(constants::MY_BLOG_POSTS, page).await
    }

    /// One page of the member's bookmarks.
    pub async fn bookmarks(&mut self, page: u32) -> Result<Option<PagedData>> {
        self.client.get_paged(constants::MY_BOOKMARKS, page).await
    }

    /// One page of the member's forum messages.
    pub async fn messages(&mut self, page: u32) -> Result<Option<PagedData>> {
        self.client.get_paged(constants::MY_MESSAGES, page).await
    }

    /// One page of the member's questions.
    pub async fn questions(&mut self, page: u32) -> Result<Option<PagedData>> {
        self.client.get_paged(constants::MY_QUESTIONS, page).await
    }

    /// One page of the member's tips.
    pub async fn tips(&mut self, page: u32) -> Result<Option<PagedData>> {
        self.client.get_paged(constants::MY_TIPS, page).await
    }

    /// The underlying executor, for status inspection and token changes.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut ApiClient {
        &mut self.client
    }
}
