//! The forum messages API

use codeproject_auth::BearerToken;

use crate::client::ApiClient;
use crate::constants;
use crate::error::Result;
use crate::models::{ForumDisplayMode, PagedData};
use crate::scrape;
use crate::transport::SharedTransport;

/// Typed access to the forum message endpoints. Works with either a
/// client or a user token.
pub struct ForumApi {
    client: ApiClient,
}

impl ForumApi {
    /// Create the wrapper; acquires its own reference on the transport.
    pub fn new(transport: SharedTransport, token: BearerToken) -> Result<Self> {
        Ok(Self {
            client: ApiClient::new(transport, token)?,
        })
    }

    /// One page of messages in the given forum and display mode.
    pub async fn forum(
        &mut self,
        forum_id: u32,
        mode: ForumDisplayMode,
        page: u32,
    ) -> Result<Option<PagedData>> {
        self.client
            .get(&format!("{}/{forum_id}/{mode}?page={page}", constants::FORUM))
            .await
    }

    /// One page of messages in the given discussion thread.
    pub async fn thread_messages(
        &mut self,
        thread_id: u32,
        page: u32,
    ) -> Result<Option<PagedData>> {
        self.client
            .get(&format!(
                "{}/{thread_id}?page={page}",
                constants::MESSAGE_THREAD
            ))
            .await
    }

    /// The available forums.
    ///
    /// The API has no forum listing endpoint yet, so this scrapes the
    /// public overview page and wraps the links in the usual paged shape.
    /// Comes back absent on any fetch failure, like an API listing would.
    pub async fn list_forums(&mut self) -> Result<Option<PagedData>> {
        Ok(scrape::forum_links().await)
    }

    /// The underlying executor, for status inspection and token changes.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut ApiClient {
        &mut self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn forum_path_carries_id_mode_and_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/Forum/1647/Threads"))
            .and(query_param("page", "4"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"pagination":{"page":4},"items":[]}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let transport = SharedTransport::with_base_url(server.uri().parse().unwrap());
        let mut forum =
            ForumApi::new(transport, BearerToken::new("tok", "bearer", 10_000)).unwrap();
        let page = forum.forum(1647, ForumDisplayMode::Threads, 4).await.unwrap();
        assert!(page.is_some());
    }

    #[tokio::test]
    async fn thread_messages_path_carries_thread_id_and_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/MessageThread/5561107"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"pagination":{"page":1},"items":[{"id":"5561502","title":"Re: Sorted"}]}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let transport = SharedTransport::with_base_url(server.uri().parse().unwrap());
        let mut forum =
            ForumApi::new(transport, BearerToken::new("tok", "bearer", 10_000)).unwrap();
        let page = forum.thread_messages(5_561_107, 1).await.unwrap().unwrap();
        assert_eq!(page.items[0].title, "Re: Sorted");
    }
}
