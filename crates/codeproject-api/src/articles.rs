//! The articles API

use codeproject_auth::BearerToken;

use crate::client::ApiClient;
use crate::constants;
use crate::error::Result;
use crate::models::PagedData;
use crate::query::to_query_string;
use crate::transport::SharedTransport;

/// Typed access to `v1/Articles`. Works with either a client or a user
/// token.
pub struct ArticlesApi {
    client: ApiClient,
}

impl ArticlesApi {
    /// Create the wrapper; acquires its own reference on the transport.
    pub fn new(transport: SharedTransport, token: BearerToken) -> Result<Self> {
        Ok(Self {
            client: ApiClient::new(transport, token)?,
        })
    }

    /// One page of articles.
    ///
    /// `tags` filters on comma-separated tag names; articles rated below
    /// `min_rating` are not returned.
    pub async fn articles(
        &mut self,
        tags: Option<&str>,
        min_rating: f64,
        page: u32,
    ) -> Result<Option<PagedData>> {
        let min_rating = min_rating.to_string();
        let page = page.to_string();
        let mut params: Vec<(&str, &str)> = Vec::new();
        if let Some(tags) = tags.filter(|t| !t.trim().is_empty()) {
            params.push(("tags", tags));
        }
        params.push(("minrating", &min_rating));
        params.push(("page", &page));

        let url = format!("{}{}", constants::ARTICLES, to_query_string(params));
        self.client.get(&url).await
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
    async fn sends_tag_rating_and_page_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/Articles"))
            .and(query_param("tags", "rust,parsing"))
            .and(query_param("minrating", "3.5"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"pagination":{"page":2},"items":[]}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let transport = SharedTransport::with_base_url(server.uri().parse().unwrap());
        let mut articles =
            ArticlesApi::new(transport, BearerToken::new("tok", "bearer", 10_000)).unwrap();
        let page = articles
            .articles(Some("rust,parsing"), 3.5, 2)
            .await
            .unwrap();
        assert!(page.is_some());
    }

    #[tokio::test]
    async fn blank_tags_are_not_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/Articles"))
            .and(query_param("minrating", "3"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"pagination":{"page":1},"items":[]}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let transport = SharedTransport::with_base_url(server.uri().parse().unwrap());
        let mut articles =
            ArticlesApi::new(transport, BearerToken::new("tok", "bearer", 10_000)).unwrap();
        let page = articles.articles(Some("   "), 3.0, 1).await.unwrap();
        assert!(page.is_some());
    }
}
