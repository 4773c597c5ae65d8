//! The questions API

use codeproject_auth::BearerToken;

use crate::client::ApiClient;
use crate::constants;
use crate::error::Result;
use crate::models::{PagedData, QuestionMode};
use crate::query::to_query_string;
use crate::transport::SharedTransport;

/// Typed access to `v1/Questions/{mode}`. Works with either a client or a
/// user token.
pub struct QuestionsApi {
    client: ApiClient,
}

impl QuestionsApi {
    /// Create the wrapper; acquires its own reference on the transport.
    pub fn new(transport: SharedTransport, token: BearerToken) -> Result<Self> {
        Ok(Self {
            client: ApiClient::new(transport, token)?,
        })
    }

    /// One page of questions in the given mode, filtered on
    /// comma-separated tags to `include` and `exclude`.
    pub async fn questions(
        &mut self,
        mode: QuestionMode,
        include: Option<&str>,
        exclude: Option<&str>,
        page: u32,
    ) -> Result<Option<PagedData>> {
        let page = page.to_string();
        let mut params: Vec<(&str, &str)> = Vec::new();
        if let Some(include) = include.filter(|t| !t.trim().is_empty()) {
            params.push(("include", include));
        }
        if let Some(exclude) = exclude.filter(|t| !t.trim().is_empty()) {
            params.push(("exclude", exclude));
        }
        params.push(("page", &page));

        let url = format!(
            "{}/{mode}{}",
            constants::QUESTIONS,
            to_query_string(params)
        );
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
