//! Upstream discussion endpoint client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;

use crate::domain::entities::DiscussionList;
use crate::domain::ports::DiscussionSource;
use crate::error::SourceError;

/// Unauthenticated GET against the discussion-list endpoint
pub struct HttpDiscussionSource {
    http: Client,
    url: String,
}

impl HttpDiscussionSource {
    pub fn new(url: String, timeout: Duration) -> Result<Self, SourceError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self { http, url })
    }

    #[cfg(test)]
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<DiscussionList, SourceError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| SourceError::Deserialization(e.to_string()))
        } else if status.as_u16() == 429 {
            Err(SourceError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(SourceError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl DiscussionSource for HttpDiscussionSource {
    async fn fetch_discussions(&self) -> Result<DiscussionList, SourceError> {
        tracing::debug!(url = %self.url, "Fetching discussions");

        let response = self
            .http
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        self.handle_response(response).await
    }
}
