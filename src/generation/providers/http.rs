//! HTTP provider for the article backend.
//!
//! Endpoints, relative to the configured base URL:
//! - `POST /api/generate-article` with `{"prompt": ...}` → `{"article": ...}`
//! - `GET /health` → `{"status": "ok"}`

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::generation::types::{ArticleRequest, ArticleResponse, HealthResponse};
use crate::generation::{ArticleProvider, ProviderError};

pub const GENERATE_ARTICLE_PATH: &str = "/api/generate-article";
pub const HEALTH_PATH: &str = "/health";

/// Article backend reached over plain HTTP with a JSON body.
pub struct HttpArticleProvider {
    base_url: String,
    client: reqwest::Client,
}

impl HttpArticleProvider {
    /// Build a provider for `base_url`. `timeout` of `None` leaves requests
    /// unbounded, so a slow backend keeps the form pending until the network
    /// stack gives up.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ProviderError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if reqwest::Url::parse(&base_url).is_err() {
            return Err(ProviderError::Config(format!("invalid base URL: {base_url}")));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ProviderError::Config(e.to_string()))?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn map_send_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::Network(e.to_string())
    }
}

/// Reject non-2xx responses, keeping the body for the log.
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ProviderError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    warn!("Article backend error: {} - {}", status, message);
    Err(ProviderError::Api { status, message })
}

#[async_trait]
impl ArticleProvider for HttpArticleProvider {
    fn name(&self) -> &str {
        "http"
    }

    async fn generate_article(&self, prompt: &str) -> Result<Option<String>, ProviderError> {
        info!(
            "Generate request: url={}, prompt_len={}",
            self.url(GENERATE_ARTICLE_PATH),
            prompt.len()
        );

        // .json() sets Content-Type: application/json
        let response = self
            .client
            .post(self.url(GENERATE_ARTICLE_PATH))
            .json(&ArticleRequest { prompt })
            .send()
            .await
            .map_err(map_send_error)?;

        debug!("Generate response status: {}", response.status());
        let response = ensure_success(response).await?;

        let body = response.text().await.map_err(map_send_error)?;
        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| ProviderError::Parse(e.to_string()))?;
        if value.is_null() {
            return Err(ProviderError::Parse("response body is null".to_string()));
        }

        let parsed = ArticleResponse::from_value(&value);
        match &parsed.article {
            Some(article) => info!("Article received: {} bytes", article.len()),
            None => debug!("Response carried no article field: {}", body),
        }
        Ok(parsed.article)
    }

    async fn check_health(&self) -> Result<(), ProviderError> {
        let response = self
            .client
            .get(self.url(HEALTH_PATH))
            .send()
            .await
            .map_err(map_send_error)?;
        let response = ensure_success(response).await?;

        let health: HealthResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;
        debug!("Health probe status: {}", health.status);

        if health.status == "ok" {
            Ok(())
        } else {
            Err(ProviderError::Api {
                status: 200,
                message: format!("unhealthy status: {}", health.status),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let provider = HttpArticleProvider::new("http://127.0.0.1:8000/", None).unwrap();
        assert_eq!(provider.base_url(), "http://127.0.0.1:8000");
        assert_eq!(
            provider.url(GENERATE_ARTICLE_PATH),
            "http://127.0.0.1:8000/api/generate-article"
        );
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        let result = HttpArticleProvider::new("not a url", None);
        assert!(matches!(result, Err(ProviderError::Config(_))));
    }

    #[test]
    fn test_new_with_timeout() {
        let provider =
            HttpArticleProvider::new("http://localhost:8000", Some(Duration::from_secs(5)));
        assert!(provider.is_ok());
    }
}
