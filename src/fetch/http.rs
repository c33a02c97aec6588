//! HTTP article fetcher

use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;

use crate::config::Settings;
use crate::fetch::{extract_paragraph_text, ArticleSource};
use crate::{BrieflyError, Result};

/// Fetches articles over HTTP with a plain GET.
pub struct HttpFetcher {
    http: Client,
}

impl HttpFetcher {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let mut builder = Client::builder().user_agent(settings.fetch.user_agent.clone());
        if settings.fetch.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(settings.fetch.timeout_secs));
        }

        let http = builder
            .build()
            .map_err(|e| BrieflyError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { http })
    }
}

#[async_trait]
impl ArticleSource for HttpFetcher {
    async fn fetch_article_text(&self, url: &str) -> Result<String> {
        let url = Url::parse(url.trim())
            .map_err(|e| BrieflyError::Parse(format!("invalid URL '{}': {}", url.trim(), e)))?;

        tracing::info!(%url, "Fetching article");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| BrieflyError::Network(e.to_string()))?;

        if !response.status().is_success() {
            // Any body is parsed regardless of status
            tracing::warn!(%url, status = %response.status(), "Article request returned an error status");
        }

        let body = response
            .text()
            .await
            .map_err(|e| BrieflyError::Network(format!("failed to read response body: {e}")))?;

        let text = extract_paragraph_text(&body);
        tracing::debug!(%url, chars = text.chars().count(), "Extracted article text");

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[tokio::test]
    async fn malformed_url_is_a_parse_error() {
        let fetcher = HttpFetcher::from_settings(&Settings::default()).unwrap();
        let err = fetcher.fetch_article_text("not a url").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().starts_with("Error"));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let fetcher = HttpFetcher::from_settings(&Settings::default()).unwrap();
        let err = fetcher
            .fetch_article_text(&format!("http://127.0.0.1:{port}/article"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Network);
        assert!(err.to_string().starts_with("Error fetching article:"));
    }
}
