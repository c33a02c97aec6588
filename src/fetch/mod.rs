//! Article fetching
//!
//! Downloads a page and flattens its paragraph text into one string.

mod extract;
mod http;

use async_trait::async_trait;

use crate::Result;

pub use extract::extract_paragraph_text;
pub use http::HttpFetcher;

/// Anything that can turn a URL into article text.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    async fn fetch_article_text(&self, url: &str) -> Result<String>;
}
