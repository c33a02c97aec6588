//! Fetch → gate → summarize orchestration
//!
//! Front ends build a [`Pipeline`] once from [`Settings`] and call
//! [`Pipeline::run`] per URL. Runs are independent and strictly sequential.

use thiserror::Error;

use crate::config::Settings;
use crate::fetch::{ArticleSource, HttpFetcher};
use crate::llm::{build_provider, LlmProvider};
use crate::BrieflyError;

/// Progress reported while a run is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetching,
    Summarizing,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Fetching => "Fetching article...",
            Stage::Summarizing => "Summarizing...",
        }
    }
}

/// Successful pipeline output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    pub article_chars: usize,
    pub summary: String,
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Please enter a valid URL.")]
    EmptyUrl,

    #[error(transparent)]
    Fetch(BrieflyError),

    #[error("Could not fetch enough article content ({chars} characters, need {min}). Please try another link.")]
    InsufficientContent { chars: usize, min: usize },

    #[error(transparent)]
    Summarize(BrieflyError),
}

impl PipelineError {
    /// True when the article could not be turned into usable text.
    pub fn is_content_failure(&self) -> bool {
        matches!(
            self,
            PipelineError::Fetch(_) | PipelineError::InsufficientContent { .. }
        )
    }
}

pub struct Pipeline {
    source: Box<dyn ArticleSource>,
    provider: Box<dyn LlmProvider>,
    min_article_chars: usize,
}

impl Pipeline {
    pub fn new(
        source: Box<dyn ArticleSource>,
        provider: Box<dyn LlmProvider>,
        min_article_chars: usize,
    ) -> Self {
        Self {
            source,
            provider,
            min_article_chars,
        }
    }

    pub fn from_settings(settings: &Settings) -> crate::Result<Self> {
        Ok(Self::new(
            Box::new(HttpFetcher::from_settings(settings)?),
            build_provider(settings)?,
            settings.pipeline.min_article_chars,
        ))
    }

    pub async fn run(&self, url: &str) -> Result<Digest, PipelineError> {
        self.run_with_progress(url, |_| {}).await
    }

    pub async fn run_with_progress<F>(
        &self,
        url: &str,
        mut on_stage: F,
    ) -> Result<Digest, PipelineError>
    where
        F: FnMut(Stage) + Send,
    {
        let url = url.trim();
        if url.is_empty() {
            return Err(PipelineError::EmptyUrl);
        }

        on_stage(Stage::Fetching);
        let text = self
            .source
            .fetch_article_text(url)
            .await
            .map_err(PipelineError::Fetch)?;

        let chars = text.chars().count();
        if chars < self.min_article_chars {
            tracing::info!(chars, min = self.min_article_chars, "Article too short to summarize");
            return Err(PipelineError::InsufficientContent {
                chars,
                min: self.min_article_chars,
            });
        }

        on_stage(Stage::Summarizing);
        let summary = self
            .provider
            .summarize(&text)
            .await
            .map_err(PipelineError::Summarize)?;

        Ok(Digest {
            article_chars: chars,
            summary,
        })
    }
}
