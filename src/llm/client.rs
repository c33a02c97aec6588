use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::groq::GroqClient;
use crate::{BrieflyError, Result};

#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Summarize `text`, returning the model's reply unmodified.
    async fn summarize(&self, text: &str) -> Result<String>;
}

/// Build an LLM provider from runtime settings.
pub fn build_provider(settings: &Settings) -> Result<Box<dyn LlmProvider>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "groq" | "openai" => Ok(Box::new(GroqClient::from_settings(settings)?)),
        other => Err(BrieflyError::Config(format!(
            "Unsupported llm.provider '{}'. Supported providers: groq, openai",
            other
        ))),
    }
}
