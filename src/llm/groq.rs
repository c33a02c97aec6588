use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::llm::client::LlmProvider;
use crate::llm::prompts::build_summary_prompt;
use crate::{BrieflyError, Result};

const DEFAULT_GROQ_ENDPOINT: &str = "https://api.groq.com/openai/v1";
const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";

/// Client for Groq's OpenAI-compatible chat completions API.
pub struct GroqClient {
    http: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GroqClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings.llm.api_key.trim().to_string();

        let model = if settings.llm.model.trim().is_empty() {
            DEFAULT_GROQ_MODEL.to_string()
        } else {
            settings.llm.model.trim().to_string()
        };

        let endpoint = if settings.llm.endpoint.trim().is_empty() {
            DEFAULT_GROQ_ENDPOINT.to_string()
        } else {
            settings
                .llm
                .endpoint
                .trim()
                .trim_end_matches('/')
                .to_string()
        };

        Ok(Self {
            http: Client::builder()
                .build()
                .map_err(|e| BrieflyError::Config(format!("Failed to build Groq HTTP client: {e}")))?,
            api_key,
            model,
            endpoint,
        })
    }

    fn request_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint)
    }
}

#[async_trait]
impl LlmProvider for GroqClient {
    async fn summarize(&self, text: &str) -> Result<String> {
        if self.api_key.is_empty() {
            return Err(BrieflyError::Auth(format!(
                "API key is missing. Set llm.api_key in config or {}.",
                crate::config::API_KEY_ENV
            )));
        }

        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: build_summary_prompt(text),
            }],
        };

        tracing::info!(model = %self.model, chars = text.chars().count(), "Requesting summary");

        let response = self
            .http
            .post(self.request_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| BrieflyError::Request(format!("chat completion request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "Chat completion returned an error status");
            return Err(status_error(status, &detail));
        }

        let payload: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| BrieflyError::Upstream(format!("Failed to parse completion response: {e}")))?;

        first_choice_content(payload)
    }
}

fn status_error(status: StatusCode, detail: &str) -> BrieflyError {
    let message = format!("{} - {}", status, detail.trim());
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => BrieflyError::Auth(message),
        _ => BrieflyError::Upstream(message),
    }
}

fn first_choice_content(payload: ChatCompletionResponse) -> Result<String> {
    payload
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| {
            BrieflyError::Upstream("Completion response did not contain a message".to_string())
        })
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}
