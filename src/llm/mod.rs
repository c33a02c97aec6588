//! LLM module for briefly
//!
//! Sends article text to a chat-completion API and returns the summary.

mod client;
mod groq;
mod prompts;

pub use client::{build_provider, LlmProvider};
pub use groq::GroqClient;
pub use prompts::build_summary_prompt;
