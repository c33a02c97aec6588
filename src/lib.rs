//! briefly - Fetch a web article and get a short AI summary of it
//!
//! The library exposes the fetch → summarize pipeline; the binary wraps it in
//! a line prompt and an interactive terminal form.

pub mod cli;
pub mod config;
pub mod fetch;
pub mod llm;
pub mod pipeline;
pub mod tui;

use thiserror::Error;

/// Coarse classification of a failure, for callers that branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Parse,
    Auth,
    Upstream,
    Config,
}

/// Main error type for briefly
///
/// The `Display` text keeps the old `Error ...` prefixes so that plain-text
/// consumers still see a recognisable message.
#[derive(Error, Debug)]
pub enum BrieflyError {
    #[error("Error fetching article: {0}")]
    Network(String),

    #[error("Error fetching article: {0}")]
    Parse(String),

    /// Transport failure talking to the completion API
    #[error("Error: {0}")]
    Request(String),

    #[error("Error: {0}")]
    Auth(String),

    #[error("Error: {0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl BrieflyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BrieflyError::Network(_) => ErrorKind::Network,
            BrieflyError::Parse(_) => ErrorKind::Parse,
            BrieflyError::Request(_) => ErrorKind::Network,
            BrieflyError::Auth(_) => ErrorKind::Auth,
            BrieflyError::Upstream(_) => ErrorKind::Upstream,
            BrieflyError::Config(_) => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, BrieflyError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "briefly";
