use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::RejectReason;

#[derive(Debug, Error)]
pub enum EmojiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("{}", .0.describe())]
    Validation(RejectReason),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Proxy service error: {}", status_line(.status, .reason))]
    HttpStatus { status: u16, reason: String },

    #[error("{0}")]
    Declined(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Image decode error: {0}")]
    ImageDecode(String),
}

fn status_line(status: &u16, reason: &str) -> String {
    if reason.is_empty() {
        status.to_string()
    } else {
        format!("{} {}", status, reason)
    }
}

/// Coarse failure classes surfaced to callers alongside the error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Rejected before any network call; user-correctable.
    Validation,
    /// Network, timeout, DNS or parse fault.
    Transport,
    /// The proxy answered but declined to generate.
    RemoteService,
    /// Local setup problem: bad endpoint, pattern or window size.
    Config,
}

impl EmojiError {
    pub fn kind(&self) -> FailureKind {
        match self {
            EmojiError::MissingParameter(_) | EmojiError::Validation(_) => FailureKind::Validation,
            EmojiError::HttpStatus { .. } | EmojiError::Declined(_) => FailureKind::RemoteService,
            EmojiError::Config(_) => FailureKind::Config,
            EmojiError::Transport(_)
            | EmojiError::Serialization(_)
            | EmojiError::ImageDecode(_) => FailureKind::Transport,
        }
    }
}

impl From<reqwest::Error> for EmojiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            EmojiError::Transport(format!("request timed out: {}", err))
        } else if err.is_decode() {
            EmojiError::Serialization(err.to_string())
        } else {
            EmojiError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for EmojiError {
    fn from(err: serde_json::Error) -> Self {
        EmojiError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EmojiError>;
