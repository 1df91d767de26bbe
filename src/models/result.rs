use serde::{Deserialize, Serialize};

use crate::error::{EmojiError, FailureKind};

/// Normalized outcome of one generation call.
///
/// Only constructed through [`GenerationResult::succeeded`] and
/// [`GenerationResult::failed`]: a successful result always carries an image
/// URL and no error, a failed one an error and no image URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_time_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    failure_kind: Option<FailureKind>,
}

impl GenerationResult {
    pub fn succeeded(image_url: impl Into<String>, generation_time_ms: Option<u64>) -> Self {
        Self {
            success: true,
            image_url: Some(image_url.into()),
            error: None,
            generation_time_ms,
            failure_kind: None,
        }
    }

    pub fn failed(kind: FailureKind, error: impl Into<String>) -> Self {
        Self {
            success: false,
            image_url: None,
            error: Some(error.into()),
            generation_time_ms: None,
            failure_kind: Some(kind),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn generation_time_ms(&self) -> Option<u64> {
        self.generation_time_ms
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        self.failure_kind
    }
}

impl From<EmojiError> for GenerationResult {
    fn from(err: EmojiError) -> Self {
        GenerationResult::failed(err.kind(), err.to_string())
    }
}

/// Response body returned by the generation proxy.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    #[serde(default)]
    pub success: bool,
    pub image_url: Option<String>,
    pub generation_time: Option<f64>,
    pub error: Option<String>,
}

impl ProxyResponse {
    pub fn into_result(self) -> Result<GenerationResult, EmojiError> {
        if !self.success {
            let message = self
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| "Unknown error from proxy service".to_string());
            return Err(EmojiError::Declined(message));
        }

        let image_url = self
            .image_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                EmojiError::Declined("Proxy reported success without an image URL".to_string())
            })?;

        let generation_time_ms = self
            .generation_time
            .filter(|t| t.is_finite())
            .map(|t| t.max(0.0).round() as u64);

        Ok(GenerationResult::succeeded(image_url, generation_time_ms))
    }
}
