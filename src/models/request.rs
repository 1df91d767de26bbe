use serde::{Deserialize, Serialize};

use super::common::{CallerIdentity, EmojiSize, EmojiStyle};

/// A single emoji generation request as submitted by the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    prompt: String,
    style: EmojiStyle,
    category: String,
    #[serde(default)]
    size: EmojiSize,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, style: EmojiStyle, category: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            style,
            category: category.into(),
            size: EmojiSize::default(),
        }
    }

    pub fn with_size(mut self, size: EmojiSize) -> Self {
        self.size = size;
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn style(&self) -> EmojiStyle {
        self.style
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn size(&self) -> EmojiSize {
        self.size
    }
}

/// JSON body posted to the generation proxy.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest<'a> {
    pub prompt: &'a str,
    pub style: EmojiStyle,
    pub category: &'a str,
    pub size: EmojiSize,
    pub user_id: &'a CallerIdentity,
    pub enhanced_prompt: &'a str,
}

impl<'a> ProxyRequest<'a> {
    pub fn new(
        request: &'a GenerationRequest,
        enhanced_prompt: &'a str,
        caller: &'a CallerIdentity,
    ) -> Self {
        Self {
            prompt: request.prompt().trim(),
            style: request.style(),
            category: request.category(),
            size: request.size(),
            user_id: caller,
            enhanced_prompt,
        }
    }
}
