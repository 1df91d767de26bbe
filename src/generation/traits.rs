use async_trait::async_trait;

use crate::models::{CallerIdentity, GenerationRequest, GenerationResult};

/// Anything that can turn one request into one result without failing outward.
#[async_trait]
pub trait EmojiGenerator: Send + Sync {
    async fn generate(&self, request: GenerationRequest, caller: &CallerIdentity)
        -> GenerationResult;
}
