pub mod batch;
pub mod client;
pub mod enhancer;
pub mod traits;
pub mod validator;

#[cfg(test)]
pub mod test_utils;

use crate::{
    config::GenerationConfig,
    error::{EmojiError, Result},
    models::{
        is_known_category, CallerIdentity, EmojiSize, EmojiStyle, GenerationRequest,
        GenerationResult, ValidationOutcome, CATEGORIES,
    },
};
use async_trait::async_trait;
use std::future::Future;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

pub use batch::BatchCoordinator;
pub use client::GenerationClient;
pub use traits::EmojiGenerator;
pub use validator::PromptValidator;

/// Entry point for emoji generation.
///
/// Clones share the same caller identity slot.
#[derive(Clone)]
pub struct EmojiService {
    validator: PromptValidator,
    client: GenerationClient,
    batch: BatchCoordinator,
    caller: Arc<RwLock<CallerIdentity>>,
}

impl EmojiService {
    pub fn new(config: GenerationConfig) -> Result<Self> {
        let validator = PromptValidator::new(config.validator.clone())?;
        let client = GenerationClient::new(&config)?;
        let batch = BatchCoordinator::new(config.window_size_or_default())?;

        log::info!(
            "Emoji service ready (endpoint: {}, batch window: {})",
            client.endpoint(),
            batch.window_size()
        );

        Ok(Self {
            validator,
            client,
            batch,
            caller: Arc::new(RwLock::new(CallerIdentity::anonymous())),
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(GenerationConfig::from_env())
    }

    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }

    /// Replaces the default identity used by calls that start after this one.
    pub fn set_caller_identity(&self, caller: impl Into<CallerIdentity>) {
        let caller = caller.into();
        log::debug!("Caller identity set to {}", caller);
        *self.caller.write().unwrap_or_else(|e| e.into_inner()) = caller;
    }

    pub fn caller_identity(&self) -> CallerIdentity {
        self.caller
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn validate_prompt(&self, prompt: &str) -> ValidationOutcome {
        self.validator.validate(prompt)
    }

    /// Generates one emoji as the current default caller.
    ///
    /// The identity is read when this is called, not when the returned future
    /// is first polled, so a later `set_caller_identity` never leaks into it.
    pub fn generate_emoji(
        &self,
        request: GenerationRequest,
    ) -> impl Future<Output = GenerationResult> + Send + '_ {
        let caller = self.caller_identity();
        async move { self.generate_emoji_as(request, &caller).await }
    }

    pub async fn generate_emoji_as(
        &self,
        request: GenerationRequest,
        caller: &CallerIdentity,
    ) -> GenerationResult {
        let request_id = Uuid::new_v4();

        if let Err(e) = self.check_request(&request) {
            log::warn!("[req:{}] Rejected before dispatch: {}", request_id, e);
            return GenerationResult::from(e);
        }

        let enhanced = enhancer::enhance(&request);
        log::info!(
            "[req:{}] Generating {} {} emoji for {}",
            request_id,
            request.style(),
            request.category(),
            caller
        );
        log::debug!("[req:{}] Enhanced prompt:\n{}", request_id, enhanced);

        self.client.send(&enhanced, &request, caller).await
    }

    /// Batch counterpart of [`EmojiService::generate_emoji`]; the identity is
    /// captured at call time as well.
    pub fn generate_batch(
        &self,
        requests: Vec<GenerationRequest>,
    ) -> impl Future<Output = Vec<GenerationResult>> + Send + '_ {
        let caller = self.caller_identity();
        async move { self.generate_batch_as(requests, &caller).await }
    }

    pub async fn generate_batch_as(
        &self,
        requests: Vec<GenerationRequest>,
        caller: &CallerIdentity,
    ) -> Vec<GenerationResult> {
        self.batch.run_batch(self, requests, caller).await
    }

    pub fn available_styles() -> &'static [EmojiStyle] {
        &EmojiStyle::ALL
    }

    pub fn available_categories() -> &'static [&'static str] {
        &CATEGORIES
    }

    pub fn available_sizes() -> &'static [EmojiSize] {
        &EmojiSize::ALL
    }

    fn check_request(&self, request: &GenerationRequest) -> Result<()> {
        if request.category().trim().is_empty() {
            return Err(EmojiError::MissingParameter("category"));
        }

        let outcome = self.validator.validate(request.prompt());
        if let Some(reason) = outcome.reason {
            return Err(EmojiError::Validation(reason));
        }

        if !is_known_category(request.category()) {
            log::warn!(
                "Unknown category '{}', using generic emoji phrasing",
                request.category()
            );
        }

        Ok(())
    }
}

#[async_trait]
impl EmojiGenerator for EmojiService {
    async fn generate(
        &self,
        request: GenerationRequest,
        caller: &CallerIdentity,
    ) -> GenerationResult {
        self.generate_emoji_as(request, caller).await
    }
}
