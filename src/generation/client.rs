use reqwest::Client;

use crate::{
    config::GenerationConfig,
    error::{EmojiError, Result},
    logger,
    models::{CallerIdentity, GenerationRequest, GenerationResult, ProxyRequest, ProxyResponse},
};

const MAX_REASON_CHARS: usize = 200;

/// Talks to the remote generation proxy. One `send` is one POST.
#[derive(Clone)]
pub struct GenerationClient {
    client: Client,
    endpoint: String,
}

impl GenerationClient {
    pub fn new(config: &GenerationConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| EmojiError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint_or_default().to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends the request and normalizes every outcome, including transport
    /// faults, into a [`GenerationResult`].
    pub async fn send(
        &self,
        enhanced_prompt: &str,
        request: &GenerationRequest,
        caller: &CallerIdentity,
    ) -> GenerationResult {
        let timer = logger::timer("emoji generation");

        match self.try_send(enhanced_prompt, request, caller).await {
            Ok(result) => {
                log::info!(
                    "Generated {} emoji in {}ms (proxy reported {:?}ms)",
                    request.style(),
                    timer.elapsed().as_millis(),
                    result.generation_time_ms()
                );
                result
            }
            Err(e) => {
                log::error!("Emoji generation failed: {}", e);
                GenerationResult::from(e)
            }
        }
    }

    async fn try_send(
        &self,
        enhanced_prompt: &str,
        request: &GenerationRequest,
        caller: &CallerIdentity,
    ) -> Result<GenerationResult> {
        let payload = ProxyRequest::new(request, enhanced_prompt, caller);

        log::debug!("Posting generation request to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::warn!("Proxy service returned {}: {}", status, error_text);
            let reason = match status.canonical_reason() {
                Some(reason) => reason.to_string(),
                None => error_text.trim().chars().take(MAX_REASON_CHARS).collect(),
            };
            return Err(EmojiError::HttpStatus {
                status: status.as_u16(),
                reason,
            });
        }

        let body = response.text().await?;
        let proxy_response: ProxyResponse = serde_json::from_str(&body)?;

        proxy_response.into_result()
    }
}
