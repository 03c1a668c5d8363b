//! Thin client for the OpenAI Chat Completions endpoint.
//!
//! Owns credentials and endpoint configuration; translates provider failures
//! into typed [`ToolError`] values. No retries and no caching.

use anyhow::{bail, Result};
use tracing::debug;

use crate::error::ToolError;
use crate::models::chat::{
    ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse, ChatMessage,
};
use crate::util::build_http_client_from_env;
use crate::validation::ChatToolRequest;

/// Default OpenAI API endpoint, overridable via OPENAI_BASE_URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Text substituted when the provider returns a choice with no content.
pub const NO_RESPONSE_TEXT: &str = "No response generated";

/// Provider configuration, read once at startup and passed by ownership into
/// the dispatcher. No ambient singleton.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub organization: Option<String>,
}

impl OpenAiConfig {
    /// Read configuration from the process environment.
    ///
    /// Fails when OPENAI_API_KEY is absent or blank; the caller is expected
    /// to exit non-zero before any transport is established.
    pub fn from_env() -> Result<Self> {
        let api_key = match std::env::var("OPENAI_API_KEY") {
            Ok(k) if !k.trim().is_empty() => k,
            _ => bail!("OPENAI_API_KEY environment variable is required"),
        };

        let base_url = std::env::var("OPENAI_BASE_URL")
            .ok()
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let organization = std::env::var("OPENAI_ORGANIZATION")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(Self {
            api_key,
            base_url,
            organization,
        })
    }
}

/// Client for the chat-completion call. One instance serves the whole process.
pub struct OpenAiClient {
    http: reqwest::Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            http: build_http_client_from_env(),
            config,
        }
    }

    /// Issue one chat-completion call for an already-validated request and
    /// return the reply text of the first choice.
    ///
    /// Only the first choice is consulted even when the provider returns
    /// several; this mirrors the documented behavior of the tool.
    pub async fn chat(&self, req: &ChatToolRequest) -> Result<String, ToolError> {
        let payload = ChatCompletionRequest {
            model: req.model.clone(),
            messages: vec![ChatMessage::user(req.message.clone())],
            max_tokens: Some(req.max_tokens),
            temperature: Some(req.temperature),
        };

        let url = format!("{}/chat/completions", self.config.base_url);
        debug!(model = %req.model, "sending chat completion request");

        let mut request = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&payload);
        if let Some(org) = &self.config.organization {
            request = request.header("OpenAI-Organization", org);
        }

        let response = match request.send().await {
            Ok(r) => r,
            Err(e) => return Err(translate_status(e.status().map(|s| s.as_u16()), Some(&e.to_string()))),
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let provider_message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|b| b.error.message)
                .or_else(|| {
                    let trimmed = body.trim();
                    (!trimmed.is_empty()).then(|| trimmed.to_string())
                });
            return Err(translate_status(
                Some(status.as_u16()),
                provider_message.as_deref(),
            ));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| translate_status(None, Some(&e.to_string())))?;

        Ok(first_choice_text(&completion))
    }
}

/// Extract the first choice's message content, or the fixed placeholder when
/// the provider returned no usable content.
pub fn first_choice_text(completion: &ChatCompletionResponse) -> String {
    completion
        .choices
        .first()
        .and_then(|c| c.message.content.clone())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| NO_RESPONSE_TEXT.to_string())
}

/// Map a provider failure onto the tool's error taxonomy.
pub fn translate_status(status: Option<u16>, provider_message: Option<&str>) -> ToolError {
    match status {
        Some(401) => ToolError::InvalidParams(
            "Invalid OpenAI API key. Please check your OPENAI_API_KEY environment variable."
                .to_string(),
        ),
        Some(429) => ToolError::InternalError(
            "OpenAI API rate limit exceeded. Please try again later.".to_string(),
        ),
        Some(400) => ToolError::InvalidParams(format!(
            "Invalid request to OpenAI API: {}",
            provider_message.unwrap_or("Unknown error occurred")
        )),
        _ => ToolError::InternalError(format!(
            "OpenAI API error: {}",
            provider_message.unwrap_or("Unknown error occurred")
        )),
    }
}
