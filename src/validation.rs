//! Validation of raw `tools/call` arguments for the `gpt5_chat` tool.
//!
//! Every request that reaches the OpenAI client has already passed all four
//! checks here; the client performs no additional validation.

use serde_json::Value;

use crate::error::ToolError;

/// Default model used when the caller omits `model`.
pub const DEFAULT_MODEL: &str = "gpt-5";
/// Default response token budget when the caller omits `max_tokens`.
pub const DEFAULT_MAX_TOKENS: u32 = 4096;
/// Default sampling temperature when the caller omits `temperature`.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Inclusive bounds for `max_tokens`.
pub const MAX_TOKENS_RANGE: (u32, u32) = (1, 128_000);
/// Inclusive bounds for `temperature`.
pub const TEMPERATURE_RANGE: (f64, f64) = (0.0, 2.0);

/// A validated `gpt5_chat` invocation, ready to send to the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatToolRequest {
    /// The caller's message, trimmed of surrounding whitespace.
    pub message: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

/// Check raw call arguments against the tool's constraints, in order,
/// short-circuiting on the first failure.
pub fn validate_arguments(args: Option<&Value>) -> Result<ChatToolRequest, ToolError> {
    let empty = Value::Null;
    let args = args.unwrap_or(&empty);

    let message = match args.get("message").and_then(Value::as_str) {
        Some(s) if !s.trim().is_empty() => s.trim().to_string(),
        _ => {
            return Err(ToolError::InvalidParams(
                "Message parameter is required and must be a non-empty string".to_string(),
            ))
        }
    };

    // Defaults apply only to absent parameters; an explicit null is a type
    // error like any other non-conforming value.
    let model = match args.get("model") {
        None => DEFAULT_MODEL.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(_) => {
            return Err(ToolError::InvalidParams(
                "Model parameter must be a string".to_string(),
            ))
        }
    };

    let max_tokens = match args.get("max_tokens") {
        None => DEFAULT_MAX_TOKENS,
        Some(v) => match v.as_f64() {
            Some(n) if (MAX_TOKENS_RANGE.0 as f64..=MAX_TOKENS_RANGE.1 as f64).contains(&n) => {
                n as u32
            }
            _ => {
                return Err(ToolError::InvalidParams(
                    "max_tokens must be a number between 1 and 128000".to_string(),
                ))
            }
        },
    };

    let temperature = match args.get("temperature") {
        None => DEFAULT_TEMPERATURE,
        Some(v) => match v.as_f64() {
            Some(t) if (TEMPERATURE_RANGE.0..=TEMPERATURE_RANGE.1).contains(&t) => t,
            _ => {
                return Err(ToolError::InvalidParams(
                    "Temperature must be a number between 0 and 2".to_string(),
                ))
            }
        },
    };

    Ok(ChatToolRequest {
        message,
        model,
        max_tokens,
        temperature,
    })
}
