//! Static description of the single tool this server exposes.

use serde_json::{json, Value};

use crate::validation::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE};

/// Name of the one exposed tool.
pub const CHAT_TOOL_NAME: &str = "gpt5_chat";

/// The `tools/list` result: a single descriptor whose schema mirrors the
/// validator's constraints, so clients can pre-validate before calling.
pub fn tool_descriptors() -> Value {
    json!([
        {
            "name": CHAT_TOOL_NAME,
            "description": "Chat with GPT-5 for Q&A and general assistance",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "message": {
                        "type": "string",
                        "description": "The message or question to send to GPT-5"
                    },
                    "model": {
                        "type": "string",
                        "description": "The GPT model to use (default: gpt-5)",
                        "default": DEFAULT_MODEL
                    },
                    "max_tokens": {
                        "type": "number",
                        "description": "Maximum tokens in response (default: 4096)",
                        "default": DEFAULT_MAX_TOKENS
                    },
                    "temperature": {
                        "type": "number",
                        "description": "Sampling temperature (0-2, default: 0.7)",
                        "minimum": 0,
                        "maximum": 2,
                        "default": DEFAULT_TEMPERATURE
                    }
                },
                "required": ["message"]
            }
        }
    ])
}
