#![forbid(unsafe_code)]
#![doc = r#"
GPT5 MCP Server

A minimal MCP (Model Context Protocol) server over stdio that exposes a single
tool, `gpt5_chat`, backed by the OpenAI Chat Completions API.

Crate highlights
- `tools/list` returns the one tool descriptor; `tools/call` validates the
  arguments and proxies them to OpenAI as a single user-role message.
- Typed protocol errors: invalid parameters, unknown tool/method, and provider
  failures map onto stable JSON-RPC error codes.
- No conversation state, no streaming, no retries; one call in, one reply out.

Modules
- `models`: Data structures for the Chat Completions wire format.
- `validation`: Argument checks with fixed numeric/string bounds.
- `registry`: Static descriptor of the exposed tool.
- `openai`: Provider client, configuration, and error translation.
- `mcp`: JSON-RPC types, dispatcher, and the stdio serve loop.
- `util`: Shared helpers (tracing, env, HTTP client construction).
"#]

pub mod error;
pub mod mcp;
pub mod models;
pub mod openai;
pub mod registry;
pub mod util;
pub mod validation;

// Re-export the types most callers need for ergonomic library use.
pub use crate::error::ToolError;
pub use crate::mcp::{JsonRpcRequest, JsonRpcResponse, McpServer};
pub use crate::openai::{OpenAiClient, OpenAiConfig};
pub use crate::validation::{validate_arguments, ChatToolRequest};

// Re-export model namespaces for convenience (downstream users can do
// `use gpt5_mcp_server::chat`).
pub use crate::models::chat;
