//! JSON-RPC 2.0 stdio server implementing the MCP tool surface.
//!
//! Two request shapes matter: `tools/list` and `tools/call`. Framing is
//! newline-delimited JSON on stdin/stdout; responses are correlated to
//! requests by id, not by arrival order. All diagnostics go to stderr via
//! `tracing` so stdout stays a clean protocol channel.

use std::sync::Arc;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::error::ToolError;
use crate::openai::OpenAiClient;
use crate::registry::{tool_descriptors, CHAT_TOOL_NAME};
use crate::validation::validate_arguments;

/// MCP protocol revision this server speaks.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Inbound JSON-RPC request or notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// Outbound JSON-RPC response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcResponse {
    fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    fn failure(id: Option<Value>, err: &ToolError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code: err.code(),
                message: err.message().to_string(),
                data: None,
            }),
        }
    }
}

/// Dispatcher for the two reachable request types. No state persists between
/// requests; the only long-lived member is the provider client.
pub struct McpServer {
    client: OpenAiClient,
}

impl McpServer {
    pub fn new(client: OpenAiClient) -> Self {
        Self { client }
    }

    /// Route one inbound message. Returns `None` for notifications, which
    /// receive no response by JSON-RPC convention.
    pub async fn handle_request(&self, req: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if req.id.is_none() {
            // Notification. "notifications/initialized" is expected; anything
            // else is ignorable without a response either way.
            debug!(method = %req.method, "notification received");
            return None;
        }

        let id = req.id.clone();
        match req.method.as_str() {
            "initialize" => Some(JsonRpcResponse::success(
                id,
                json!({
                    "protocolVersion": PROTOCOL_VERSION,
                    "capabilities": { "tools": {} },
                    "serverInfo": {
                        "name": "gpt5-mcp-server",
                        "version": env!("CARGO_PKG_VERSION")
                    }
                }),
            )),

            "tools/list" => Some(JsonRpcResponse::success(
                id,
                json!({ "tools": tool_descriptors() }),
            )),

            "tools/call" => match self.call_tool(req.params.as_ref()).await {
                Ok(result) => Some(JsonRpcResponse::success(id, result)),
                Err(e) => Some(JsonRpcResponse::failure(id, &e)),
            },

            other => Some(JsonRpcResponse::failure(
                id,
                &ToolError::MethodNotFound(format!("Method not found: {other}")),
            )),
        }
    }

    /// Handle `tools/call`: name lookup, validation, then the provider call.
    /// Validation failures short-circuit before any HTTP traffic.
    async fn call_tool(&self, params: Option<&Value>) -> Result<Value, ToolError> {
        let name_value = params.and_then(|p| p.get("name"));
        if name_value.and_then(Value::as_str) != Some(CHAT_TOOL_NAME) {
            // Keep the message readable even for a missing or non-string name.
            let shown = match name_value {
                Some(Value::String(s)) => s.clone(),
                Some(v) => v.to_string(),
                None => "undefined".to_string(),
            };
            return Err(ToolError::MethodNotFound(format!("Tool {shown} not found")));
        }

        let arguments = params.and_then(|p| p.get("arguments"));
        let request = validate_arguments(arguments)?;
        let text = self.client.chat(&request).await?;

        Ok(json!({
            "content": [
                { "type": "text", "text": text }
            ]
        }))
    }

    /// Serve newline-delimited JSON-RPC over stdin/stdout until stdin closes.
    ///
    /// Each request is handled on its own task, so a pending provider call
    /// does not block later messages; the shared stdout writer serializes
    /// response lines. Responses may therefore complete out of request order,
    /// which the id correlation permits.
    pub async fn run_stdio_server(self) -> Result<()> {
        let server = Arc::new(self);
        let stdout = Arc::new(Mutex::new(io::stdout()));
        let mut reader = BufReader::new(io::stdin());
        let mut line = String::new();

        loop {
            line.clear();
            let n = reader.read_line(&mut line).await?;
            if n == 0 {
                break; // EOF
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let request: JsonRpcRequest = match serde_json::from_str(trimmed) {
                Ok(r) => r,
                Err(e) => {
                    warn!("skipping unparseable message: {e}");
                    continue;
                }
            };

            let server = Arc::clone(&server);
            let stdout = Arc::clone(&stdout);
            tokio::spawn(async move {
                if let Some(response) = server.handle_request(request).await {
                    if let Err(e) = write_response(&stdout, &response).await {
                        warn!("failed to write response: {e}");
                    }
                }
            });
        }

        debug!("stdin closed; shutting down");
        Ok(())
    }
}

async fn write_response(stdout: &Mutex<Stdout>, response: &JsonRpcResponse) -> Result<()> {
    let payload = serde_json::to_string(response)?;
    let mut out = stdout.lock().await;
    out.write_all(format!("{payload}\n").as_bytes()).await?;
    out.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_parses_with_and_without_id() {
        let req: JsonRpcRequest =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":7,"method":"tools/list"}"#).unwrap();
        assert_eq!(req.id, Some(json!(7)));
        assert_eq!(req.method, "tools/list");
        assert!(req.params.is_none());

        // Notifications carry no id. String ids are also legal JSON-RPC.
        let note: JsonRpcRequest =
            serde_json::from_str(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
                .unwrap();
        assert!(note.id.is_none());

        let req: JsonRpcRequest =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":"abc","method":"initialize"}"#).unwrap();
        assert_eq!(req.id, Some(json!("abc")));
    }

    #[test]
    fn success_response_omits_error_field() {
        let resp = JsonRpcResponse::success(Some(json!(1)), json!({"ok": true}));
        let text = serde_json::to_string(&resp).unwrap();
        assert!(text.contains(r#""result":{"ok":true}"#));
        assert!(!text.contains("error"));
    }

    #[test]
    fn failure_response_carries_code_and_message() {
        let resp = JsonRpcResponse::failure(
            Some(json!(2)),
            &ToolError::MethodNotFound("Tool weather not found".into()),
        );
        let v = serde_json::to_value(&resp).unwrap();
        assert_eq!(v["error"]["code"], -32601);
        assert_eq!(v["error"]["message"], "Tool weather not found");
        assert!(v.get("result").is_none());
    }
}
