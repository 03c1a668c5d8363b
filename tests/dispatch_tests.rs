//! Dispatcher tests exercising the JSON-RPC surface without any network
//! traffic: every case here either answers from the registry or fails before
//! the provider client would be contacted.

use gpt5_mcp_server::{JsonRpcRequest, McpServer, OpenAiClient, OpenAiConfig};
use serde_json::{json, Value};

fn test_server() -> McpServer {
    // The base URL points at a reserved TLD; no test below may reach it.
    let config = OpenAiConfig {
        api_key: "sk-test".into(),
        base_url: "http://openai.invalid/v1".into(),
        organization: None,
    };
    McpServer::new(OpenAiClient::new(config))
}

fn request(id: u64, method: &str, params: Value) -> JsonRpcRequest {
    JsonRpcRequest {
        id: Some(json!(id)),
        method: method.into(),
        params: Some(params),
    }
}

#[tokio::test]
async fn initialize_reports_tool_capability() {
    let resp = test_server()
        .handle_request(request(1, "initialize", json!({})))
        .await
        .unwrap();

    assert_eq!(resp.jsonrpc, "2.0");
    assert_eq!(resp.id, Some(json!(1)));
    let result = resp.result.unwrap();
    assert_eq!(result["protocolVersion"], "2024-11-05");
    assert_eq!(result["capabilities"]["tools"], json!({}));
    assert_eq!(result["serverInfo"]["name"], "gpt5-mcp-server");
}

#[tokio::test]
async fn list_tools_returns_the_single_descriptor() {
    let resp = test_server()
        .handle_request(request(2, "tools/list", json!({})))
        .await
        .unwrap();

    let tools = resp.result.unwrap()["tools"].clone();
    let tools = tools.as_array().unwrap().clone();
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0]["name"], "gpt5_chat");
    assert_eq!(tools[0]["inputSchema"]["required"], json!(["message"]));
    assert_eq!(
        tools[0]["inputSchema"]["properties"]["model"]["default"],
        "gpt-5"
    );
    assert_eq!(
        tools[0]["inputSchema"]["properties"]["max_tokens"]["default"],
        4096
    );
    assert_eq!(
        tools[0]["inputSchema"]["properties"]["temperature"]["default"],
        0.7
    );
}

#[tokio::test]
async fn unknown_tool_name_is_method_not_found() {
    let resp = test_server()
        .handle_request(request(
            3,
            "tools/call",
            json!({"name": "weather", "arguments": {"message": "hi"}}),
        ))
        .await
        .unwrap();

    let err = resp.error.unwrap();
    assert_eq!(err.code, -32601);
    assert_eq!(err.message, "Tool weather not found");
    assert!(resp.result.is_none());
}

#[tokio::test]
async fn blank_message_fails_validation_before_any_provider_call() {
    let resp = test_server()
        .handle_request(request(
            4,
            "tools/call",
            json!({"name": "gpt5_chat", "arguments": {"message": "  "}}),
        ))
        .await
        .unwrap();

    let err = resp.error.unwrap();
    assert_eq!(err.code, -32602);
    assert_eq!(
        err.message,
        "Message parameter is required and must be a non-empty string"
    );
}

#[tokio::test]
async fn out_of_range_temperature_is_invalid_params() {
    let resp = test_server()
        .handle_request(request(
            5,
            "tools/call",
            json!({"name": "gpt5_chat", "arguments": {"message": "hi", "temperature": 3}}),
        ))
        .await
        .unwrap();

    let err = resp.error.unwrap();
    assert_eq!(err.code, -32602);
    assert_eq!(err.message, "Temperature must be a number between 0 and 2");
}

#[tokio::test]
async fn unknown_method_is_method_not_found() {
    let resp = test_server()
        .handle_request(request(6, "resources/list", json!({})))
        .await
        .unwrap();

    let err = resp.error.unwrap();
    assert_eq!(err.code, -32601);
    assert_eq!(err.message, "Method not found: resources/list");
}

#[tokio::test]
async fn notifications_get_no_response() {
    let note = JsonRpcRequest {
        id: None,
        method: "notifications/initialized".into(),
        params: Some(json!({})),
    };
    assert!(test_server().handle_request(note).await.is_none());
}

#[tokio::test]
async fn missing_tool_name_is_method_not_found() {
    let resp = test_server()
        .handle_request(request(7, "tools/call", json!({"arguments": {}})))
        .await
        .unwrap();

    let err = resp.error.unwrap();
    assert_eq!(err.code, -32601);
    assert_eq!(err.message, "Tool undefined not found");
}

#[tokio::test]
async fn non_string_tool_name_is_rendered_in_the_error() {
    let resp = test_server()
        .handle_request(request(
            8,
            "tools/call",
            json!({"name": 5, "arguments": {"message": "hi"}}),
        ))
        .await
        .unwrap();

    let err = resp.error.unwrap();
    assert_eq!(err.code, -32601);
    assert_eq!(err.message, "Tool 5 not found");
}
