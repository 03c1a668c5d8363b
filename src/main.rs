use gpt5_mcp_server::util::init_tracing;
use gpt5_mcp_server::{McpServer, OpenAiClient, OpenAiConfig};

#[tokio::main]
async fn main() {
    init_tracing();

    // Fail fast before any transport is established.
    let config = match OpenAiConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let server = McpServer::new(OpenAiClient::new(config));
    tracing::info!("GPT-5 MCP Server started");

    if let Err(e) = server.run_stdio_server().await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}
