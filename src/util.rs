use tracing_subscriber::{fmt, EnvFilter};

/// Initialize dotenv and structured tracing based on RUST_LOG.
///
/// Logs are written to stderr: stdout carries the JSON-RPC channel and must
/// stay clean. `.env` discovery never overwrites variables already set in the
/// process environment.
pub fn init_tracing() {
    let _ = dotenvy::dotenv();

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let subscriber = fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Build an HTTP client honoring proxy and timeout environment variables.
///
/// Environment:
/// - GPT5_MCP_NO_PROXY = 1|true|yes|on   -> disable all proxies
/// - GPT5_MCP_PROXY_URL = <url>          -> proxy for all schemes
/// - GPT5_MCP_HTTP_TIMEOUT_SECONDS       -> overall request timeout (u64)
pub fn build_http_client_from_env() -> reqwest::Client {
    let mut builder = reqwest::Client::builder();

    // Optional timeout
    if let Ok(secs) = std::env::var("GPT5_MCP_HTTP_TIMEOUT_SECONDS") {
        if let Ok(n) = secs.trim().parse::<u64>() {
            builder = builder.timeout(std::time::Duration::from_secs(n));
        }
    }

    // Proxy configuration
    let no_proxy = std::env::var("GPT5_MCP_NO_PROXY")
        .map(|v| v.trim().to_ascii_lowercase())
        .map(|v| v == "1" || v == "true" || v == "yes" || v == "on")
        .unwrap_or(false);

    if no_proxy {
        builder = builder.no_proxy();
    } else if let Ok(url) = std::env::var("GPT5_MCP_PROXY_URL") {
        let u = url.trim();
        if !u.is_empty() {
            if let Ok(p) = reqwest::Proxy::all(u) {
                builder = builder.proxy(p);
            }
        }
    }

    // User-Agent for observability
    builder = builder.user_agent(format!("gpt5-mcp-server/{}", env!("CARGO_PKG_VERSION")));

    builder.build().unwrap_or_else(|_| reqwest::Client::new())
}
