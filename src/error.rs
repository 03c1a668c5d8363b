use thiserror::Error;

/// JSON-RPC error code for a method/tool the server does not expose.
pub const METHOD_NOT_FOUND: i32 = -32601;
/// JSON-RPC error code for arguments that violate a documented constraint.
pub const INVALID_PARAMS: i32 = -32602;
/// JSON-RPC error code for provider or transport failures outside caller control.
pub const INTERNAL_ERROR: i32 = -32603;

/// Typed failure surfaced to the MCP client as a protocol-level error.
///
/// Never retried locally; the dispatcher maps each variant onto the JSON-RPC
/// error envelope with the matching code.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToolError {
    #[error("{0}")]
    InvalidParams(String),
    #[error("{0}")]
    MethodNotFound(String),
    #[error("{0}")]
    InternalError(String),
}

impl ToolError {
    /// The JSON-RPC error code for this variant.
    pub fn code(&self) -> i32 {
        match self {
            ToolError::InvalidParams(_) => INVALID_PARAMS,
            ToolError::MethodNotFound(_) => METHOD_NOT_FOUND,
            ToolError::InternalError(_) => INTERNAL_ERROR,
        }
    }

    /// The human-readable message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            ToolError::InvalidParams(m)
            | ToolError::MethodNotFound(m)
            | ToolError::InternalError(m) => m,
        }
    }
}
