use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::ProviderError;

/// JSON-RPC 2.0 request envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: String,
    pub method: String,
    pub params: Value,
}

impl JsonRpcRequest {
    pub fn new(method: &str, params: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id: uuid::Uuid::new_v4().to_string(),
            method: method.to_string(),
            params,
        }
    }
}

/// Error object inside a JSON-RPC response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
}

/// JSON-RPC 2.0 response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub result: Option<Value>,
    pub error: Option<JsonRpcError>,
}

/// Error type for RPC operations
#[derive(Debug, Clone)]
pub enum ApiError {
    /// 401 Unauthorized
    Unauthorized(String),
    /// 403 Forbidden
    Forbidden(String),
    /// 429 Too Many Requests
    RateLimited { retry_after: Option<u64> },
    /// 5xx Server Error
    ServerError(u16, String),
    /// Other HTTP errors
    HttpError(u16, String),
    /// Error object returned by the node
    Rpc { code: i64, message: String },
    /// Network/request error
    RequestError(String),
    /// Deserialization error
    DeserializationError(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            ApiError::RateLimited { retry_after } => match retry_after {
                Some(secs) => write!(f, "Rate Limited. Retry after {} s", secs),
                None => write!(f, "Rate Limited"),
            },
            ApiError::ServerError(code, msg) => write!(f, "Server Error ({}): {}", code, msg),
            ApiError::HttpError(code, msg) => write!(f, "HTTP Error ({}): {}", code, msg),
            ApiError::Rpc { code, message } => write!(f, "RPC error {}: {}", code, message),
            ApiError::RequestError(msg) => write!(f, "Request Error: {}", msg),
            ApiError::DeserializationError(msg) => write!(f, "Deserialization Error: {}", msg),
        }
    }
}

impl From<ApiError> for ProviderError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized(msg) | ApiError::Forbidden(msg) => ProviderError::Unauthorized(msg),
            ApiError::DeserializationError(msg) => ProviderError::InvalidResponse(msg),
            other => ProviderError::Request(other.to_string()),
        }
    }
}
