use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, RETRY_AFTER};
use reqwest::Client as HttpClient;
use serde_json::{json, Value};
use tracing::{debug, warn};

use super::models::{ApiError, JsonRpcRequest, JsonRpcResponse};
use crate::api::{ConnectResponse, ProviderError, ProviderRequest, WalletProvider};

/// Watch-only wallet backed by a Solana JSON-RPC node.
///
/// "Connecting" authorizes the configured public key; requests are translated
/// into the matching RPC methods for that key.
pub struct RpcWalletProvider {
    http_client: HttpClient,
    rpc_url: String,
    account: Option<String>,
    connected: AtomicBool,
}

impl RpcWalletProvider {
    pub const DEFAULT_RPC_URL: &'static str = "https://api.mainnet-beta.solana.com";

    pub fn new(rpc_url: String, account: Option<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            rpc_url,
            account,
            connected: AtomicBool::new(false),
        }
    }

    /// Create default headers for JSON-RPC calls
    fn create_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    /// Parse error response based on HTTP status code
    async fn handle_error_response(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ApiError {
        let status_code = status.as_u16();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok());
        let body_text = response.text().await.unwrap_or_default();

        error_for_status(status_code, retry_after, body_text)
    }

    /// POST a JSON-RPC call and return its `result`
    async fn call(&self, method: &str, params: Value) -> Result<Value, ApiError> {
        let body = JsonRpcRequest::new(method, params);
        debug!("RPC call {} (id {})", method, body.id);

        let response = self
            .http_client
            .post(&self.rpc_url)
            .headers(Self::create_headers())
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        let response = response
            .json::<JsonRpcResponse>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))?;

        into_result(response)
    }
}

/// Map a non-success HTTP status to an `ApiError`
pub fn error_for_status(status_code: u16, retry_after: Option<u64>, body_text: String) -> ApiError {
    match status_code {
        401 => ApiError::Unauthorized(body_text),
        403 => ApiError::Forbidden(body_text),
        429 => {
            warn!("Rate limited by RPC node, retry after {:?} s", retry_after);
            ApiError::RateLimited { retry_after }
        }
        500..=599 => {
            warn!("Server error {}: {}", status_code, body_text);
            ApiError::ServerError(status_code, body_text)
        }
        _ => ApiError::HttpError(status_code, body_text),
    }
}

/// Unwrap a JSON-RPC envelope into its `result`, or the node's error
pub fn into_result(response: JsonRpcResponse) -> Result<Value, ApiError> {
    if let Some(error) = response.error {
        return Err(ApiError::Rpc {
            code: error.code,
            message: error.message,
        });
    }

    response
        .result
        .ok_or_else(|| ApiError::DeserializationError("Response has no result".to_string()))
}

/// Map a provider request onto the RPC method and positional params for `account`
pub fn translate_request(
    request: &ProviderRequest,
    account: &str,
) -> Result<(&'static str, Value), ProviderError> {
    let commitment = request
        .params
        .get("commitment")
        .cloned()
        .unwrap_or(Value::Null);

    match request.method.as_str() {
        "getBalance" => Ok(("getBalance", json!([account, { "commitment": commitment }]))),
        "getTransactions" => {
            let limit = request.params.get("limit").cloned().unwrap_or(Value::Null);
            Ok((
                "getSignaturesForAddress",
                json!([account, { "limit": limit, "commitment": commitment }]),
            ))
        }
        other => Err(ProviderError::UnsupportedMethod(other.to_string())),
    }
}

#[async_trait]
impl WalletProvider for RpcWalletProvider {
    fn is_phantom(&self) -> bool {
        true
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    fn public_key(&self) -> Option<String> {
        if self.is_connected() {
            self.account.clone()
        } else {
            None
        }
    }

    async fn connect(&self) -> Result<ConnectResponse, ProviderError> {
        let account = self
            .account
            .clone()
            .ok_or_else(|| ProviderError::UserRejected("No account configured".to_string()))?;
        self.connected.store(true, Ordering::SeqCst);
        Ok(ConnectResponse { public_key: account })
    }

    async fn disconnect(&self) -> Result<(), ProviderError> {
        self.connected.store(false, Ordering::SeqCst);
        Ok(())
    }

    async fn request(&self, request: ProviderRequest) -> Result<Value, ProviderError> {
        let account = match (&self.account, self.is_connected()) {
            (Some(account), true) => account,
            _ => return Err(ProviderError::Unauthorized("Wallet is not connected".to_string())),
        };

        let (method, params) = translate_request(&request, account)?;
        Ok(self.call(method, params).await?)
    }
}
