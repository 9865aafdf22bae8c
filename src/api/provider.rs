//! Wallet provider capability
//!
//! The popup never talks to a chain itself. Everything goes through a
//! `WalletProvider`: connect, disconnect and a generic `request` call, plus a few
//! read-only flags the provider exposes without prompting the user.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors reported by a wallet provider
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    #[error("User rejected the request: {0}")]
    UserRejected(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// The account has to be connected again before any further request
    pub fn requires_reauth(&self) -> bool {
        matches!(self, ProviderError::Unauthorized(_))
    }
}

/// Generic provider call, `{method, params}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderRequest {
    pub method: String,
    pub params: Value,
}

impl ProviderRequest {
    pub fn new(method: impl Into<String>, params: Value) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }
}

/// Response of a successful connect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectResponse {
    pub public_key: String,
}

#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Identity marker checked by the locator
    fn is_phantom(&self) -> bool;

    fn is_connected(&self) -> bool;

    /// Public key of the authorized account, if the provider has one
    fn public_key(&self) -> Option<String>;

    async fn connect(&self) -> Result<ConnectResponse, ProviderError>;

    async fn disconnect(&self) -> Result<(), ProviderError>;

    async fn request(&self, request: ProviderRequest) -> Result<Value, ProviderError>;
}
