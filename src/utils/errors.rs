use thiserror::Error;

use crate::api::ProviderError;

/// Errors surfaced by popup operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PopupError {
    #[error("Phantom wallet not found")]
    ProviderUnavailable,
    #[error("Connection rejected: {0}")]
    ConnectionRejected(ProviderError),
    #[error("Disconnect failed: {0}")]
    DisconnectFailed(ProviderError),
    #[error("Fetch failed: {0}")]
    FetchError(ProviderError),
    #[error("UI element `{0}` not found")]
    RenderTargetMissing(&'static str),
}

impl PopupError {
    /// Fetch failures the provider reports as unauthorized end the session
    pub fn requires_reauth(&self) -> bool {
        match self {
            PopupError::FetchError(e) => e.requires_reauth(),
            _ => false,
        }
    }
}
