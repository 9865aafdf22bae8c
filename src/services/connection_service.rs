use std::sync::Arc;

use tracing::{debug, error, info};

use super::locator_service::ProviderLocator;
use crate::api::WalletProvider;
use crate::models::ConnectionState;
use crate::utils::PopupError;

/// An authorized session with a wallet
#[derive(Clone)]
pub struct Connection {
    pub provider: Arc<dyn WalletProvider>,
    pub account_id: String,
}

impl Connection {
    pub fn state(&self) -> ConnectionState {
        ConnectionState::Connected {
            account_id: self.account_id.clone(),
        }
    }
}

/// Ask the wallet to authorize the popup
pub async fn connect(locator: &ProviderLocator) -> Result<Connection, PopupError> {
    debug!("Attempting to connect wallet...");
    let provider = locator.locate().ok_or_else(|| {
        error!("Phantom wallet not found");
        PopupError::ProviderUnavailable
    })?;

    let response = provider.connect().await.map_err(|e| {
        error!("Error connecting wallet: {}", e);
        PopupError::ConnectionRejected(e)
    })?;

    info!("Connected successfully: {}", response.public_key);
    Ok(Connection {
        provider,
        account_id: response.public_key,
    })
}

/// Revoke the wallet session.
///
/// Callers treat the popup as disconnected whether or not this succeeds.
pub async fn disconnect(locator: &ProviderLocator) -> Result<(), PopupError> {
    debug!("Attempting to disconnect wallet...");
    let provider = locator.locate().ok_or_else(|| {
        error!("Phantom wallet not found");
        PopupError::ProviderUnavailable
    })?;

    provider.disconnect().await.map_err(|e| {
        error!("Error disconnecting wallet: {}", e);
        PopupError::DisconnectFailed(e)
    })?;

    info!("Disconnected successfully");
    Ok(())
}

/// Restore a session the wallet already authorized, without prompting.
///
/// Returns `None` (disconnected) when there is no wallet, it is not connected,
/// or it does not expose a public key.
pub fn check_existing_connection(locator: &ProviderLocator) -> Option<Connection> {
    debug!("Checking wallet connection...");
    let provider = locator.locate()?;

    if !provider.is_connected() {
        debug!("Provider found, wallet not connected");
        return None;
    }

    match provider.public_key() {
        Some(account_id) => {
            info!("Wallet is already connected");
            Some(Connection {
                provider,
                account_id,
            })
        }
        None => {
            debug!("Wallet reports connected but has no public key");
            None
        }
    }
}
