//! Host environment the popup runs in

use std::sync::Arc;

use tracing::info;

use super::WalletProvider;
use crate::utils::PopupError;

/// The environment holding the optional injected wallet.
pub trait Host {
    /// Read the wallet slot. `Ok(None)` when nothing is injected.
    fn wallet_slot(&self) -> Result<Option<Arc<dyn WalletProvider>>, PopupError>;

    /// Open an external resource page (used for the install prompt)
    fn open_resource(&self, url: &str);
}

/// Opens resources by printing them for the user, there is no browser to hand off to.
#[derive(Debug, Default)]
pub struct InstallOpener;

impl InstallOpener {
    pub fn open(&self, url: &str) {
        info!("Opening {}", url);
        println!("No wallet found. Install one from {}", url);
    }
}

/// Host built from configuration: an optional wallet and an opener
pub struct ConfiguredHost {
    wallet: Option<Arc<dyn WalletProvider>>,
    opener: InstallOpener,
}

impl ConfiguredHost {
    pub fn new(wallet: Option<Arc<dyn WalletProvider>>) -> Self {
        Self {
            wallet,
            opener: InstallOpener,
        }
    }
}

impl Host for ConfiguredHost {
    fn wallet_slot(&self) -> Result<Option<Arc<dyn WalletProvider>>, PopupError> {
        Ok(self.wallet.clone())
    }

    fn open_resource(&self, url: &str) {
        self.opener.open(url);
    }
}
