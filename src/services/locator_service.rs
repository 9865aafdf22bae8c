use std::rc::Rc;
use std::sync::Arc;

use tracing::{debug, error, info};

use crate::api::{Host, WalletProvider};

/// Where users are sent when no wallet is installed
pub const DEFAULT_INSTALL_URL: &str = "https://phantom.app/";

/// Finds the injected wallet in the host environment
pub struct ProviderLocator {
    host: Rc<dyn Host>,
    install_url: String,
}

impl ProviderLocator {
    pub fn new(host: Rc<dyn Host>, install_url: impl Into<String>) -> Self {
        Self {
            host,
            install_url: install_url.into(),
        }
    }

    /// Return the wallet if one with the expected identity marker is present.
    ///
    /// When no matching wallet is found the install page is opened and `None`
    /// is returned. A slot that cannot be read counts as "not found" and does
    /// not open anything.
    pub fn locate(&self) -> Option<Arc<dyn WalletProvider>> {
        debug!("Checking for Phantom provider...");
        match self.host.wallet_slot() {
            Ok(Some(provider)) if provider.is_phantom() => {
                debug!("Phantom provider found");
                Some(provider)
            }
            Ok(_) => {
                info!("Phantom not found, opening install page");
                self.host.open_resource(&self.install_url);
                None
            }
            Err(e) => {
                error!("Error getting Phantom provider: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{ScriptedProvider, TestHost};

    #[test]
    fn test_locate_present_provider() {
        let host = Rc::new(TestHost::with_wallet(Arc::new(ScriptedProvider::new("acct"))));
        let locator = ProviderLocator::new(host.clone(), DEFAULT_INSTALL_URL);

        assert!(locator.locate().is_some());
        assert_eq!(host.install_prompts(), 0);
    }

    #[test]
    fn test_missing_provider_opens_install_page() {
        let host = Rc::new(TestHost::empty());
        let locator = ProviderLocator::new(host.clone(), DEFAULT_INSTALL_URL);

        assert!(locator.locate().is_none());
        assert_eq!(*host.opened.lock().unwrap(), vec![DEFAULT_INSTALL_URL.to_string()]);
    }

    #[test]
    fn test_wrong_identity_marker_is_not_found() {
        let wallet = Arc::new(ScriptedProvider::new("acct").not_phantom());
        let host = Rc::new(TestHost::with_wallet(wallet));
        let locator = ProviderLocator::new(host.clone(), "https://example.com/install");

        assert!(locator.locate().is_none());
        assert_eq!(host.install_prompts(), 1);
    }

    #[test]
    fn test_unreadable_slot_is_swallowed() {
        let host = Rc::new(TestHost::broken());
        let locator = ProviderLocator::new(host.clone(), DEFAULT_INSTALL_URL);

        assert!(locator.locate().is_none());
        assert_eq!(host.install_prompts(), 0);
    }
}
