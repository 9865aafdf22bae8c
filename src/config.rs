use std::time::Duration;

use thiserror::Error;

use crate::services::locator_service::DEFAULT_INSTALL_URL;

const DEFAULT_BANNER_MS: u64 = 3000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Popup settings, read from the environment (and `.env`)
#[derive(Debug, Clone, PartialEq)]
pub struct PopupConfig {
    /// JSON-RPC endpoint of the wallet
    pub rpc_url: Option<String>,
    /// Account the wallet authorizes on connect
    pub public_key: Option<String>,
    pub install_url: String,
    pub banner_duration: Duration,
}

impl PopupConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let banner_duration = match non_empty("ERROR_BANNER_MS") {
            Some(value) => {
                let ms = value.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                    key: "ERROR_BANNER_MS",
                    value: value.clone(),
                })?;
                Duration::from_millis(ms)
            }
            None => Duration::from_millis(DEFAULT_BANNER_MS),
        };

        Ok(Self {
            rpc_url: non_empty("WALLET_RPC_URL"),
            public_key: non_empty("WALLET_PUBLIC_KEY"),
            install_url: non_empty("WALLET_INSTALL_URL").unwrap_or_else(|| DEFAULT_INSTALL_URL.to_string()),
            banner_duration,
        })
    }
}
