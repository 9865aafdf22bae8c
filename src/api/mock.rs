//! In-memory provider and host used by tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::{ConnectResponse, Host, ProviderError, ProviderRequest, WalletProvider};
use crate::utils::PopupError;

/// Provider that answers from a script and records every call
pub struct ScriptedProvider {
    phantom: bool,
    connected: AtomicBool,
    public_key: Mutex<Option<String>>,
    connect_result: Mutex<Result<ConnectResponse, ProviderError>>,
    disconnect_result: Mutex<Result<(), ProviderError>>,
    responses: Mutex<HashMap<String, Result<Value, ProviderError>>>,
    delay: Option<Duration>,
    pub calls: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new(account: &str) -> Self {
        Self {
            phantom: true,
            connected: AtomicBool::new(false),
            public_key: Mutex::new(None),
            connect_result: Mutex::new(Ok(ConnectResponse {
                public_key: account.to_string(),
            })),
            disconnect_result: Mutex::new(Ok(())),
            responses: Mutex::new(HashMap::new()),
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn not_phantom(mut self) -> Self {
        self.phantom = false;
        self
    }

    /// Provider that is already authorized for `account`
    pub fn already_connected(self, account: &str) -> Self {
        self.connected.store(true, Ordering::SeqCst);
        *self.public_key.lock().unwrap() = Some(account.to_string());
        self
    }

    pub fn rejecting_connect(self, error: ProviderError) -> Self {
        *self.connect_result.lock().unwrap() = Err(error);
        self
    }

    pub fn rejecting_disconnect(self, error: ProviderError) -> Self {
        *self.disconnect_result.lock().unwrap() = Err(error);
        self
    }

    pub fn with_response(self, method: &str, response: Result<Value, ProviderError>) -> Self {
        self.set_response(method, response);
        self
    }

    /// Change a scripted response after the provider has been handed out
    pub fn set_response(&self, method: &str, response: Result<Value, ProviderError>) {
        self.responses
            .lock()
            .unwrap()
            .insert(method.to_string(), response);
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self, name: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| *c == name).count()
    }

    async fn record(&self, name: &str) {
        self.calls.lock().unwrap().push(name.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl WalletProvider for ScriptedProvider {
    fn is_phantom(&self) -> bool {
        self.phantom
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    fn public_key(&self) -> Option<String> {
        self.public_key.lock().unwrap().clone()
    }

    async fn connect(&self) -> Result<ConnectResponse, ProviderError> {
        self.record("connect").await;
        let result = self.connect_result.lock().unwrap().clone();
        if let Ok(response) = &result {
            self.connected.store(true, Ordering::SeqCst);
            *self.public_key.lock().unwrap() = Some(response.public_key.clone());
        }
        result
    }

    async fn disconnect(&self) -> Result<(), ProviderError> {
        self.record("disconnect").await;
        let result = self.disconnect_result.lock().unwrap().clone();
        if result.is_ok() {
            self.connected.store(false, Ordering::SeqCst);
        }
        result
    }

    async fn request(&self, request: ProviderRequest) -> Result<Value, ProviderError> {
        self.record(&request.method).await;
        self.responses
            .lock()
            .unwrap()
            .get(&request.method)
            .cloned()
            .unwrap_or_else(|| Err(ProviderError::UnsupportedMethod(request.method.clone())))
    }
}

/// Host with a fixed wallet slot that counts install prompts
pub struct TestHost {
    wallet: Option<Arc<ScriptedProvider>>,
    broken: bool,
    pub opened: Mutex<Vec<String>>,
}

impl TestHost {
    pub fn with_wallet(wallet: Arc<ScriptedProvider>) -> Self {
        Self {
            wallet: Some(wallet),
            broken: false,
            opened: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self {
            wallet: None,
            broken: false,
            opened: Mutex::new(Vec::new()),
        }
    }

    /// Host whose slot cannot be read at all
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::empty()
        }
    }

    pub fn install_prompts(&self) -> usize {
        self.opened.lock().unwrap().len()
    }
}

impl Host for TestHost {
    fn wallet_slot(&self) -> Result<Option<Arc<dyn WalletProvider>>, PopupError> {
        if self.broken {
            return Err(PopupError::ProviderUnavailable);
        }
        Ok(self
            .wallet
            .clone()
            .map(|wallet| wallet as Arc<dyn WalletProvider>))
    }

    fn open_resource(&self, url: &str) {
        self.opened.lock().unwrap().push(url.to_string());
    }
}
