pub mod host;
pub mod provider;
pub mod rpc;

#[cfg(test)]
pub mod mock;

pub use host::{ConfiguredHost, Host};
pub use provider::{ConnectResponse, ProviderError, ProviderRequest, WalletProvider};
pub use rpc::RpcWalletProvider;
