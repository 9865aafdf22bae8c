//! Connection models

/// Whether the popup currently has an authorized account
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connected { account_id: String },
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected { .. })
    }

    /// Public identifier of the active account, if any
    pub fn account_id(&self) -> Option<&str> {
        match self {
            ConnectionState::Connected { account_id } => Some(account_id),
            ConnectionState::Disconnected => None,
        }
    }
}
