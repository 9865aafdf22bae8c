//! Popup state snapshots
//!
//! A `PopupState` is never mutated in place. Each event builds the next snapshot
//! from the previous one and the popup swaps it in as a whole.

use std::sync::Arc;
use std::time::{Duration, Instant};

use super::{ConnectionState, Transaction, ViewSelection};

/// Transient error message shown at the top of the popup
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub message: String,
    pub shown_at: Instant,
    pub duration: Duration,
}

impl Banner {
    pub fn new(message: impl Into<String>, shown_at: Instant, duration: Duration) -> Self {
        Self {
            message: message.into(),
            shown_at,
            duration,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.duration
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopupState {
    pub connection: ConnectionState,
    pub balance: Option<f64>,
    /// Source of truth for the list, as last fetched
    pub transactions: Arc<[Transaction]>,
    pub selection: ViewSelection,
    pub banner: Option<Banner>,
}

impl Default for PopupState {
    fn default() -> Self {
        Self {
            connection: ConnectionState::Disconnected,
            balance: None,
            transactions: Arc::from(Vec::new()),
            selection: ViewSelection::default(),
            banner: None,
        }
    }
}

impl PopupState {
    pub fn with_connection(&self, connection: ConnectionState) -> Self {
        Self {
            connection,
            ..self.clone()
        }
    }

    /// Back to a disconnected popup. Account data from the old session is dropped.
    pub fn disconnected(&self) -> Self {
        Self {
            connection: ConnectionState::Disconnected,
            balance: None,
            transactions: Arc::from(Vec::new()),
            ..self.clone()
        }
    }

    pub fn with_balance(&self, balance: f64) -> Self {
        Self {
            balance: Some(balance),
            ..self.clone()
        }
    }

    /// Replace the whole transaction set (no merge with the previous fetch)
    pub fn with_transactions(&self, transactions: Vec<Transaction>) -> Self {
        Self {
            transactions: Arc::from(transactions),
            ..self.clone()
        }
    }

    pub fn with_selection(&self, selection: ViewSelection) -> Self {
        Self {
            selection,
            ..self.clone()
        }
    }

    pub fn with_banner(&self, banner: Banner) -> Self {
        Self {
            banner: Some(banner),
            ..self.clone()
        }
    }

    pub fn without_banner(&self) -> Self {
        Self {
            banner: None,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortKey;

    fn tx(signature: &str) -> Transaction {
        Transaction {
            signature: signature.to_string(),
            block_time: Some(1),
            confirmation_status: "confirmed".to_string(),
            amount: None,
            kind: None,
        }
    }

    #[test]
    fn test_transitions_leave_previous_snapshot_untouched() {
        let first = PopupState::default().with_transactions(vec![tx("a")]);
        let second = first.with_selection(ViewSelection {
            sort: SortKey::Amount,
            ..first.selection
        });

        assert_eq!(first.selection.sort, SortKey::Date);
        assert_eq!(second.selection.sort, SortKey::Amount);
        assert_eq!(first.transactions, second.transactions);
    }

    #[test]
    fn test_disconnected_clears_account_data() {
        let state = PopupState::default()
            .with_connection(ConnectionState::Connected { account_id: "acct".to_string() })
            .with_balance(1.0)
            .with_transactions(vec![tx("a")]);

        let state = state.disconnected();
        assert_eq!(state.connection, ConnectionState::Disconnected);
        assert_eq!(state.balance, None);
        assert!(state.transactions.is_empty());
    }

    #[test]
    fn test_banner_expiry() {
        let start = Instant::now();
        let banner = Banner::new("Failed to connect wallet", start, Duration::from_millis(3000));

        assert!(!banner.is_expired(start + Duration::from_millis(2999)));
        assert!(banner.is_expired(start + Duration::from_millis(3000)));
    }
}
