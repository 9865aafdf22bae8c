//! Data models for the wallet popup
//!
//! This module organizes the records and state snapshots shared between services,
//! the popup controller and the presentation layer.

pub mod balance;
pub mod connection;
pub mod state;
pub mod transaction;
pub mod view;

// Re-export commonly used types for convenience
pub use balance::BalanceResult;
pub use connection::ConnectionState;
pub use state::{Banner, PopupState};
pub use transaction::Transaction;
pub use view::{FilterKey, SortKey, ViewSelection};
