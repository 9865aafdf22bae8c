//! Presentation sync
//!
//! `render` turns a state snapshot into a `PopupView` without side effects;
//! `sync` pushes that view onto whatever surface the popup is drawn on.

pub mod terminal;

pub use terminal::TerminalSurface;

use tracing::debug;

use crate::models::PopupState;
use crate::services::view_service;
use crate::utils::{format_amount, format_balance, format_block_time, shorten_address, PopupError};

/// Stable logical names of the popup elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    ConnectButton,
    DisconnectButton,
    StatusIcon,
    StatusText,
    WalletInfo,
    WalletAddress,
    WalletBalance,
    SortSelect,
    FilterSelect,
    TransactionList,
    ErrorMessage,
}

impl ElementId {
    pub const ALL: [ElementId; 11] = [
        ElementId::ConnectButton,
        ElementId::DisconnectButton,
        ElementId::StatusIcon,
        ElementId::StatusText,
        ElementId::WalletInfo,
        ElementId::WalletAddress,
        ElementId::WalletBalance,
        ElementId::SortSelect,
        ElementId::FilterSelect,
        ElementId::TransactionList,
        ElementId::ErrorMessage,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ElementId::ConnectButton => "connectButton",
            ElementId::DisconnectButton => "disconnectButton",
            ElementId::StatusIcon => "statusIcon",
            ElementId::StatusText => "statusText",
            ElementId::WalletInfo => "walletInfo",
            ElementId::WalletAddress => "walletAddress",
            ElementId::WalletBalance => "walletBalance",
            ElementId::SortSelect => "sortSelect",
            ElementId::FilterSelect => "filterSelect",
            ElementId::TransactionList => "transactionList",
            ElementId::ErrorMessage => "errorMessage",
        }
    }
}

/// One line of the transaction list
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub signature: String,
    pub amount: String,
    pub time: String,
    pub kind: String,
}

/// Everything the popup shows for one snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct PopupView {
    pub status_icon_class: &'static str,
    pub status_text: &'static str,
    pub show_connect: bool,
    pub show_disconnect: bool,
    pub show_wallet_info: bool,
    pub address: Option<String>,
    pub balance: Option<String>,
    pub sort_value: String,
    pub filter_value: String,
    pub rows: Vec<TransactionRow>,
    pub error: Option<String>,
}

/// Where the popup is drawn. Elements may be missing; callers check first.
pub trait UiSurface {
    fn has_element(&self, id: ElementId) -> bool;
    fn set_text(&mut self, id: ElementId, text: &str);
    fn set_class(&mut self, id: ElementId, class: &str);
    fn set_visible(&mut self, id: ElementId, visible: bool);
    fn set_rows(&mut self, id: ElementId, rows: &[TransactionRow]);
}

pub fn render(state: &PopupState) -> PopupView {
    let connected = state.connection.is_connected();

    let rows = view_service::derive_view(&state.transactions, state.selection)
        .iter()
        .map(|tx| TransactionRow {
            signature: shorten_address(&tx.signature),
            amount: format_amount(tx.amount),
            time: format_block_time(tx.block_time),
            kind: tx.kind.clone().unwrap_or_else(|| "Unknown".to_string()),
        })
        .collect();

    PopupView {
        status_icon_class: if connected { "status-icon connected" } else { "status-icon" },
        status_text: if connected { "Connected" } else { "Not Connected" },
        show_connect: !connected,
        show_disconnect: connected,
        show_wallet_info: connected,
        address: state
            .connection
            .account_id()
            .map(|id| format!("Address: {}", shorten_address(id))),
        balance: state.balance.map(|b| format!("Balance: {}", format_balance(b))),
        sort_value: state.selection.sort.as_str().to_string(),
        filter_value: state.selection.filter.as_str().to_string(),
        rows,
        error: state.banner.as_ref().map(|b| b.message.clone()),
    }
}

/// True when the surface has `id`; otherwise records the miss
fn present(surface: &dyn UiSurface, skipped: &mut Vec<PopupError>, id: ElementId) -> bool {
    if surface.has_element(id) {
        return true;
    }
    let err = PopupError::RenderTargetMissing(id.name());
    debug!("Skipping render: {}", err);
    skipped.push(err);
    false
}

/// Apply `view` to `surface`, skipping elements the surface does not have.
/// Returns the skipped targets.
pub fn sync(view: &PopupView, surface: &mut dyn UiSurface) -> Vec<PopupError> {
    let mut skipped = Vec::new();

    if present(&*surface, &mut skipped, ElementId::StatusIcon) {
        surface.set_class(ElementId::StatusIcon, view.status_icon_class);
    }
    if present(&*surface, &mut skipped, ElementId::StatusText) {
        surface.set_text(ElementId::StatusText, view.status_text);
    }
    if present(&*surface, &mut skipped, ElementId::ConnectButton) {
        surface.set_visible(ElementId::ConnectButton, view.show_connect);
    }
    if present(&*surface, &mut skipped, ElementId::DisconnectButton) {
        surface.set_visible(ElementId::DisconnectButton, view.show_disconnect);
    }
    if present(&*surface, &mut skipped, ElementId::WalletInfo) {
        surface.set_visible(ElementId::WalletInfo, view.show_wallet_info);
    }
    // Cleared when absent so a previous session's values never linger
    if present(&*surface, &mut skipped, ElementId::WalletAddress) {
        surface.set_text(ElementId::WalletAddress, view.address.as_deref().unwrap_or_default());
    }
    if present(&*surface, &mut skipped, ElementId::WalletBalance) {
        surface.set_text(ElementId::WalletBalance, view.balance.as_deref().unwrap_or_default());
    }
    if present(&*surface, &mut skipped, ElementId::SortSelect) {
        surface.set_text(ElementId::SortSelect, &view.sort_value);
    }
    if present(&*surface, &mut skipped, ElementId::FilterSelect) {
        surface.set_text(ElementId::FilterSelect, &view.filter_value);
    }
    if present(&*surface, &mut skipped, ElementId::TransactionList) {
        surface.set_rows(ElementId::TransactionList, &view.rows);
    }
    if present(&*surface, &mut skipped, ElementId::ErrorMessage) {
        match &view.error {
            Some(message) => {
                surface.set_text(ElementId::ErrorMessage, message);
                surface.set_visible(ElementId::ErrorMessage, true);
            }
            None => surface.set_visible(ElementId::ErrorMessage, false),
        }
    }

    skipped
}
