use tracing::{error, info, warn};

use super::Popup;
use crate::api::WalletProvider;
use crate::services::{account_service, connection_service};
use crate::ui::UiSurface;

/// Explicit user retry of the balance and history fetch
pub async fn execute<S: UiSurface>(popup: &Popup<S>) -> Result<(), String> {
    let Some(_ticket) = popup.begin("refresh") else {
        return Ok(());
    };

    let provider = match (popup.provider(), popup.state().connection.is_connected()) {
        (Some(provider), true) => provider,
        _ => return Err("Connect a wallet first".to_string()),
    };

    load_account_data(popup, provider.as_ref()).await
}

/// Fetch balance then history and store them in a new snapshot.
///
/// On failure the previous data stays on screen, unless the wallet says the
/// session is no longer authorized, in which case the popup disconnects.
pub(crate) async fn load_account_data<S: UiSurface>(
    popup: &Popup<S>,
    provider: &dyn WalletProvider,
) -> Result<(), String> {
    match account_service::fetch_account_data(provider).await {
        Ok(data) => {
            info!(
                "Loaded balance {} and {} transactions",
                data.balance.balance,
                data.transactions.len()
            );
            let next = popup
                .state()
                .with_balance(data.balance.balance)
                .with_transactions(data.transactions);
            popup.commit(next);
            Ok(())
        }
        Err(e) => {
            error!("Error loading account data: {}", e);
            if e.requires_reauth() {
                warn!("Wallet session expired, resetting connection");
                popup.set_provider(None);
                popup.commit(popup.state().disconnected());
            }
            Err("Failed to fetch account data".to_string())
        }
    }
}

/// Startup check: pick up an already authorized session without prompting
pub(crate) async fn restore<S: UiSurface>(popup: &Popup<S>) {
    let Some(_ticket) = popup.begin("restore") else {
        return;
    };

    let Some(connection) = connection_service::check_existing_connection(popup.locator()) else {
        info!("No existing wallet session");
        return;
    };

    popup.set_provider(Some(connection.provider.clone()));
    popup.commit(popup.state().with_connection(connection.state()));

    if let Err(message) = load_account_data(popup, connection.provider.as_ref()).await {
        popup.show_error(&message);
    }
}
