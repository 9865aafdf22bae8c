use tracing::{error, info};

use super::Popup;
use crate::services::connection_service;
use crate::ui::UiSurface;

pub async fn execute<S: UiSurface>(popup: &Popup<S>) -> Result<(), String> {
    let Some(_ticket) = popup.begin("disconnect") else {
        return Ok(());
    };
    info!("Disconnect button clicked");

    let result = connection_service::disconnect(popup.locator()).await;

    // The popup shows disconnected even when the wallet refused
    popup.set_provider(None);
    popup.commit(popup.state().disconnected());

    result.map_err(|e| {
        error!("Error in disconnect: {}", e);
        "Failed to disconnect wallet".to_string()
    })
}
