use tracing::{error, info};

use super::{refresh, Popup};
use crate::services::connection_service;
use crate::ui::UiSurface;

pub async fn execute<S: UiSurface>(popup: &Popup<S>) -> Result<(), String> {
    let Some(_ticket) = popup.begin("connect") else {
        return Ok(());
    };
    info!("Connect button clicked");

    let connection = connection_service::connect(popup.locator())
        .await
        .map_err(|e| {
            error!("Error in connect: {}", e);
            "Failed to connect wallet".to_string()
        })?;

    popup.set_provider(Some(connection.provider.clone()));
    popup.commit(popup.state().with_connection(connection.state()));

    refresh::load_account_data(popup, connection.provider.as_ref()).await
}
