use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::LocalSet;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod background;
mod commands;
mod config;
mod models;
mod services;
mod ui;
mod utils;

use api::ConfiguredHost;
use api::{RpcWalletProvider, WalletProvider};
use background::BackgroundMessage;
use commands::{Outcome, Popup};
use config::PopupConfig;
use services::locator_service::ProviderLocator;
use ui::TerminalSurface;

const BANNER_CHECK_INTERVAL: Duration = Duration::from_millis(250);

fn print_frame(popup: &Popup<TerminalSurface>) {
    println!("{}", popup.surface().frame());
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()
            .add_directive("wallet_popup=debug".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap()))
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting wallet popup...");

    let config = match PopupConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return;
        }
    };

    // A wallet is injected only when at least one of its settings is present
    let wallet = if config.rpc_url.is_some() || config.public_key.is_some() {
        let url = config
            .rpc_url
            .clone()
            .unwrap_or_else(|| RpcWalletProvider::DEFAULT_RPC_URL.to_string());
        info!("Wallet RPC endpoint: {}", url);
        Some(Arc::new(RpcWalletProvider::new(url, config.public_key.clone())) as Arc<dyn WalletProvider>)
    } else {
        None
    };
    let host = Rc::new(ConfiguredHost::new(wallet));

    let background = background::spawn_background();
    if let Some(ack) = background.send(BackgroundMessage::new("popupOpened")).await {
        debug!("Background acknowledged {}", ack.kind);
    }

    let popup = Rc::new(Popup::new(
        ProviderLocator::new(host, config.install_url.clone()),
        TerminalSurface::new(),
        config.banner_duration,
    ));
    info!("Popup initialized");

    let local = LocalSet::new();
    local
        .run_until(async move {
            popup.startup().await;
            print_frame(&popup);

            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            let mut banner_check = tokio::time::interval(BANNER_CHECK_INTERVAL);
            let (quit_tx, mut quit_rx) = mpsc::unbounded_channel::<()>();

            loop {
                tokio::select! {
                    line = lines.next_line() => match line {
                        Ok(Some(line)) => {
                            // Each command runs on its own task so a slow wallet call
                            // does not block input; the popup guards against overlap.
                            let popup = popup.clone();
                            let quit_tx = quit_tx.clone();
                            tokio::task::spawn_local(async move {
                                match popup.handle_command(&line).await {
                                    Outcome::Quit => {
                                        let _ = quit_tx.send(());
                                    }
                                    Outcome::Continue => print_frame(&popup),
                                }
                            });
                        }
                        Ok(None) => break,
                        Err(e) => {
                            error!("Failed to read input: {}", e);
                            break;
                        }
                    },
                    _ = banner_check.tick() => {
                        if popup.dismiss_expired_banner(Instant::now()) {
                            print_frame(&popup);
                        }
                    }
                    _ = quit_rx.recv() => break,
                }
            }
        })
        .await;

    info!("Popup closed");
}
