//! Background message channel
//!
//! Long-lived task the popup can send typed requests to. It acknowledges every
//! message; handling specific message types is left to whoever adds them.

use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundMessage {
    #[serde(rename = "type")]
    pub kind: String,
}

impl BackgroundMessage {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    pub received: bool,
    #[serde(rename = "type")]
    pub kind: String,
}

type Envelope = (BackgroundMessage, oneshot::Sender<Ack>);

/// Handle for sending requests to the background task
#[derive(Debug, Clone)]
pub struct BackgroundHandle {
    sender: mpsc::Sender<Envelope>,
}

impl BackgroundHandle {
    /// Send a message and wait for the acknowledgement.
    /// Returns `None` if the background task is gone.
    pub async fn send(&self, message: BackgroundMessage) -> Option<Ack> {
        let (reply, response) = oneshot::channel();
        self.sender.send((message, reply)).await.ok()?;
        response.await.ok()
    }
}

/// Start the background task on the current runtime
pub fn spawn_background() -> BackgroundHandle {
    let (sender, mut receiver) = mpsc::channel::<Envelope>(16);

    tokio::spawn(async move {
        info!("Extension installed");
        while let Some((message, reply)) = receiver.recv().await {
            info!("Background received message: {}", message.kind);
            let ack = Ack {
                received: true,
                kind: message.kind,
            };
            if reply.send(ack).is_err() {
                debug!("Sender dropped before the acknowledgement");
            }
        }
        debug!("Background channel closed");
    });

    BackgroundHandle { sender }
}
