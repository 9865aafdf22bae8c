pub mod connect;
pub mod disconnect;
pub mod help;
pub mod refresh;
pub mod view;

use std::cell::{Ref, RefCell};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, error, warn};

use crate::api::WalletProvider;
use crate::models::{Banner, PopupState};
use crate::services::locator_service::ProviderLocator;
use crate::ui::{self, UiSurface};
use crate::utils::{InFlight, InFlightTicket};

/// What the event loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// The popup: current snapshot, the wallet in use and the surface it draws on.
///
/// Everything runs on one thread. Snapshots are swapped whole and no borrow is
/// held across an await.
pub struct Popup<S: UiSurface> {
    locator: ProviderLocator,
    surface: RefCell<S>,
    state: RefCell<PopupState>,
    provider: RefCell<Option<Arc<dyn WalletProvider>>>,
    in_flight: InFlight,
    banner_duration: Duration,
}

impl<S: UiSurface> Popup<S> {
    pub fn new(locator: ProviderLocator, surface: S, banner_duration: Duration) -> Self {
        let popup = Self {
            locator,
            surface: RefCell::new(surface),
            state: RefCell::new(PopupState::default()),
            provider: RefCell::new(None),
            in_flight: InFlight::new(),
            banner_duration,
        };
        popup.commit(PopupState::default());
        popup
    }

    /// Copy of the current snapshot
    pub fn state(&self) -> PopupState {
        self.state.borrow().clone()
    }

    pub fn surface(&self) -> Ref<'_, S> {
        self.surface.borrow()
    }

    pub(crate) fn locator(&self) -> &ProviderLocator {
        &self.locator
    }

    pub(crate) fn provider(&self) -> Option<Arc<dyn WalletProvider>> {
        self.provider.borrow().clone()
    }

    pub(crate) fn set_provider(&self, provider: Option<Arc<dyn WalletProvider>>) {
        *self.provider.borrow_mut() = provider;
    }

    /// Claim the provider slot, or log and return `None` if another call is pending
    pub(crate) fn begin(&self, operation: &'static str) -> Option<InFlightTicket<'_>> {
        match self.in_flight.try_begin(operation) {
            Ok(ticket) => Some(ticket),
            Err(pending) => {
                warn!("Ignoring {} while {} is still in progress", operation, pending);
                None
            }
        }
    }

    /// Swap in the next snapshot and redraw
    pub(crate) fn commit(&self, next: PopupState) {
        let view = ui::render(&next);
        *self.state.borrow_mut() = next;
        ui::sync(&view, &mut *self.surface.borrow_mut());
    }

    pub fn show_error(&self, message: &str) {
        error!("Showing error: {}", message);
        let banner = Banner::new(message, Instant::now(), self.banner_duration);
        self.commit(self.state().with_banner(banner));
    }

    /// Hide the banner once its time is up. Returns true if the popup changed.
    pub fn dismiss_expired_banner(&self, now: Instant) -> bool {
        let expired = matches!(&self.state.borrow().banner, Some(banner) if banner.is_expired(now));
        if expired {
            self.commit(self.state().without_banner());
        }
        expired
    }

    /// Restore a session the wallet already authorized and load its data
    pub async fn startup(&self) {
        refresh::restore(self).await;
    }

    pub async fn handle_command(&self, line: &str) -> Outcome {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            return Outcome::Continue;
        }

        let command = parts[0].to_lowercase();
        let args = &parts[1..];
        debug!("Handling command: {}", command);

        let result = match command.as_str() {
            "connect" => connect::execute(self).await,
            "disconnect" => disconnect::execute(self).await,
            "refresh" => refresh::execute(self).await,
            "sort" => view::sort(self, args),
            "filter" => view::filter(self, args),
            "help" => {
                help::execute();
                Ok(())
            }
            "quit" | "exit" => return Outcome::Quit,
            other => Err(format!("Unknown command `{}`. Type `help` for a list.", other)),
        };

        if let Err(message) = result {
            self.show_error(&message);
        }

        Outcome::Continue
    }
}
