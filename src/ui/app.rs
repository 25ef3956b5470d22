//! Application state for the toast demo

use tokio::sync::mpsc;

use crate::config::{Config, ToastConfig};
use crate::constants::{
    DEMO_ACTION_LABEL, DEMO_ERROR_MESSAGE, DEMO_ERROR_TITLE, DEMO_INFO_MESSAGE, DEMO_SUCCESS_MESSAGE,
    DEMO_SUCCESS_TITLE, DEMO_WARNING_MESSAGE, DEMO_WARNING_TITLE,
};
use crate::icons::IconService;
use crate::notification::{
    Kind, LifecycleController, Notification, NotificationId, Position, Signal, SignalReceiver, SignalSender,
};

/// Application state
pub struct App {
    pub should_quit: bool,
    /// Live toasts, oldest first
    pub toasts: Vec<LifecycleController>,
    /// Placement used for the next toast
    pub next_position: Position,
    pub icons: IconService,
    pub toast_width: u16,
    pub defaults: ToastConfig,
    /// Last signal worth telling the user about
    pub last_event: Option<String>,
    signal_tx: SignalSender,
    signal_rx: SignalReceiver,
}

impl App {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let (signal_tx, signal_rx) = mpsc::unbounded_channel();

        Self {
            should_quit: false,
            toasts: Vec::new(),
            next_position: config.toast.position,
            icons: IconService::new(config.ui.icon_theme),
            toast_width: config.ui.width,
            defaults: config.toast.clone(),
            last_event: None,
            signal_tx,
            signal_rx,
        }
    }

    /// Show a demo toast of the given kind at the current placement
    pub fn show(&mut self, kind: Kind) -> NotificationId {
        let options = self.defaults.options().position(self.next_position);
        let (message, options) = match kind {
            Kind::Success => (
                DEMO_SUCCESS_MESSAGE,
                options.title(DEMO_SUCCESS_TITLE).action_label(DEMO_ACTION_LABEL),
            ),
            // Errors stay until someone reads them
            Kind::Error => (DEMO_ERROR_MESSAGE, options.title(DEMO_ERROR_TITLE).persistent(true)),
            Kind::Warning => (DEMO_WARNING_MESSAGE, options.title(DEMO_WARNING_TITLE)),
            Kind::Info => (DEMO_INFO_MESSAGE, options),
        };

        let toast = LifecycleController::with_sender(Notification::new(kind, message, options), self.signal_tx.clone());
        let id = toast.id();
        self.toasts.push(toast);
        id
    }

    fn newest_visible(&self) -> Option<&LifecycleController> {
        self.toasts.iter().rev().find(|toast| toast.is_visible())
    }

    /// Close the newest visible toast through its close affordance
    pub fn close_newest(&mut self) -> bool {
        self.newest_visible().is_some_and(LifecycleController::request_close)
    }

    /// Invoke the action of the newest visible toast
    pub fn act_on_newest(&mut self) -> bool {
        self.newest_visible().is_some_and(LifecycleController::request_action)
    }

    /// Dismiss every visible toast; returns how many were dismissed
    pub fn dismiss_all(&mut self) -> usize {
        self.toasts.iter().filter(|toast| toast.dismiss()).count()
    }

    pub fn cycle_position(&mut self) {
        self.next_position = self.next_position.next();
    }

    pub fn cycle_icon_theme(&mut self) {
        self.icons.cycle_icon_theme();
    }

    /// Consume pending signals. Closed toasts are dropped from the screen.
    pub fn process_signals(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(signal) = self.signal_rx.try_recv() {
            processed += 1;
            match signal {
                Signal::Closed(id) => {
                    self.toasts.retain(|toast| toast.id() != id);
                    log::debug!("Evicted closed toast {}", id);
                }
                Signal::Action(id) => {
                    let label = self
                        .toasts
                        .iter()
                        .find(|toast| toast.id() == id)
                        .and_then(|toast| toast.snapshot().action_label().map(str::to_string))
                        .unwrap_or_default();
                    self.last_event = Some(format!("Action '{label}' invoked"));
                }
            }
        }
        processed
    }

    /// Snapshots of the toasts still on screen, oldest first
    #[must_use]
    pub fn visible_toasts(&self) -> Vec<Notification> {
        self.toasts
            .iter()
            .filter(|toast| toast.is_visible())
            .map(LifecycleController::snapshot)
            .collect()
    }
}
