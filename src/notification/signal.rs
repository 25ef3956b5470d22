//! Signals emitted by a lifecycle controller to the presentation layer.

use super::model::NotificationId;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// The notification was dismissed. Sent at most once per notification.
    Closed(NotificationId),
    /// The action affordance was invoked while the notification was visible.
    Action(NotificationId),
}

impl Signal {
    #[must_use]
    pub fn id(&self) -> NotificationId {
        match self {
            Signal::Closed(id) | Signal::Action(id) => *id,
        }
    }
}

pub type SignalSender = mpsc::UnboundedSender<Signal>;
pub type SignalReceiver = mpsc::UnboundedReceiver<Signal>;
