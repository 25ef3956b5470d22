//! Visible -> Dismissed lifecycle of a single notification.
//!
//! A [`LifecycleController`] owns one [`Notification`] and its auto-dismiss
//! timer. Manual close, timer expiry and external dismiss all funnel into the
//! same transition, which runs at most once and emits [`Signal::Closed`]
//! exactly when it runs.

use super::kind::{Kind, Position};
use super::model::{Notification, NotificationId};
use super::options::NotificationOptions;
use super::signal::{Signal, SignalReceiver, SignalSender};
use super::timer::DismissTimer;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    #[default]
    Visible,
    Dismissed,
}

#[derive(Debug, Clone, Copy)]
enum CloseReason {
    Manual,
    Expired,
    External,
}

impl fmt::Display for CloseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloseReason::Manual => f.write_str("close request"),
            CloseReason::Expired => f.write_str("timer expiry"),
            CloseReason::External => f.write_str("dismiss"),
        }
    }
}

#[derive(Debug)]
struct Inner {
    notification: Notification,
    state: LifecycleState,
    timer: DismissTimer,
    signals: SignalSender,
    /// Set once the owning controller is dropped; nothing is emitted afterwards
    disposed: bool,
}

impl Inner {
    fn close(&mut self, reason: CloseReason) -> bool {
        let id = self.notification.id();
        if self.disposed {
            log::debug!("Ignored {} for disposed notification {}", reason, id);
            return false;
        }
        if self.state == LifecycleState::Dismissed {
            log::debug!("Suppressed {} for already dismissed notification {}", reason, id);
            return false;
        }

        self.timer.cancel();
        self.state = LifecycleState::Dismissed;
        self.notification.mark_dismissed();
        log::debug!("Notification {} dismissed by {}", id, reason);

        // The caller may have stopped listening; that's not our concern
        let _ = self.signals.send(Signal::Closed(id));
        true
    }
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Drives one notification from `Visible` to `Dismissed`.
///
/// The controller is exclusively owned by whoever created it. Dropping it
/// cancels the auto-dismiss timer and marks the state disposed; the timer
/// task only holds a weak reference, and a callback already running when the
/// controller goes away finds the state inert.
#[derive(Debug)]
pub struct LifecycleController {
    id: NotificationId,
    position: Position,
    inner: Arc<Mutex<Inner>>,
}

impl LifecycleController {
    /// Create a controller with its own signal channel
    pub fn new(notification: Notification) -> (Self, SignalReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::with_sender(notification, tx), rx)
    }

    /// Create a controller that reports on an existing signal channel.
    ///
    /// Arms the auto-dismiss timer when the notification is neither
    /// persistent nor configured with a zero duration.
    pub fn with_sender(notification: Notification, signals: SignalSender) -> Self {
        let id = notification.id();
        let position = notification.position();
        let delay = notification.auto_dismiss_after();

        log::debug!(
            "Showing {} notification {} at {} (auto-dismiss: {:?})",
            notification.kind(),
            id,
            position,
            delay
        );

        let inner = Arc::new(Mutex::new(Inner {
            notification,
            state: LifecycleState::Visible,
            timer: DismissTimer::unarmed(),
            signals,
            disposed: false,
        }));

        if let Some(delay) = delay {
            let weak = Arc::downgrade(&inner);
            let timer = DismissTimer::arm(delay, move || {
                if let Some(inner) = weak.upgrade() {
                    lock(&inner).close(CloseReason::Expired);
                }
            });
            let mut guard = lock(&inner);
            // A dismissal may already have won the race on a multi-threaded runtime
            if guard.state == LifecycleState::Visible {
                guard.timer = timer;
            }
        }

        Self { id, position, inner }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        lock(&self.inner).notification.kind()
    }

    #[must_use]
    pub fn state(&self) -> LifecycleState {
        lock(&self.inner).state
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        lock(&self.inner).notification.is_visible()
    }

    /// Whether the auto-dismiss timer is still counting down
    #[must_use]
    pub fn has_pending_timer(&self) -> bool {
        lock(&self.inner).timer.is_pending()
    }

    /// Copy of the notification as it is right now
    #[must_use]
    pub fn snapshot(&self) -> Notification {
        lock(&self.inner).notification.clone()
    }

    /// Close requested through the close affordance.
    ///
    /// Ignored when the notification is not closable or is already dismissed.
    /// Returns `true` if this call dismissed the notification.
    pub fn request_close(&self) -> bool {
        let mut inner = lock(&self.inner);
        if !inner.notification.is_closable() {
            log::debug!("Ignored close request for non-closable notification {}", self.id);
            return false;
        }
        inner.close(CloseReason::Manual)
    }

    /// Programmatic dismissal; always permitted while visible.
    /// Returns `true` if this call dismissed the notification.
    pub fn dismiss(&self) -> bool {
        lock(&self.inner).close(CloseReason::External)
    }

    /// Action affordance invoked. Emits [`Signal::Action`] but never changes state.
    ///
    /// Ignored once dismissed or when the notification offers no action.
    pub fn request_action(&self) -> bool {
        let inner = lock(&self.inner);
        if inner.state == LifecycleState::Dismissed {
            log::debug!("Ignored action on dismissed notification {}", self.id);
            return false;
        }
        if inner.notification.action_label().is_none() {
            log::debug!("Ignored action on notification {} without an action label", self.id);
            return false;
        }

        let _ = inner.signals.send(Signal::Action(self.id));
        true
    }
}

impl Drop for LifecycleController {
    fn drop(&mut self) {
        // A timer callback may already hold the state; it must find it inert
        let mut inner = lock(&self.inner);
        inner.disposed = true;
        inner.timer.cancel();
    }
}

/// Create a notification and its controller from the component inputs.
///
/// Must be called inside a Tokio runtime for auto-dismiss to be scheduled.
pub fn create_notification(
    kind: Kind,
    message: impl Into<String>,
    options: NotificationOptions,
) -> (LifecycleController, SignalReceiver) {
    LifecycleController::new(Notification::new(kind, message, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::mpsc::error::TryRecvError;

    async fn settle() {
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    #[test]
    fn test_manual_paths_work_without_runtime() {
        let (toast, mut signals) = create_notification(Kind::Info, "Fresh bread", NotificationOptions::default());
        assert!(!toast.has_pending_timer());
        assert!(toast.request_close());
        assert_eq!(signals.try_recv(), Ok(Signal::Closed(toast.id())));
    }

    #[test]
    fn test_snapshot_reflects_dismissal() {
        let (toast, _signals) = create_notification(Kind::Warning, "Low on flour", NotificationOptions::default());
        assert!(toast.snapshot().is_visible());
        toast.dismiss();
        let snapshot = toast.snapshot();
        assert!(!snapshot.is_visible());
        assert_eq!(snapshot.message(), "Low on flour");
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_expiry_after_close_is_suppressed() {
        let options = NotificationOptions::new().duration_ms(100);
        let (toast, mut signals) = create_notification(Kind::Success, "Saved", options);

        assert!(toast.request_close());
        assert!(!toast.has_pending_timer());

        tokio::time::advance(Duration::from_millis(150)).await;
        settle().await;

        assert_eq!(signals.try_recv(), Ok(Signal::Closed(toast.id())));
        assert_eq!(signals.try_recv(), Err(TryRecvError::Empty));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_dismisses_non_closable_notification() {
        let options = NotificationOptions::new().duration_ms(100).closable(false);
        let (toast, mut signals) = create_notification(Kind::Info, "Syncing", options);

        tokio::time::advance(Duration::from_millis(100)).await;
        settle().await;

        assert_eq!(toast.state(), LifecycleState::Dismissed);
        assert_eq!(signals.try_recv(), Ok(Signal::Closed(toast.id())));
    }

    #[test]
    fn test_expiry_racing_drop_is_ignored() {
        let options = NotificationOptions::new().duration_ms(100);
        let (toast, mut signals) = create_notification(Kind::Info, "Fresh bread", options);
        // Strong reference, as held by a timer callback that is already running
        let in_flight = Arc::clone(&toast.inner);

        drop(toast);

        assert!(!lock(&in_flight).close(CloseReason::Expired));
        assert!(lock(&in_flight).notification.is_visible());
        assert_eq!(signals.try_recv(), Err(TryRecvError::Empty));

        drop(in_flight);
        assert_eq!(signals.try_recv(), Err(TryRecvError::Disconnected));
    }

    #[tokio::test]
    async fn test_shared_sender_reports_each_notification() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let first = LifecycleController::with_sender(
            Notification::new(Kind::Info, "first", NotificationOptions::new().persistent(true)),
            tx.clone(),
        );
        let second = LifecycleController::with_sender(
            Notification::new(Kind::Error, "second", NotificationOptions::new().persistent(true)),
            tx,
        );

        second.dismiss();
        first.dismiss();

        assert_eq!(rx.recv().await, Some(Signal::Closed(second.id())));
        assert_eq!(rx.recv().await, Some(Signal::Closed(first.id())));
    }
}
