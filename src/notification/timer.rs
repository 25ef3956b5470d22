//! One-shot auto-dismiss timer.

use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Cancellable deferred callback scheduled on the Tokio runtime.
///
/// The timer is cancelled when dropped, so whoever owns it releases the
/// pending callback on every exit path.
#[derive(Debug, Default)]
pub(crate) struct DismissTimer {
    handle: Option<JoinHandle<()>>,
}

impl DismissTimer {
    pub(crate) fn unarmed() -> Self {
        Self::default()
    }

    /// Schedule `on_expire` to run once after `delay`.
    ///
    /// Outside a Tokio runtime nothing is scheduled and the timer stays unarmed.
    pub(crate) fn arm<F>(delay: Duration, on_expire: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                log::warn!("No Tokio runtime available, auto-dismiss after {:?} disabled: {}", delay, e);
                return Self::unarmed();
            }
        };

        // Deadline is fixed now, not when the task is first polled
        let deadline = Instant::now() + delay;
        let handle = runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            on_expire();
        });
        log::trace!("Armed dismiss timer for {:?}", delay);

        Self { handle: Some(handle) }
    }

    /// Whether a callback is still waiting to run
    pub(crate) fn is_pending(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Cancel the pending callback. Cancelling a fired or cancelled timer is a no-op.
    pub(crate) fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for DismissTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
