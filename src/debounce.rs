//! Single-flight delayed invocation.
//!
//! Collapses a burst of trigger events into one call after a quiet period.
//! There is exactly one pending timer per instance: scheduling while a timer
//! is armed cancels the prior one, so only the last scheduled action fires.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::trace;

/// Default quiet period for search-as-you-type.
pub const SEARCH_QUIET_PERIOD: Duration = Duration::from_millis(200);

/// Default quiet period for heavier operations (e.g. directory reload).
pub const RELOAD_QUIET_PERIOD: Duration = Duration::from_millis(400);

/// Single-flight debouncer backed by a tokio timer task.
///
/// Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct Debouncer {
    quiet_period: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet period.
    #[must_use]
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    /// Schedule `action` to run after the quiet period.
    ///
    /// Any previously scheduled action that has not yet fired is cancelled.
    pub fn schedule<F>(&mut self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let quiet_period = self.quiet_period;
        trace!(?quiet_period, "arming debounce timer");
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;
            action();
        }));
    }

    /// Cancel any pending action without scheduling a new one.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Whether a timer is currently armed.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn test_fires_once_after_quiet_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(200));

        debouncer.schedule(move || {
            let _ = tx.send("fired");
        });

        assert_eq!(rx.recv().await, Some("fired"));
        assert_eq!(rx.try_recv().ok(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_cancels_pending_action() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(200));

        for i in 0..5 {
            let tx = tx.clone();
            debouncer.schedule(move || {
                let _ = tx.send(i);
            });
            // Not enough time for the timer to elapse between keystrokes.
            tokio::time::advance(Duration::from_millis(50)).await;
        }
        drop(tx);

        // Only the last scheduled action fires.
        assert_eq!(rx.recv().await, Some(4));
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_firing() {
        let (tx, mut rx) = mpsc::unbounded_channel::<&str>();
        let mut debouncer = Debouncer::new(Duration::from_millis(200));

        debouncer.schedule(move || {
            let _ = tx.send("fired");
        });
        debouncer.cancel();
        assert!(!debouncer.is_pending());

        tokio::time::advance(Duration::from_millis(500)).await;
        assert_eq!(rx.recv().await, None);
    }
}
