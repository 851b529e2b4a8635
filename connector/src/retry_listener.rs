//! Observers of read/write transaction retry attempts (spec.md §4.5, §9).
//! Notified in registration order, mirroring the ordered interceptor chain
//! `StatementExecutor` (C1) runs around each statement.

use async_trait::async_trait;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetryEvent {
    /// A new retry attempt has begun after an `Aborted` was observed.
    RetryStarted { attempt: u32 },
    /// The retry itself was aborted mid-replay; a further attempt follows.
    RetryAbortedAndRestarting { attempt: u32 },
    /// Replay finished and matched the recorded history; commit resumed.
    RetrySucceeded { attempt: u32 },
    /// A replayed statement's result diverged from the recorded one; the
    /// retry is abandoned and `Aborted` is surfaced to the caller.
    RetryDifferentResult { attempt: u32 },
}

#[async_trait]
pub trait TransactionRetryListener: Send + Sync {
    async fn on_event(&self, event: RetryEvent);
}

/// Fan-out to an ordered sequence of listeners, swallowing nothing: every
/// listener is notified for every event regardless of what prior listeners
/// do.
pub(crate) async fn notify_all(listeners: &[std::sync::Arc<dyn TransactionRetryListener>], event: RetryEvent) {
    for listener in listeners {
        listener.on_event(event).await;
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    pub struct RecordingListener {
        pub events: Mutex<Vec<RetryEvent>>,
    }

    #[async_trait]
    impl TransactionRetryListener for RecordingListener {
        async fn on_event(&self, event: RetryEvent) {
            self.events.lock().push(event);
        }
    }
}
