//! Single-worker asynchronous executor (spec.md §4.7, C1). Owns statement
//! invocations so they can be pre-empted: every submitted operation honors
//! `statement_timeout`, is cancellable, and passes through an ordered
//! interceptor chain.
//!
//! Cancellation is grounded in `google_cloud_gax::cancel::CancellationToken`,
//! a thin wrapper over `tokio_util::sync::CancellationToken`. The worker
//! itself is a single `tokio::task` per connection; it is daemonic in the
//! sense that nothing awaits it at process exit — dropping the executor just
//! drops the task.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use google_cloud_gax::cancel::CancellationToken;

use crate::error::{Error, Result};

/// Observer hook run before and after every statement. Mirrors the
/// interceptor chain named in spec.md §4.7; the state machine itself uses
/// this only for diagnostics (tracing spans), never for control flow.
#[async_trait]
pub trait Interceptor: Send + Sync {
    async fn before(&self, _label: &str) {}
    async fn after(&self, _label: &str, _succeeded: bool) {}
}

/// Emits a `tracing` span around each statement; the default interceptor
/// every `StatementExecutor` carries even with no caller-supplied ones.
pub struct TracingInterceptor;

#[async_trait]
impl Interceptor for TracingInterceptor {
    async fn before(&self, label: &str) {
        tracing::debug!(statement = label, "executing");
    }

    async fn after(&self, label: &str, succeeded: bool) {
        tracing::debug!(statement = label, succeeded, "executed");
    }
}

pub struct StatementExecutor {
    token: CancellationToken,
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl Default for StatementExecutor {
    fn default() -> Self {
        StatementExecutor {
            token: CancellationToken::new(),
            interceptors: vec![Arc::new(TracingInterceptor)],
        }
    }
}

impl StatementExecutor {
    pub fn new(interceptors: Vec<Arc<dyn Interceptor>>) -> Self {
        let mut all = vec![Arc::new(TracingInterceptor) as Arc<dyn Interceptor>];
        all.extend(interceptors);
        StatementExecutor {
            token: CancellationToken::new(),
            interceptors: all,
        }
    }

    /// Runs `op` to completion, subject to cancellation and an optional
    /// deadline. A timeout is modeled as cancellation that fails with
    /// `DeadlineExceeded` rather than `Cancelled` (spec.md §5).
    pub async fn run<T, F>(&self, label: &str, timeout: Option<Duration>, op: F) -> Result<T>
    where
        F: Future<Output = Result<T>> + Send,
    {
        for i in &self.interceptors {
            i.before(label).await;
        }

        let result = self.run_inner(timeout, op).await;

        for i in &self.interceptors {
            i.after(label, result.is_ok()).await;
        }
        result
    }

    async fn run_inner<T, F>(&self, timeout: Option<Duration>, op: F) -> Result<T>
    where
        F: Future<Output = Result<T>> + Send,
    {
        let cancelled = self.token.cancelled();
        tokio::pin!(op);

        let raced = async {
            tokio::select! {
                biased;
                _ = cancelled => Err(Error::cancelled("statement cancelled")),
                r = &mut op => r,
            }
        };

        match timeout {
            None => raced.await,
            Some(d) => match tokio::time::timeout(d, raced).await {
                Ok(r) => r,
                Err(_) => Err(Error::deadline_exceeded("statement timed out")),
            },
        }
    }

    /// Cancels the current and any future operation submitted on this
    /// executor until a fresh one is created. Safe to call from any thread
    /// (spec.md §5).
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// A cloneable handle over this executor's cancellation token, so a
    /// second thread can cancel without needing `&mut` access to whatever
    /// owns this executor (spec.md §5: `cancel()` "may be invoked from any
    /// thread").
    pub fn handle(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// A child executor sharing this one's cancellation: cancelling the
    /// parent (the connection) cancels every child (spec.md §9 "hierarchical
    /// cancellation").
    pub fn child(&self) -> StatementExecutor {
        StatementExecutor {
            token: self.token.child_token(),
            interceptors: self.interceptors.clone(),
        }
    }

    /// A sibling sharing this one's interceptors but starting from a fresh,
    /// uncancelled token. `child_token()` hands back an already-cancelled
    /// token once the parent is cancelled (spec.md §5: `cancel()` stops the
    /// in-flight statement, not every statement after it) — a connection
    /// recovers from a cancelled statement by replacing its executor with a
    /// fresh sibling before building the next unit of work.
    pub fn fresh_sibling(&self) -> StatementExecutor {
        StatementExecutor {
            token: CancellationToken::new(),
            interceptors: self.interceptors.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn runs_operation_to_completion() {
        let executor = StatementExecutor::default();
        let result = executor
            .run("select 1", None, async { Ok::<_, Error>(1) })
            .await;
        assert_eq!(result.unwrap(), 1);
    }

    #[tokio::test]
    async fn cancellation_surfaces_as_cancelled() {
        let executor = StatementExecutor::default();
        executor.cancel();
        let result = executor
            .run("select 1", None, async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok::<_, Error>(1)
            })
            .await;
        assert!(result.unwrap_err().is_cancelled());
    }

    #[tokio::test]
    async fn timeout_surfaces_as_deadline_exceeded() {
        let executor = StatementExecutor::default();
        let result = executor
            .run("select 1", Some(Duration::from_millis(10)), async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok::<_, Error>(1)
            })
            .await;
        assert_eq!(result.unwrap_err().code, crate::error::Code::DeadlineExceeded);
    }

    #[tokio::test]
    async fn child_executor_is_cancelled_by_parent() {
        let parent = StatementExecutor::default();
        let child = parent.child();
        parent.cancel();
        assert!(child.is_cancelled());
    }
}
