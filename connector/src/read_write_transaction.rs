//! Multi-statement mutating transaction with internal replay on server-side
//! abort (spec.md §4.5, C5) — the most complex unit of work. Holds an
//! ordered history of every statement and its recorded outcome; on
//! `Aborted`, if `retry_aborts_internally` is set, begins a fresh server
//! transaction and replays the history, comparing each replayed result
//! against the recorded one via [`crate::row_digest`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use time::OffsetDateTime;

use crate::db::{DatabaseClient, Mutation, ResultSet, Statement, TransactionHandle, TransactionMode};
use crate::error::{Error, Result};
use crate::executor::StatementExecutor;
use crate::retry_listener::{notify_all, RetryEvent, TransactionRetryListener};
use crate::row_digest::{RecordedOutcome, RowDigest};
use crate::unit_of_work::{UnitOfWork, UnitOfWorkState, UnitOfWorkType};
use crate::value::QueryOptions;

const MAX_RETRY_ATTEMPTS: u32 = 5;

enum HistoryStep {
    Query(Statement, RecordedOutcome),
    Update(Statement, RecordedOutcome),
    BatchUpdate(Vec<Statement>, Vec<i64>),
}

struct Inner {
    tx: TransactionHandle,
    history: Vec<HistoryStep>,
    buffered_mutations: Vec<Mutation>,
}

pub struct ReadWriteTransaction {
    db: Arc<dyn DatabaseClient>,
    retry_aborts_internally: bool,
    listeners: Vec<Arc<dyn TransactionRetryListener>>,
    executor: StatementExecutor,
    timeout: Option<Duration>,
    inner: tokio::sync::Mutex<Inner>,
    state: Mutex<UnitOfWorkState>,
    commit_timestamp: Mutex<Option<OffsetDateTime>>,
}

impl ReadWriteTransaction {
    pub async fn begin(
        db: Arc<dyn DatabaseClient>,
        retry_aborts_internally: bool,
        listeners: Vec<Arc<dyn TransactionRetryListener>>,
        executor: StatementExecutor,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let tx = db.begin_transaction(TransactionMode::ReadWrite, None).await?;
        Ok(ReadWriteTransaction {
            db,
            retry_aborts_internally,
            listeners,
            executor,
            timeout,
            inner: tokio::sync::Mutex::new(Inner {
                tx,
                history: Vec::new(),
                buffered_mutations: Vec::new(),
            }),
            state: Mutex::new(UnitOfWorkState::Started),
            commit_timestamp: Mutex::new(None),
        })
    }

    /// Runs the retry algorithm of spec.md §4.5: begin a new transaction,
    /// replay the recorded history, comparing each outcome. Returns the new
    /// handle on success; on exhaustion or divergence surfaces `Aborted`.
    async fn retry(&self, inner: &mut Inner) -> Result<()> {
        let mut backoff = Duration::from_millis(10);
        for attempt in 1..=MAX_RETRY_ATTEMPTS {
            notify_all(&self.listeners, RetryEvent::RetryStarted { attempt }).await;

            let new_tx = self
                .executor
                .run("begin", self.timeout, async {
                    self.db.begin_transaction(TransactionMode::ReadWrite, None).await
                })
                .await?;
            match self.replay(new_tx, &inner.history).await {
                Ok(()) => {
                    inner.tx = new_tx;
                    notify_all(&self.listeners, RetryEvent::RetrySucceeded { attempt }).await;
                    return Ok(());
                }
                Err(e) if e.is_aborted() => {
                    notify_all(&self.listeners, RetryEvent::RetryAbortedAndRestarting { attempt }).await;
                    tokio::time::sleep(backoff).await;
                    backoff *= 2;
                    continue;
                }
                Err(e) => return Err(e),
            }
        }
        Err(Error::aborted("exhausted retry attempts replaying transaction history"))
    }

    async fn replay(&self, tx: TransactionHandle, history: &[HistoryStep]) -> Result<()> {
        for step in history {
            match step {
                HistoryStep::Query(stmt, recorded) => {
                    let result = self
                        .executor
                        .run("query", self.timeout, async { self.db.execute_query(tx, stmt, &QueryOptions::default()).await })
                        .await?;
                    if !recorded.matches_query(&result) {
                        notify_all(
                            &self.listeners,
                            RetryEvent::RetryDifferentResult { attempt: 0 },
                        )
                        .await;
                        return Err(Error::aborted("replayed query result diverged"));
                    }
                }
                HistoryStep::Update(stmt, recorded) => {
                    let count = self
                        .executor
                        .run("update", self.timeout, async { self.db.execute_update(tx, stmt).await })
                        .await?;
                    if !recorded.matches_update(count) {
                        notify_all(
                            &self.listeners,
                            RetryEvent::RetryDifferentResult { attempt: 0 },
                        )
                        .await;
                        return Err(Error::aborted("replayed update result diverged"));
                    }
                }
                HistoryStep::BatchUpdate(stmts, recorded_counts) => {
                    let counts = self
                        .executor
                        .run("batch_update", self.timeout, async { self.db.execute_batch_update(tx, stmts).await })
                        .await?;
                    if &counts != recorded_counts {
                        notify_all(
                            &self.listeners,
                            RetryEvent::RetryDifferentResult { attempt: 0 },
                        )
                        .await;
                        return Err(Error::aborted("replayed batch update result diverged"));
                    }
                }
            }
        }
        Ok(())
    }
}

#[async_trait]
impl UnitOfWork for ReadWriteTransaction {
    async fn execute_query(&self, stmt: &Statement, opts: &QueryOptions) -> Result<ResultSet> {
        let mut inner = self.inner.lock().await;
        loop {
            let result = self
                .executor
                .run("query", self.timeout, async { self.db.execute_query(inner.tx, stmt, opts).await })
                .await;
            match result {
                Ok(rs) => {
                    inner
                        .history
                        .push(HistoryStep::Query(stmt.clone(), RecordedOutcome::Query(RowDigest::of(&rs))));
                    return Ok(rs);
                }
                Err(e) if e.is_aborted() && self.retry_aborts_internally => {
                    self.retry(&mut inner).await?;
                    continue;
                }
                Err(e) => {
                    *self.state.lock() = UnitOfWorkState::Aborted;
                    return Err(e);
                }
            }
        }
    }

    async fn execute_update(&self, stmt: &Statement) -> Result<i64> {
        let mut inner = self.inner.lock().await;
        loop {
            let result = self
                .executor
                .run("update", self.timeout, async { self.db.execute_update(inner.tx, stmt).await })
                .await;
            match result {
                Ok(count) => {
                    inner
                        .history
                        .push(HistoryStep::Update(stmt.clone(), RecordedOutcome::Update(count)));
                    return Ok(count);
                }
                Err(e) if e.is_aborted() && self.retry_aborts_internally => {
                    self.retry(&mut inner).await?;
                    continue;
                }
                Err(e) => {
                    *self.state.lock() = UnitOfWorkState::Aborted;
                    return Err(e);
                }
            }
        }
    }

    async fn execute_batch_update(&self, stmts: &[Statement]) -> Result<Vec<i64>> {
        let mut inner = self.inner.lock().await;
        loop {
            let result = self
                .executor
                .run("batch_update", self.timeout, async { self.db.execute_batch_update(inner.tx, stmts).await })
                .await;
            match result {
                Ok(counts) => {
                    inner
                        .history
                        .push(HistoryStep::BatchUpdate(stmts.to_vec(), counts.clone()));
                    return Ok(counts);
                }
                Err(e) if e.is_aborted() && self.retry_aborts_internally => {
                    self.retry(&mut inner).await?;
                    continue;
                }
                Err(e) => {
                    *self.state.lock() = UnitOfWorkState::Aborted;
                    return Err(e);
                }
            }
        }
    }

    async fn execute_ddl(&self, _stmt: &Statement) -> Result<()> {
        Err(Error::failed_precondition("DDL cannot run inside a read/write transaction"))
    }

    async fn write(&self, mutations: Vec<Mutation>) -> Result<()> {
        let mut inner = self.inner.lock().await;
        inner.buffered_mutations.extend(mutations);
        Ok(())
    }

    async fn commit(&self) -> Result<()> {
        let mut inner = self.inner.lock().await;
        *self.state.lock() = UnitOfWorkState::Committing;
        loop {
            let mutations = inner.buffered_mutations.clone();
            if !mutations.is_empty() {
                let write_result = self
                    .executor
                    .run("write", self.timeout, async { self.db.write(inner.tx, mutations).await })
                    .await;
                if let Err(e) = write_result {
                    if e.is_aborted() && self.retry_aborts_internally {
                        self.retry(&mut inner).await?;
                        continue;
                    }
                    *self.state.lock() = UnitOfWorkState::Aborted;
                    return Err(e);
                }
            }
            let commit_result = self
                .executor
                .run("commit", self.timeout, async { self.db.commit(inner.tx).await })
                .await;
            match commit_result {
                Ok(c) => {
                    *self.commit_timestamp.lock() = Some(c.commit_timestamp);
                    *self.state.lock() = UnitOfWorkState::Committed;
                    return Ok(());
                }
                Err(e) if e.is_aborted() && self.retry_aborts_internally => {
                    self.retry(&mut inner).await?;
                    continue;
                }
                Err(e) => {
                    *self.state.lock() = UnitOfWorkState::Aborted;
                    return Err(e);
                }
            }
        }
    }

    async fn rollback(&self) -> Result<()> {
        let inner = self.inner.lock().await;
        let result = self
            .executor
            .run("rollback", self.timeout, async { self.db.rollback(inner.tx).await })
            .await;
        *self.state.lock() = UnitOfWorkState::RolledBack;
        result
    }

    async fn run_batch(&self) -> Result<Vec<i64>> {
        Err(Error::failed_precondition("not a batch"))
    }

    async fn abort_batch(&self) -> Result<()> {
        Err(Error::failed_precondition("not a batch"))
    }

    async fn cancel(&self) {
        self.executor.cancel();
    }

    fn state(&self) -> UnitOfWorkState {
        *self.state.lock()
    }

    fn unit_type(&self) -> UnitOfWorkType {
        UnitOfWorkType::ReadWriteTx
    }

    fn read_timestamp(&self) -> Option<OffsetDateTime> {
        None
    }

    fn commit_timestamp(&self) -> Option<OffsetDateTime> {
        *self.commit_timestamp.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testing::MockDatabaseClient;
    use crate::retry_listener::testing::RecordingListener;

    #[tokio::test]
    async fn commits_without_retry_when_no_abort() {
        let db = Arc::new(MockDatabaseClient::default());
        let rw = ReadWriteTransaction::begin(db.clone(), true, vec![], StatementExecutor::default(), None)
            .await
            .unwrap();
        rw.execute_update(&Statement::new("UPDATE t SET x=1")).await.unwrap();
        rw.commit().await.unwrap();
        assert_eq!(rw.state(), UnitOfWorkState::Committed);
        assert!(rw.commit_timestamp().is_some());
    }

    #[tokio::test]
    async fn replays_history_and_succeeds_after_abort_once() {
        let db = Arc::new(MockDatabaseClient::default());
        db.abort_next_commit();
        let listener = Arc::new(RecordingListener::default());
        let rw = ReadWriteTransaction::begin(
            db.clone(),
            true,
            vec![listener.clone()],
            StatementExecutor::default(),
            None,
        )
        .await
        .unwrap();
        rw.execute_update(&Statement::new("UPDATE t SET x=1")).await.unwrap();
        rw.commit().await.unwrap();
        assert_eq!(rw.state(), UnitOfWorkState::Committed);
        let events = listener.events.lock();
        assert!(events.iter().any(|e| matches!(e, RetryEvent::RetryStarted { .. })));
        assert!(events.iter().any(|e| matches!(e, RetryEvent::RetrySucceeded { .. })));
    }

    #[tokio::test]
    async fn surfaces_aborted_when_retry_disabled() {
        let db = Arc::new(MockDatabaseClient::default());
        db.abort_next_commit();
        let rw = ReadWriteTransaction::begin(db.clone(), false, vec![], StatementExecutor::default(), None)
            .await
            .unwrap();
        rw.execute_update(&Statement::new("UPDATE t SET x=1")).await.unwrap();
        let err = rw.commit().await.unwrap_err();
        assert!(err.is_aborted());
        assert_eq!(rw.state(), UnitOfWorkState::Aborted);
    }
}
