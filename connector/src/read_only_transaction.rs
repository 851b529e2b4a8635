//! Multi-statement snapshot read transaction (spec.md §4.4, C4). Opens its
//! server-side snapshot lazily, on the first statement, at the configured
//! staleness; reports the server-assigned read timestamp once open.
//! `commit` and `rollback` are semantically equivalent here: both just
//! release the snapshot (mirrors `ReadOnlyTransaction::begin`/no explicit
//! close in the teacher's `transaction_ro.rs`, except this model always
//! releases explicitly rather than relying on session return-to-pool).

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use time::OffsetDateTime;

use crate::db::{DatabaseClient, Mutation, ResultSet, Statement, TransactionHandle, TransactionMode};
use crate::error::{Error, Result};
use crate::executor::StatementExecutor;
use crate::unit_of_work::{UnitOfWork, UnitOfWorkState, UnitOfWorkType};
use crate::value::{QueryOptions, StalenessBound};

pub struct ReadOnlyTransaction {
    db: Arc<dyn DatabaseClient>,
    staleness: StalenessBound,
    executor: StatementExecutor,
    timeout: Option<Duration>,
    tx: Mutex<Option<TransactionHandle>>,
    state: Mutex<UnitOfWorkState>,
    read_timestamp: Mutex<Option<OffsetDateTime>>,
}

impl ReadOnlyTransaction {
    pub fn new(
        db: Arc<dyn DatabaseClient>,
        staleness: StalenessBound,
        executor: StatementExecutor,
        timeout: Option<Duration>,
    ) -> Self {
        ReadOnlyTransaction {
            db,
            staleness,
            executor,
            timeout,
            tx: Mutex::new(None),
            state: Mutex::new(UnitOfWorkState::New),
            read_timestamp: Mutex::new(None),
        }
    }

    async fn ensure_open(&self) -> Result<TransactionHandle> {
        if let Some(tx) = *self.tx.lock() {
            return Ok(tx);
        }
        let tx = self
            .db
            .begin_transaction(TransactionMode::ReadOnly, Some(self.staleness))
            .await?;
        *self.tx.lock() = Some(tx);
        *self.state.lock() = UnitOfWorkState::Started;
        if let Some(ts) = self.db.read_timestamp(tx).await? {
            *self.read_timestamp.lock() = Some(ts);
        }
        Ok(tx)
    }
}

#[async_trait]
impl UnitOfWork for ReadOnlyTransaction {
    async fn execute_query(&self, stmt: &Statement, opts: &QueryOptions) -> Result<ResultSet> {
        self.executor
            .run("query", self.timeout, async {
                let tx = self.ensure_open().await?;
                self.db.execute_query(tx, stmt, opts).await
            })
            .await
    }

    async fn execute_update(&self, _stmt: &Statement) -> Result<i64> {
        Err(Error::failed_precondition("read-only transaction cannot update"))
    }

    async fn execute_batch_update(&self, _stmts: &[Statement]) -> Result<Vec<i64>> {
        Err(Error::failed_precondition("read-only transaction cannot update"))
    }

    async fn execute_ddl(&self, _stmt: &Statement) -> Result<()> {
        Err(Error::failed_precondition("read-only transaction cannot run DDL"))
    }

    async fn write(&self, _mutations: Vec<Mutation>) -> Result<()> {
        Err(Error::failed_precondition("read-only transaction cannot write"))
    }

    async fn commit(&self) -> Result<()> {
        let tx = self.tx.lock().take();
        if let Some(tx) = tx {
            self.executor
                .run("commit", self.timeout, async { self.db.rollback(tx).await })
                .await?;
        }
        *self.state.lock() = UnitOfWorkState::Committed;
        Ok(())
    }

    async fn rollback(&self) -> Result<()> {
        let tx = self.tx.lock().take();
        if let Some(tx) = tx {
            self.executor
                .run("rollback", self.timeout, async { self.db.rollback(tx).await })
                .await?;
        }
        *self.state.lock() = UnitOfWorkState::RolledBack;
        Ok(())
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
        UnitOfWorkType::ReadOnlyTx
    }

    fn read_timestamp(&self) -> Option<OffsetDateTime> {
        *self.read_timestamp.lock()
    }

    fn commit_timestamp(&self) -> Option<OffsetDateTime> {
        None
    }
}
