//! One-shot unit of work for autocommit mode (spec.md §4.3, C3). Executes
//! exactly one statement and becomes terminal.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use time::OffsetDateTime;

use crate::db::{DatabaseClient, Mutation, ResultSet, Statement, TransactionMode};
use crate::error::{Error, Result};
use crate::executor::StatementExecutor;
use crate::unit_of_work::{UnitOfWork, UnitOfWorkState, UnitOfWorkType};
use crate::value::{AutocommitDmlMode, QueryOptions, StalenessBound};

pub struct SingleUseTransaction {
    db: Arc<dyn DatabaseClient>,
    read_only: bool,
    staleness: StalenessBound,
    dml_mode: AutocommitDmlMode,
    executor: StatementExecutor,
    timeout: Option<Duration>,
    state: Mutex<UnitOfWorkState>,
    read_timestamp: Mutex<Option<OffsetDateTime>>,
    commit_timestamp: Mutex<Option<OffsetDateTime>>,
}

impl SingleUseTransaction {
    pub fn new(
        db: Arc<dyn DatabaseClient>,
        read_only: bool,
        staleness: StalenessBound,
        dml_mode: AutocommitDmlMode,
        executor: StatementExecutor,
        timeout: Option<Duration>,
    ) -> Self {
        SingleUseTransaction {
            db,
            read_only,
            staleness,
            dml_mode,
            executor,
            timeout,
            state: Mutex::new(UnitOfWorkState::New),
            read_timestamp: Mutex::new(None),
            commit_timestamp: Mutex::new(None),
        }
    }

    fn finish(&self, ok: bool) {
        *self.state.lock() = if ok {
            UnitOfWorkState::Committed
        } else {
            UnitOfWorkState::Aborted
        };
    }

    fn check_not_used_yet(&self) -> Result<()> {
        if *self.state.lock() != UnitOfWorkState::New {
            return Err(Error::failed_precondition(
                "a single-use transaction executes exactly one statement",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl UnitOfWork for SingleUseTransaction {
    async fn execute_query(&self, stmt: &Statement, _opts: &crate::value::QueryOptions) -> Result<ResultSet> {
        self.check_not_used_yet()?;
        *self.state.lock() = UnitOfWorkState::Started;
        let result = self
            .executor
            .run("query", self.timeout, async { self.db.single_use_query(self.staleness, stmt).await })
            .await;
        self.finish(result.is_ok());
        result.map(|r| {
            *self.read_timestamp.lock() = r.read_timestamp;
            r.result_set
        })
    }

    async fn execute_update(&self, stmt: &Statement) -> Result<i64> {
        self.check_not_used_yet()?;
        if self.read_only {
            return Err(Error::failed_precondition("connection is read-only"));
        }
        *self.state.lock() = UnitOfWorkState::Started;

        let result = match self.dml_mode {
            AutocommitDmlMode::PartitionedNonAtomic => {
                self.executor
                    .run("update", self.timeout, async { self.db.partitioned_update(stmt).await })
                    .await
            }
            AutocommitDmlMode::Transactional => self.run_as_one_statement_transaction(stmt, false).await,
            AutocommitDmlMode::TransactionalWithRetry => self.run_as_one_statement_transaction(stmt, true).await,
        };
        self.finish(result.is_ok());
        result
    }

    async fn execute_batch_update(&self, stmts: &[Statement]) -> Result<Vec<i64>> {
        self.check_not_used_yet()?;
        if self.read_only {
            return Err(Error::failed_precondition("connection is read-only"));
        }
        *self.state.lock() = UnitOfWorkState::Started;
        let result = self
            .executor
            .run("batch_update", self.timeout, async {
                let tx = self.db.begin_transaction(TransactionMode::ReadWrite, None).await?;
                match self.db.execute_batch_update(tx, stmts).await {
                    Ok(counts) => match self.db.commit(tx).await {
                        Ok(c) => Ok((counts, c.commit_timestamp)),
                        Err(e) => Err(e),
                    },
                    Err(e) => {
                        let _ = self.db.rollback(tx).await;
                        Err(e)
                    }
                }
            })
            .await;
        let final_result = match result {
            Ok((counts, ts)) => {
                *self.commit_timestamp.lock() = Some(ts);
                Ok(counts)
            }
            Err(e) => Err(e),
        };
        self.finish(final_result.is_ok());
        final_result
    }

    async fn execute_ddl(&self, _stmt: &Statement) -> Result<()> {
        Err(Error::failed_precondition(
            "DDL must be submitted through a DDL batch",
        ))
    }

    async fn write(&self, mutations: Vec<Mutation>) -> Result<()> {
        self.check_not_used_yet()?;
        if self.read_only {
            return Err(Error::failed_precondition("connection is read-only"));
        }
        *self.state.lock() = UnitOfWorkState::Started;
        let result = self
            .executor
            .run("write", self.timeout, async {
                let tx = self.db.begin_transaction(TransactionMode::ReadWrite, None).await?;
                match self.db.write(tx, mutations).await {
                    Ok(()) => match self.db.commit(tx).await {
                        Ok(c) => Ok(c.commit_timestamp),
                        Err(e) => Err(e),
                    },
                    Err(e) => {
                        let _ = self.db.rollback(tx).await;
                        Err(e)
                    }
                }
            })
            .await;
        let final_result = match result {
            Ok(ts) => {
                *self.commit_timestamp.lock() = Some(ts);
                Ok(())
            }
            Err(e) => Err(e),
        };
        self.finish(final_result.is_ok());
        final_result
    }

    async fn commit(&self) -> Result<()> {
        Ok(())
    }

    async fn rollback(&self) -> Result<()> {
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
        // Not a real state-machine tag: the controller never builds a
        // single-use transaction by consulting `unitOfWorkType` (spec.md's
        // `ensureUnitOfWork` checks autocommit/inTransaction/inBatch first).
        UnitOfWorkType::ReadWriteTx
    }

    fn read_timestamp(&self) -> Option<OffsetDateTime> {
        *self.read_timestamp.lock()
    }

    fn commit_timestamp(&self) -> Option<OffsetDateTime> {
        *self.commit_timestamp.lock()
    }
}

impl SingleUseTransaction {
    async fn run_as_one_statement_transaction(&self, stmt: &Statement, retry_on_abort: bool) -> Result<i64> {
        let attempt = || {
            self.executor.run("update", self.timeout, async {
                let tx = self.db.begin_transaction(TransactionMode::ReadWrite, None).await?;
                match self.db.execute_update(tx, stmt).await {
                    Ok(count) => match self.db.commit(tx).await {
                        Ok(c) => Ok((count, c.commit_timestamp)),
                        Err(e) => Err(e),
                    },
                    Err(e) => {
                        let _ = self.db.rollback(tx).await;
                        Err(e)
                    }
                }
            })
        };

        let (count, ts) = match attempt().await {
            Err(e) if retry_on_abort && e.is_aborted() => attempt().await,
            other => other,
        }?;
        *self.commit_timestamp.lock() = Some(ts);
        Ok(count)
    }
}
