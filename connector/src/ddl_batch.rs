//! Accumulates DDL statements and submits them as one admin call
//! (spec.md §4.6, C6).

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use time::OffsetDateTime;

use crate::db::{DdlAdminClient, Mutation, ResultSet, Statement};
use crate::error::{Error, Result};
use crate::executor::StatementExecutor;
use crate::unit_of_work::{UnitOfWork, UnitOfWorkState, UnitOfWorkType};
use crate::value::QueryOptions;

pub struct DdlBatch {
    ddl: Arc<dyn DdlAdminClient>,
    executor: StatementExecutor,
    timeout: Option<Duration>,
    queued: Mutex<Vec<String>>,
    state: Mutex<UnitOfWorkState>,
}

impl DdlBatch {
    pub fn new(ddl: Arc<dyn DdlAdminClient>, executor: StatementExecutor, timeout: Option<Duration>) -> Self {
        DdlBatch {
            ddl,
            executor,
            timeout,
            queued: Mutex::new(Vec::new()),
            state: Mutex::new(UnitOfWorkState::New),
        }
    }
}

#[async_trait]
impl UnitOfWork for DdlBatch {
    async fn execute_query(&self, _stmt: &Statement, _opts: &QueryOptions) -> Result<ResultSet> {
        Err(Error::failed_precondition("a DDL batch only accepts DDL statements"))
    }

    async fn execute_update(&self, _stmt: &Statement) -> Result<i64> {
        Err(Error::failed_precondition("a DDL batch only accepts DDL statements"))
    }

    async fn execute_batch_update(&self, _stmts: &[Statement]) -> Result<Vec<i64>> {
        Err(Error::failed_precondition("a DDL batch only accepts DDL statements"))
    }

    async fn execute_ddl(&self, stmt: &Statement) -> Result<()> {
        self.queued.lock().push(stmt.sql.clone());
        *self.state.lock() = UnitOfWorkState::Started;
        Ok(())
    }

    async fn write(&self, _mutations: Vec<Mutation>) -> Result<()> {
        Err(Error::failed_precondition("a DDL batch cannot write mutations"))
    }

    async fn commit(&self) -> Result<()> {
        Err(Error::failed_precondition("a batch is committed via run_batch"))
    }

    async fn rollback(&self) -> Result<()> {
        self.abort_batch().await
    }

    async fn run_batch(&self) -> Result<Vec<i64>> {
        let statements = std::mem::take(&mut *self.queued.lock());
        let result = self
            .executor
            .run("run_batch", self.timeout, async { self.ddl.update_database_ddl(statements).await })
            .await;
        *self.state.lock() = if result.is_ok() {
            UnitOfWorkState::Committed
        } else {
            UnitOfWorkState::Aborted
        };
        result.map(|()| Vec::new())
    }

    async fn abort_batch(&self) -> Result<()> {
        self.queued.lock().clear();
        *self.state.lock() = UnitOfWorkState::RolledBack;
        Ok(())
    }

    async fn cancel(&self) {
        self.executor.cancel();
    }

    fn state(&self) -> UnitOfWorkState {
        *self.state.lock()
    }

    fn unit_type(&self) -> UnitOfWorkType {
        UnitOfWorkType::DdlBatch
    }

    fn read_timestamp(&self) -> Option<OffsetDateTime> {
        None
    }

    fn commit_timestamp(&self) -> Option<OffsetDateTime> {
        None
    }
}
