//! Accumulates DML statements and submits them through the host
//! transaction's batch-update API (spec.md §4.6, C7). A `DmlBatch` shadows
//! the host unit of work that was active when `startBatchDml` was called;
//! the controller restores the host by popping `transactionStack` once the
//! batch ends (spec.md §9: the stack is modeled as a single `optional<host>`
//! slot, never deeper).

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use time::OffsetDateTime;

use crate::db::{Mutation, ResultSet, Statement};
use crate::error::{Error, Result};
use crate::unit_of_work::{UnitOfWork, UnitOfWorkState, UnitOfWorkType};
use crate::value::QueryOptions;

pub struct DmlBatch {
    host: Arc<dyn UnitOfWork>,
    queued: Mutex<Vec<Statement>>,
    state: Mutex<UnitOfWorkState>,
}

impl DmlBatch {
    pub fn new(host: Arc<dyn UnitOfWork>) -> Self {
        DmlBatch {
            host,
            queued: Mutex::new(Vec::new()),
            state: Mutex::new(UnitOfWorkState::New),
        }
    }
}

#[async_trait]
impl UnitOfWork for DmlBatch {
    async fn execute_query(&self, _stmt: &Statement, _opts: &QueryOptions) -> Result<ResultSet> {
        Err(Error::failed_precondition("a DML batch only accepts DML statements"))
    }

    async fn execute_update(&self, stmt: &Statement) -> Result<i64> {
        self.queued.lock().push(stmt.clone());
        *self.state.lock() = UnitOfWorkState::Started;
        // Batched; the row count is only known once `run_batch` executes.
        Ok(0)
    }

    async fn execute_batch_update(&self, stmts: &[Statement]) -> Result<Vec<i64>> {
        self.queued.lock().extend_from_slice(stmts);
        *self.state.lock() = UnitOfWorkState::Started;
        Ok(vec![0; stmts.len()])
    }

    async fn execute_ddl(&self, _stmt: &Statement) -> Result<()> {
        Err(Error::failed_precondition("a DML batch cannot run DDL"))
    }

    async fn write(&self, _mutations: Vec<Mutation>) -> Result<()> {
        Err(Error::failed_precondition("a DML batch cannot buffer mutations"))
    }

    async fn commit(&self) -> Result<()> {
        Err(Error::failed_precondition("a batch is committed via run_batch"))
    }

    async fn rollback(&self) -> Result<()> {
        self.abort_batch().await
    }

    async fn run_batch(&self) -> Result<Vec<i64>> {
        let statements = std::mem::take(&mut *self.queued.lock());
        let result = self.host.execute_batch_update(&statements).await;
        *self.state.lock() = if result.is_ok() {
            UnitOfWorkState::Committed
        } else {
            UnitOfWorkState::Aborted
        };
        result
    }

    async fn abort_batch(&self) -> Result<()> {
        self.queued.lock().clear();
        *self.state.lock() = UnitOfWorkState::RolledBack;
        Ok(())
    }

    async fn cancel(&self) {
        self.host.cancel().await;
    }

    fn state(&self) -> UnitOfWorkState {
        *self.state.lock()
    }

    fn unit_type(&self) -> UnitOfWorkType {
        UnitOfWorkType::DmlBatch
    }

    fn read_timestamp(&self) -> Option<OffsetDateTime> {
        None
    }

    fn commit_timestamp(&self) -> Option<OffsetDateTime> {
        self.host.commit_timestamp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct StubHost {
        ran: AtomicBool,
    }

    #[async_trait]
    impl UnitOfWork for StubHost {
        async fn execute_query(&self, _: &Statement, _: &QueryOptions) -> Result<ResultSet> {
            unreachable!()
        }
        async fn execute_update(&self, _: &Statement) -> Result<i64> {
            unreachable!()
        }
        async fn execute_batch_update(&self, stmts: &[Statement]) -> Result<Vec<i64>> {
            self.ran.store(true, Ordering::SeqCst);
            Ok(vec![1; stmts.len()])
        }
        async fn execute_ddl(&self, _: &Statement) -> Result<()> {
            unreachable!()
        }
        async fn write(&self, _: Vec<Mutation>) -> Result<()> {
            unreachable!()
        }
        async fn commit(&self) -> Result<()> {
            Ok(())
        }
        async fn rollback(&self) -> Result<()> {
            Ok(())
        }
        async fn run_batch(&self) -> Result<Vec<i64>> {
            unreachable!()
        }
        async fn abort_batch(&self) -> Result<()> {
            unreachable!()
        }
        async fn cancel(&self) {}
        fn state(&self) -> UnitOfWorkState {
            UnitOfWorkState::Started
        }
        fn unit_type(&self) -> UnitOfWorkType {
            UnitOfWorkType::ReadWriteTx
        }
        fn read_timestamp(&self) -> Option<OffsetDateTime> {
            None
        }
        fn commit_timestamp(&self) -> Option<OffsetDateTime> {
            None
        }
    }

    #[tokio::test]
    async fn run_batch_delegates_to_host() {
        let host = Arc::new(StubHost { ran: AtomicBool::new(false) });
        let batch = DmlBatch::new(host.clone());
        batch.execute_update(&Statement::new("UPDATE t SET x=1")).await.unwrap();
        let counts = batch.run_batch().await.unwrap();
        assert_eq!(counts, vec![1]);
        assert!(host.ran.load(Ordering::SeqCst));
    }
}
