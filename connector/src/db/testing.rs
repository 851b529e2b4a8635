//! In-memory test double for [`super::DatabaseClient`]/[`super::DdlAdminClient`]
//! (spec.md §6). No network, no real Spanner; deterministic enough to let
//! [`crate::read_write_transaction`]'s replay logic be exercised by injecting
//! a single `Aborted` on a future commit or statement.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use time::OffsetDateTime;

use super::{
    CommitResult, DatabaseClient, DdlAdminClient, Mutation, ResultSet, SingleUseQueryResult,
    SpannerValue, Statement, TransactionHandle, TransactionMode,
};
use crate::error::{Error, Result};
use crate::value::{QueryOptions, StalenessBound};

#[derive(Default)]
struct State {
    next_tx: u64,
    open: HashMap<u64, TransactionMode>,
    rows: Vec<Vec<SpannerValue>>,
    update_count: i64,
    abort_next_commit: bool,
    abort_next_statement: bool,
    ddl_statements: Vec<String>,
}

#[derive(Default)]
pub struct MockDatabaseClient {
    state: Mutex<State>,
}

impl MockDatabaseClient {
    /// The next `commit` call aborts exactly once.
    pub fn abort_next_commit(&self) {
        self.state.lock().abort_next_commit = true;
    }

    /// The next `execute_update`/`execute_batch_update` call aborts exactly
    /// once.
    pub fn abort_next_statement(&self) {
        self.state.lock().abort_next_statement = true;
    }

    pub fn ddl_statements(&self) -> Vec<String> {
        self.state.lock().ddl_statements.clone()
    }

    pub fn row_count(&self) -> usize {
        self.state.lock().rows.len()
    }
}

#[async_trait]
impl DatabaseClient for MockDatabaseClient {
    async fn begin_transaction(
        &self,
        mode: TransactionMode,
        _staleness: Option<StalenessBound>,
    ) -> Result<TransactionHandle> {
        let mut state = self.state.lock();
        state.next_tx += 1;
        let id = state.next_tx;
        state.open.insert(id, mode);
        Ok(TransactionHandle(id))
    }

    async fn execute_query(
        &self,
        tx: TransactionHandle,
        _stmt: &Statement,
        _opts: &QueryOptions,
    ) -> Result<ResultSet> {
        let state = self.state.lock();
        if !state.open.contains_key(&tx.0) {
            return Err(Error::failed_precondition("unknown transaction"));
        }
        Ok(ResultSet {
            columns: vec!["n".into()],
            rows: vec![vec![SpannerValue::Int64(state.update_count)]],
        })
    }

    async fn execute_update(&self, tx: TransactionHandle, _stmt: &Statement) -> Result<i64> {
        let mut state = self.state.lock();
        if !state.open.contains_key(&tx.0) {
            return Err(Error::failed_precondition("unknown transaction"));
        }
        if state.abort_next_statement {
            state.abort_next_statement = false;
            return Err(Error::aborted("injected abort"));
        }
        state.update_count += 1;
        Ok(1)
    }

    async fn execute_batch_update(&self, tx: TransactionHandle, stmts: &[Statement]) -> Result<Vec<i64>> {
        let mut counts = Vec::with_capacity(stmts.len());
        for stmt in stmts {
            counts.push(self.execute_update(tx, stmt).await?);
        }
        Ok(counts)
    }

    async fn write(&self, tx: TransactionHandle, mutations: Vec<Mutation>) -> Result<()> {
        let mut state = self.state.lock();
        if !state.open.contains_key(&tx.0) {
            return Err(Error::failed_precondition("unknown transaction"));
        }
        for m in mutations {
            match m {
                Mutation::Insert { values, .. }
                | Mutation::Update { values, .. }
                | Mutation::Replace { values, .. }
                | Mutation::InsertOrUpdate { values, .. } => state.rows.push(values),
                Mutation::Delete { .. } => {}
            }
        }
        Ok(())
    }

    async fn commit(&self, tx: TransactionHandle) -> Result<CommitResult> {
        let mut state = self.state.lock();
        if state.open.remove(&tx.0).is_none() {
            return Err(Error::failed_precondition("unknown transaction"));
        }
        if state.abort_next_commit {
            state.abort_next_commit = false;
            return Err(Error::aborted("injected abort"));
        }
        Ok(CommitResult {
            commit_timestamp: OffsetDateTime::now_utc(),
        })
    }

    async fn rollback(&self, tx: TransactionHandle) -> Result<()> {
        self.state.lock().open.remove(&tx.0);
        Ok(())
    }

    async fn read_timestamp(&self, tx: TransactionHandle) -> Result<Option<OffsetDateTime>> {
        if self.state.lock().open.contains_key(&tx.0) {
            Ok(Some(OffsetDateTime::now_utc()))
        } else {
            Ok(None)
        }
    }

    async fn single_use_query(&self, _staleness: StalenessBound, _stmt: &Statement) -> Result<SingleUseQueryResult> {
        Ok(SingleUseQueryResult {
            result_set: ResultSet {
                columns: vec!["n".into()],
                rows: Vec::new(),
            },
            read_timestamp: Some(OffsetDateTime::now_utc()),
        })
    }

    async fn partitioned_update(&self, _stmt: &Statement) -> Result<i64> {
        Ok(0)
    }
}

#[async_trait]
impl DdlAdminClient for MockDatabaseClient {
    async fn update_database_ddl(&self, statements: Vec<String>) -> Result<()> {
        self.state.lock().ddl_statements.extend(statements);
        Ok(())
    }
}
