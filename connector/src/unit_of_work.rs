//! The abstract execution-vehicle contract (spec.md §4.2, C2) satisfied by
//! every concrete unit of work: [`crate::single_use_transaction::SingleUseTransaction`],
//! [`crate::read_only_transaction::ReadOnlyTransaction`],
//! [`crate::read_write_transaction::ReadWriteTransaction`],
//! [`crate::ddl_batch::DdlBatch`], [`crate::dml_batch::DmlBatch`].
//!
//! Modeled as a trait object rather than a tagged enum: the variants have
//! genuinely different method sets (only `ReadWriteTransaction` buffers
//! writes and replays on abort; only the batches expose `run_batch`), so a
//! narrow capability trait is cleaner than a giant match in the controller.
//! `UnitOfWorkType` is the only piece of variant identity the controller
//! sees.

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::db::{Mutation, ResultSet, Statement};
use crate::error::Result;
use crate::value::QueryOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitOfWorkState {
    New,
    Started,
    Committing,
    Committed,
    RolledBack,
    Aborted,
}

impl UnitOfWorkState {
    pub fn is_active(self) -> bool {
        !matches!(
            self,
            UnitOfWorkState::Committed | UnitOfWorkState::RolledBack | UnitOfWorkState::Aborted
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitOfWorkType {
    ReadOnlyTx,
    ReadWriteTx,
    DdlBatch,
    DmlBatch,
}

#[async_trait]
pub trait UnitOfWork: Send + Sync {
    async fn execute_query(&self, stmt: &Statement, opts: &QueryOptions) -> Result<ResultSet>;
    async fn execute_update(&self, stmt: &Statement) -> Result<i64>;
    async fn execute_batch_update(&self, stmts: &[Statement]) -> Result<Vec<i64>>;
    async fn execute_ddl(&self, stmt: &Statement) -> Result<()>;
    async fn write(&self, mutations: Vec<Mutation>) -> Result<()>;

    async fn commit(&self) -> Result<()>;
    async fn rollback(&self) -> Result<()>;
    async fn run_batch(&self) -> Result<Vec<i64>>;
    async fn abort_batch(&self) -> Result<()>;
    async fn cancel(&self);

    fn state(&self) -> UnitOfWorkState;
    fn is_active(&self) -> bool {
        self.state().is_active()
    }
    fn unit_type(&self) -> UnitOfWorkType;

    fn read_timestamp(&self) -> Option<OffsetDateTime>;
    fn commit_timestamp(&self) -> Option<OffsetDateTime>;
}
