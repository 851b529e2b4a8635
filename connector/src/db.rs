//! External collaborator boundary (spec.md §6): the database RPC client and
//! the DDL admin client. Narrow traits only — no wire protocol, no
//! authentication, no session-pool implementation lives here.

use std::collections::BTreeMap;

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::error::Result;
use crate::value::{QueryOptions, StalenessBound};

/// A bound SQL statement. Parameter binding/typing is the parser's and the
/// caller's concern; this type only carries what the database client needs
/// to send the request.
#[derive(Clone, Debug, Default)]
pub struct Statement {
    pub sql: String,
    pub params: BTreeMap<String, SpannerValue>,
}

impl Statement {
    pub fn new(sql: impl Into<String>) -> Self {
        Statement {
            sql: sql.into(),
            params: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: SpannerValue) -> Self {
        self.params.insert(name.into(), value);
        self
    }
}

/// A column value. Deliberately small: the full Spanner type lattice
/// (arrays, structs, numeric, json, ...) is out of scope here — this is a
/// boundary type, not a value-conversion library.
#[derive(Clone, Debug, PartialEq)]
pub enum SpannerValue {
    Null,
    Bool(bool),
    Int64(i64),
    Float64(f64),
    String(String),
    Bytes(Vec<u8>),
    Timestamp(OffsetDateTime),
}

pub type Row = Vec<SpannerValue>;

/// The result of a query, consumed via a narrow interface per spec.md §1.
#[derive(Clone, Debug, Default)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

/// A mutation to buffer into a read/write transaction or apply directly.
/// Mirrors `gcloud_spanner::mutation`'s five operations.
#[derive(Clone, Debug)]
pub enum Mutation {
    Insert {
        table: String,
        columns: Vec<String>,
        values: Row,
    },
    Update {
        table: String,
        columns: Vec<String>,
        values: Row,
    },
    Replace {
        table: String,
        columns: Vec<String>,
        values: Row,
    },
    InsertOrUpdate {
        table: String,
        columns: Vec<String>,
        values: Row,
    },
    Delete {
        table: String,
        key: Row,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransactionMode {
    ReadOnly,
    ReadWrite,
    PartitionedDml,
}

/// An opaque handle to a server-side transaction, returned by
/// `DatabaseClient::begin_transaction` and threaded through every
/// subsequent call that belongs to that transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransactionHandle(pub u64);

#[derive(Clone, Copy, Debug)]
pub struct CommitResult {
    pub commit_timestamp: OffsetDateTime,
}

/// Result of [`DatabaseClient::single_use_query`]: the rows plus the read
/// timestamp the server chose for this snapshot, when the client can report
/// one.
#[derive(Clone, Debug, Default)]
pub struct SingleUseQueryResult {
    pub result_set: ResultSet,
    pub read_timestamp: Option<OffsetDateTime>,
}

/// The database RPC client collaborator (spec.md §6). Production is
/// `adapter::SpannerDatabaseClient`, backed by `gcloud_spanner::client::
/// Client`; tests use `testing::MockDatabaseClient`.
#[async_trait]
pub trait DatabaseClient: Send + Sync {
    async fn begin_transaction(
        &self,
        mode: TransactionMode,
        staleness: Option<StalenessBound>,
    ) -> Result<TransactionHandle>;

    async fn execute_query(
        &self,
        tx: TransactionHandle,
        stmt: &Statement,
        opts: &QueryOptions,
    ) -> Result<ResultSet>;

    async fn execute_update(&self, tx: TransactionHandle, stmt: &Statement) -> Result<i64>;

    async fn execute_batch_update(
        &self,
        tx: TransactionHandle,
        stmts: &[Statement],
    ) -> Result<Vec<i64>>;

    async fn write(&self, tx: TransactionHandle, mutations: Vec<Mutation>) -> Result<()>;

    async fn commit(&self, tx: TransactionHandle) -> Result<CommitResult>;

    async fn rollback(&self, tx: TransactionHandle) -> Result<()>;

    /// Read timestamp chosen by the server for a read-only transaction,
    /// available once the snapshot has opened (after the first statement
    /// or immediately for `single_use_query`).
    async fn read_timestamp(&self, tx: TransactionHandle) -> Result<Option<OffsetDateTime>>;

    /// A genuinely single-use read: no `TransactionHandle` is allocated, but
    /// the server still picks a read timestamp for the snapshot, reported
    /// alongside the rows.
    async fn single_use_query(&self, staleness: StalenessBound, stmt: &Statement) -> Result<SingleUseQueryResult>;

    /// Large-scale, non-atomic update executed as multiple server-side
    /// partitions. Returns a lower-bound affected-row count.
    async fn partitioned_update(&self, stmt: &Statement) -> Result<i64>;
}

/// The DDL admin client collaborator (spec.md §6).
#[async_trait]
pub trait DdlAdminClient: Send + Sync {
    async fn update_database_ddl(&self, statements: Vec<String>) -> Result<()>;
}

/// Production implementation over `gcloud_spanner::client::Client`.
pub mod adapter;

/// In-memory test double, exposed outside the crate under the `testing`
/// feature for integration tests.
#[cfg(any(test, feature = "testing"))]
pub mod testing;
