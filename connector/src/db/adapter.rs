//! Production [`DatabaseClient`]/[`DdlAdminClient`] over `gcloud_spanner`
//! (spec.md §6, D1). Grounded on `client::Client` for session acquisition,
//! `transaction_ro::ReadOnlyTransaction`/`transaction_rw::ReadWriteTransaction`
//! for the two live-transaction shapes, and
//! `admin::database::database_admin_client::DatabaseAdminClient` for DDL.
//!
//! `Client::read_write_transaction` retries `Aborted` internally, which would
//! hide the exact error [`crate::read_write_transaction::ReadWriteTransaction`]
//! (C5) needs to drive its own statement-history replay. So this adapter goes
//! around it: it checks out one session per interactive read/write
//! transaction via `Client::session()` and drives `ReadWriteTransaction`
//! directly, surfacing `Aborted` to the caller instead of swallowing it.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use base64::Engine;
use tokio::sync::Mutex;

use gcloud_spanner::admin::database::database_admin_client::DatabaseAdminClient;
use gcloud_spanner::client::Client;
use gcloud_spanner::key::Key;
use gcloud_spanner::mutation as gmutation;
use gcloud_spanner::reader::AsyncIterator;
use gcloud_spanner::statement::{Statement as GStatement, ToKind};
use gcloud_spanner::transaction::CallOptions;
use gcloud_spanner::transaction_ro::ReadOnlyTransaction;
use gcloud_spanner::transaction_rw::{CommitOptions, ReadWriteTransaction};
use gcloud_spanner::value::TimestampBound;
use google_cloud_googleapis::spanner::admin::database::v1::UpdateDatabaseDdlRequest;
use google_cloud_googleapis::spanner::v1::TypeCode;
use prost_types::value::Kind as ProstKind;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::db::{
    CommitResult, DatabaseClient, DdlAdminClient as ConnectorDdlAdminClient, Mutation, ResultSet,
    SingleUseQueryResult, SpannerValue, Statement, TransactionHandle, TransactionMode,
};
use crate::error::{Code, Error, Result};
use crate::value::{QueryOptions, StalenessBound};

fn status_to_error(status: tonic::Status) -> Error {
    let code = match status.code() {
        tonic::Code::Cancelled => Code::Cancelled,
        tonic::Code::InvalidArgument => Code::InvalidArgument,
        tonic::Code::DeadlineExceeded => Code::DeadlineExceeded,
        tonic::Code::NotFound => Code::NotFound,
        tonic::Code::FailedPrecondition => Code::FailedPrecondition,
        tonic::Code::Aborted => Code::Aborted,
        tonic::Code::Unavailable => Code::Unavailable,
        tonic::Code::Internal => Code::Internal,
        _ => Code::Unknown,
    };
    Error::new(code, status.message().to_string())
}

fn staleness_to_bound(staleness: StalenessBound) -> TimestampBound {
    match staleness {
        StalenessBound::Strong => TimestampBound::Strong,
        StalenessBound::ExactStaleness(d) => {
            TimestampBound::ExactStaleness(std::time::Duration::try_from(d).unwrap_or_default())
        }
        StalenessBound::MaxStaleness(d) => {
            TimestampBound::MaxStaleness(std::time::Duration::try_from(d).unwrap_or_default())
        }
        StalenessBound::ReadTimestamp(ts) => TimestampBound::ReadTimestamp(to_proto_timestamp(ts)),
        StalenessBound::MinReadTimestamp(ts) => {
            TimestampBound::MinReadTimestamp(to_proto_timestamp(ts))
        }
    }
}

fn to_proto_timestamp(ts: OffsetDateTime) -> prost_types::Timestamp {
    prost_types::Timestamp {
        seconds: ts.unix_timestamp(),
        nanos: ts.nanosecond() as i32,
    }
}

fn naive_to_offset(ts: chrono::NaiveDateTime) -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(ts.and_utc().timestamp())
        .unwrap_or(OffsetDateTime::UNIX_EPOCH)
        + time::Duration::nanoseconds(ts.and_utc().timestamp_subsec_nanos() as i64)
}

fn prost_ts_to_offset(ts: prost_types::Timestamp) -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(ts.seconds)
        .unwrap_or(OffsetDateTime::UNIX_EPOCH)
        + time::Duration::nanoseconds(ts.nanos as i64)
}

fn bind_param(stmt: &mut GStatement, name: &str, value: &SpannerValue) {
    match value {
        // This boundary type (spec.md §6, db.rs) carries no declared column
        // type alongside a null, so a bare NULL is always sent typed as
        // STRING; Spanner accepts an untyped-looking NULL parameter this way
        // for any nullable column.
        SpannerValue::Null => stmt.add_param(name, &Option::<String>::None),
        SpannerValue::Bool(b) => stmt.add_param(name, b),
        SpannerValue::Int64(i) => stmt.add_param(name, i),
        SpannerValue::Float64(f) => stmt.add_param(name, f),
        SpannerValue::String(s) => stmt.add_param(name, s),
        SpannerValue::Bytes(b) => stmt.add_param(name, b),
        SpannerValue::Timestamp(t) => stmt.add_param(name, t),
    }
}

fn to_gstatement(stmt: &Statement) -> GStatement {
    let mut g = GStatement::new(stmt.sql.clone());
    for (name, value) in &stmt.params {
        bind_param(&mut g, name, value);
    }
    g
}

fn kind_to_value(kind: &ProstKind, type_code: i32) -> SpannerValue {
    match kind {
        ProstKind::NullValue(_) => SpannerValue::Null,
        ProstKind::BoolValue(b) => SpannerValue::Bool(*b),
        ProstKind::NumberValue(n) => SpannerValue::Float64(*n),
        ProstKind::StringValue(s) => {
            if type_code == TypeCode::Int64 as i32 {
                s.parse().map(SpannerValue::Int64).unwrap_or_else(|_| SpannerValue::String(s.clone()))
            } else if type_code == TypeCode::Bytes as i32 {
                base64::engine::general_purpose::STANDARD
                    .decode(s)
                    .map(SpannerValue::Bytes)
                    .unwrap_or_else(|_| SpannerValue::String(s.clone()))
            } else if type_code == TypeCode::Timestamp as i32 {
                OffsetDateTime::parse(s, &Rfc3339)
                    .map(SpannerValue::Timestamp)
                    .unwrap_or_else(|_| SpannerValue::String(s.clone()))
            } else {
                SpannerValue::String(s.clone())
            }
        }
        // Arrays/structs are outside this boundary type's value lattice
        // (db.rs: "deliberately small ... not a value-conversion library").
        other => SpannerValue::String(format!("{other:?}")),
    }
}

async fn drain<'a>(mut it: gcloud_spanner::reader::RowIterator<'a>) -> Result<ResultSet> {
    let mut rows = Vec::new();
    let mut columns: Vec<String> = Vec::new();
    loop {
        match it.next().await.map_err(status_to_error)? {
            None => break,
            Some(row) => {
                if columns.is_empty() {
                    columns = it.fields().iter().map(|f| f.name.clone()).collect();
                }
                let mut values = Vec::with_capacity(row.len());
                for i in 0..row.len() {
                    let (value, field) = row.raw(i).expect("index in bounds");
                    let code = field.r#type.as_ref().map(|t| t.code).unwrap_or(0);
                    values.push(
                        value
                            .kind
                            .as_ref()
                            .map(|k| kind_to_value(k, code))
                            .unwrap_or(SpannerValue::Null),
                    );
                }
                rows.push(values);
            }
        }
    }
    Ok(ResultSet { columns, rows })
}

fn to_mutation(m: Mutation) -> google_cloud_googleapis::spanner::v1::Mutation {
    fn kinds(values: Vec<SpannerValue>) -> Vec<ProstKind> {
        values.iter().map(|v| v.to_kind_lossy()).collect()
    }
    match m {
        Mutation::Insert { table, columns, values } => gmutation::insert(table, columns, kinds(values)),
        Mutation::Update { table, columns, values } => gmutation::update(table, columns, kinds(values)),
        Mutation::Replace { table, columns, values } => gmutation::replace(table, columns, kinds(values)),
        Mutation::InsertOrUpdate { table, columns, values } => {
            gmutation::insert_or_update(table, columns, kinds(values))
        }
        Mutation::Delete { table, key } => gmutation::delete(table, Key::new(key.iter().map(|v| v.to_kind_lossy()).collect())),
    }
}

impl SpannerValue {
    fn to_kind_lossy(&self) -> ProstKind {
        match self {
            SpannerValue::Null => ProstKind::NullValue(0),
            SpannerValue::Bool(b) => b.to_kind(),
            SpannerValue::Int64(i) => i.to_kind(),
            SpannerValue::Float64(f) => f.to_kind(),
            SpannerValue::String(s) => s.to_kind(),
            SpannerValue::Bytes(b) => b.to_kind(),
            SpannerValue::Timestamp(t) => t.to_kind(),
        }
    }
}

enum TxEntry {
    ReadOnly(ReadOnlyTransaction),
    ReadWrite(ReadWriteTransaction),
}

/// Wraps a `gcloud_spanner::client::Client`, tracking the interactive
/// transactions opened against it behind opaque [`TransactionHandle`]s.
pub struct SpannerDatabaseClient {
    client: Client,
    transactions: Mutex<HashMap<u64, TxEntry>>,
    next_id: AtomicU64,
}

impl SpannerDatabaseClient {
    pub fn new(client: Client) -> Self {
        SpannerDatabaseClient {
            client,
            transactions: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    fn alloc(&self) -> TransactionHandle {
        TransactionHandle(self.next_id.fetch_add(1, Ordering::Relaxed))
    }
}

#[async_trait]
impl DatabaseClient for SpannerDatabaseClient {
    async fn begin_transaction(
        &self,
        mode: TransactionMode,
        staleness: Option<StalenessBound>,
    ) -> Result<TransactionHandle> {
        let session = self.client.session().await.map_err(|e| Error::new(Code::Unavailable, e.to_string()))?;
        let entry = match mode {
            TransactionMode::ReadOnly => {
                let bound = staleness_to_bound(staleness.unwrap_or_default());
                let tx = ReadOnlyTransaction::begin(session, bound, CallOptions::default())
                    .await
                    .map_err(status_to_error)?;
                TxEntry::ReadOnly(tx)
            }
            TransactionMode::ReadWrite => {
                let tx = ReadWriteTransaction::begin(session, CallOptions::default())
                    .await
                    .map_err(status_to_error)?;
                TxEntry::ReadWrite(tx)
            }
            TransactionMode::PartitionedDml => {
                return Err(Error::invalid_argument(
                    "partitioned DML runs through partitioned_update, not begin_transaction",
                ))
            }
        };
        let handle = self.alloc();
        self.transactions.lock().await.insert(handle.0, entry);
        Ok(handle)
    }

    async fn execute_query(&self, tx: TransactionHandle, stmt: &Statement, opts: &QueryOptions) -> Result<ResultSet> {
        let mut guard = self.transactions.lock().await;
        let entry = guard.get_mut(&tx.0).ok_or_else(|| Error::failed_precondition("unknown transaction handle"))?;
        let gstmt = to_gstatement(stmt);
        let _ = opts; // optimizer_version etc. have no equivalent QueryOptions field wired up yet.
        let rows = match entry {
            TxEntry::ReadOnly(t) => t.query(gstmt, None).await.map_err(status_to_error)?,
            TxEntry::ReadWrite(t) => t.query(gstmt, None).await.map_err(status_to_error)?,
        };
        drain(rows).await
    }

    async fn execute_update(&self, tx: TransactionHandle, stmt: &Statement) -> Result<i64> {
        let mut guard = self.transactions.lock().await;
        let entry = guard.get_mut(&tx.0).ok_or_else(|| Error::failed_precondition("unknown transaction handle"))?;
        match entry {
            TxEntry::ReadOnly(_) => Err(Error::failed_precondition("read-only transaction cannot run DML")),
            TxEntry::ReadWrite(t) => t.update(to_gstatement(stmt), None).await.map_err(status_to_error),
        }
    }

    async fn execute_batch_update(&self, tx: TransactionHandle, stmts: &[Statement]) -> Result<Vec<i64>> {
        let mut guard = self.transactions.lock().await;
        let entry = guard.get_mut(&tx.0).ok_or_else(|| Error::failed_precondition("unknown transaction handle"))?;
        match entry {
            TxEntry::ReadOnly(_) => Err(Error::failed_precondition("read-only transaction cannot run DML")),
            TxEntry::ReadWrite(t) => {
                let gstmts = stmts.iter().map(to_gstatement).collect();
                t.batch_update(gstmts, None).await.map_err(status_to_error)
            }
        }
    }

    async fn write(&self, tx: TransactionHandle, mutations: Vec<Mutation>) -> Result<()> {
        let mut guard = self.transactions.lock().await;
        let entry = guard.get_mut(&tx.0).ok_or_else(|| Error::failed_precondition("unknown transaction handle"))?;
        match entry {
            TxEntry::ReadOnly(_) => Err(Error::failed_precondition("read-only transaction cannot buffer writes")),
            TxEntry::ReadWrite(t) => {
                t.buffer_write(mutations.into_iter().map(to_mutation).collect());
                Ok(())
            }
        }
    }

    async fn commit(&self, tx: TransactionHandle) -> Result<CommitResult> {
        let mut guard = self.transactions.lock().await;
        let entry = guard.remove(&tx.0).ok_or_else(|| Error::failed_precondition("unknown transaction handle"))?;
        match entry {
            TxEntry::ReadOnly(_) => Ok(CommitResult { commit_timestamp: OffsetDateTime::now_utc() }),
            TxEntry::ReadWrite(mut t) => {
                let response = t.commit(CommitOptions::default()).await.map_err(status_to_error)?;
                let ts = response
                    .commit_timestamp
                    .map(prost_ts_to_offset)
                    .unwrap_or_else(OffsetDateTime::now_utc);
                Ok(CommitResult { commit_timestamp: ts })
            }
        }
    }

    async fn rollback(&self, tx: TransactionHandle) -> Result<()> {
        let mut guard = self.transactions.lock().await;
        let entry = guard.remove(&tx.0).ok_or_else(|| Error::failed_precondition("unknown transaction handle"))?;
        match entry {
            TxEntry::ReadOnly(_) => Ok(()),
            TxEntry::ReadWrite(mut t) => t.rollback(None).await.map_err(status_to_error),
        }
    }

    async fn read_timestamp(&self, tx: TransactionHandle) -> Result<Option<OffsetDateTime>> {
        let guard = self.transactions.lock().await;
        match guard.get(&tx.0) {
            Some(TxEntry::ReadOnly(t)) => Ok(t.read_timestamp().map(naive_to_offset)),
            Some(TxEntry::ReadWrite(_)) => Ok(None),
            None => Ok(None),
        }
    }

    async fn single_use_query(&self, staleness: StalenessBound, stmt: &Statement) -> Result<SingleUseQueryResult> {
        let bound = staleness_to_bound(staleness);
        let mut tx = self.client.single(Some(bound)).await.map_err(|e| match e {
            gcloud_spanner::client::TxError::TonicStatus(s) => status_to_error(s),
            gcloud_spanner::client::TxError::SessionError(e) => Error::new(Code::Unavailable, e.to_string()),
        })?;
        let rows = tx.query(to_gstatement(stmt), None).await.map_err(status_to_error)?;
        let result_set = drain(rows).await?;
        Ok(SingleUseQueryResult {
            result_set,
            read_timestamp: tx.read_timestamp().map(naive_to_offset),
        })
    }

    async fn partitioned_update(&self, stmt: &Statement) -> Result<i64> {
        self.client
            .partitioned_update(to_gstatement(stmt), None)
            .await
            .map_err(|e| match e {
                gcloud_spanner::client::TxError::TonicStatus(s) => status_to_error(s),
                gcloud_spanner::client::TxError::SessionError(e) => Error::new(Code::Unavailable, e.to_string()),
            })
    }
}

/// Wraps `admin::database::database_admin_client::DatabaseAdminClient` for a
/// single fixed database path.
pub struct SpannerDdlAdminClient {
    admin: Mutex<DatabaseAdminClient>,
    database: String,
}

impl SpannerDdlAdminClient {
    pub fn new(admin: DatabaseAdminClient, database: impl Into<String>) -> Self {
        SpannerDdlAdminClient {
            admin: Mutex::new(admin),
            database: database.into(),
        }
    }
}

#[async_trait]
impl ConnectorDdlAdminClient for SpannerDdlAdminClient {
    async fn update_database_ddl(&self, statements: Vec<String>) -> Result<()> {
        let req = UpdateDatabaseDdlRequest {
            database: self.database.clone(),
            statements,
            operation_id: String::new(),
        };
        let mut admin = self.admin.lock().await;
        // Submits the DDL; this adapter does not poll the returned
        // long-running operation to completion (no Operations client is
        // wired up here — see DESIGN.md).
        admin.update_database_ddl(req, None).await.map_err(status_to_error)?;
        Ok(())
    }
}
