//! The connection state machine (spec.md §4.1, C9) — the only public
//! façade of this crate. Grounded on `gcloud_spanner::client::Client` for
//! the option-struct layering (`ClientConfig`, `ReadWriteTransactionOption`,
//! ...) and on `session_pool::SessionManager` for logging one line per state
//! transition. `ConnectionState` is held behind plain `&mut self`, not a
//! lock: per spec.md §5 the connection is not safe for concurrent mutating
//! calls, the same way `transaction_rw.rs::ReadWriteTransaction` exposes
//! `&mut self`-only methods. `cancel()` is the one exception — it must work
//! from another thread, so it goes through the executor's cloneable
//! [`google_cloud_gax::cancel::CancellationToken`] instead of through
//! `&mut self`.

use std::backtrace::Backtrace;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use google_cloud_gax::cancel::CancellationToken;
use parking_lot::Mutex;
use time::OffsetDateTime;

use crate::client_statement_executor::{execute_client_side, StatementResult};
use crate::ddl_batch::DdlBatch;
use crate::db::{DatabaseClient, DdlAdminClient, Mutation, ResultSet, Statement};
use crate::dml_batch::DmlBatch;
use crate::error::{Error, Result};
use crate::executor::StatementExecutor;
use crate::pool::{PoolKey, SpannerPool};
use crate::read_only_transaction::ReadOnlyTransaction;
use crate::read_write_transaction::ReadWriteTransaction;
use crate::retry_listener::TransactionRetryListener;
use crate::single_use_transaction::SingleUseTransaction;
use crate::statement::{DefaultParser, Parser, StatementKind};
use crate::unit_of_work::{UnitOfWork, UnitOfWorkState, UnitOfWorkType};
use crate::value::{AutocommitDmlMode, QueryOptions, StalenessBound, StatementTimeout};

/// Source of the `owner` id `connect` registers itself under with
/// [`SpannerPool`] — just needs to be distinct per connection within this
/// process.
static NEXT_POOL_OWNER: AtomicU64 = AtomicU64::new(0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchMode {
    None,
    Ddl,
    Dml,
}

struct ConnectionState {
    closed: bool,
    autocommit: bool,
    read_only: bool,
    autocommit_dml_mode: AutocommitDmlMode,
    read_only_staleness: StalenessBound,
    query_options: QueryOptions,
    statement_timeout: StatementTimeout,
    retry_aborts_internally: bool,
    batch_mode: BatchMode,
    unit_of_work_type: UnitOfWorkType,
    in_transaction: bool,
    transaction_begin_marked: bool,
    current_unit_of_work: Option<Arc<dyn UnitOfWork>>,
    transaction_stack: Option<Arc<dyn UnitOfWork>>,
    last_read_timestamp: Option<OffsetDateTime>,
    last_commit_timestamp: Option<OffsetDateTime>,
}

impl Default for ConnectionState {
    fn default() -> Self {
        ConnectionState {
            closed: false,
            autocommit: true,
            read_only: false,
            autocommit_dml_mode: AutocommitDmlMode::default(),
            read_only_staleness: StalenessBound::default(),
            query_options: QueryOptions::default(),
            statement_timeout: StatementTimeout::none(),
            retry_aborts_internally: false,
            batch_mode: BatchMode::None,
            unit_of_work_type: UnitOfWorkType::ReadWriteTx,
            in_transaction: false,
            transaction_begin_marked: false,
            current_unit_of_work: None,
            transaction_stack: None,
            last_read_timestamp: None,
            last_commit_timestamp: None,
        }
    }
}

pub struct ConnectionController {
    db: Arc<dyn DatabaseClient>,
    ddl: Arc<dyn DdlAdminClient>,
    parser: Arc<dyn Parser>,
    listeners: Vec<Arc<dyn TransactionRetryListener>>,
    executor: StatementExecutor,
    state: ConnectionState,
    leak_trace: Mutex<Option<Backtrace>>,
    pool_registration: Option<(PoolKey, String)>,
}

impl ConnectionController {
    #[track_caller]
    pub fn new(
        db: Arc<dyn DatabaseClient>,
        ddl: Arc<dyn DdlAdminClient>,
        parser: Arc<dyn Parser>,
        listeners: Vec<Arc<dyn TransactionRetryListener>>,
    ) -> Self {
        ConnectionController {
            db,
            ddl,
            parser,
            listeners,
            executor: StatementExecutor::default(),
            state: ConnectionState::default(),
            leak_trace: Mutex::new(Some(Backtrace::capture())),
            pool_registration: None,
        }
    }

    #[track_caller]
    pub fn with_default_parser(db: Arc<dyn DatabaseClient>, ddl: Arc<dyn DdlAdminClient>) -> Self {
        Self::new(db, ddl, Arc::new(DefaultParser), Vec::new())
    }

    /// Builds a connection whose `DatabaseClient` is shared with every other
    /// connection acquired for `key` in this process, via [`SpannerPool`]
    /// (spec.md §4.1/§9 "Global pool"). `build` runs at most once per `key`,
    /// the first time it's seen; `close` releases this connection's share
    /// and the last release drops the shared client.
    #[track_caller]
    pub async fn connect<F>(
        key: PoolKey,
        ddl: Arc<dyn DdlAdminClient>,
        parser: Arc<dyn Parser>,
        listeners: Vec<Arc<dyn TransactionRetryListener>>,
        build: F,
    ) -> Self
    where
        F: FnOnce() -> Arc<dyn DatabaseClient>,
    {
        let owner = NEXT_POOL_OWNER.fetch_add(1, Ordering::Relaxed).to_string();
        let db = SpannerPool::acquire(&key, owner.clone(), build).await;
        let mut controller = Self::new(db, ddl, parser, listeners);
        controller.pool_registration = Some((key, owner));
        controller
    }

    // -- preconditions --------------------------------------------------

    fn check_open(&self) -> Result<()> {
        if self.state.closed {
            return Err(Error::closed());
        }
        Ok(())
    }

    fn is_transaction_started(&self) -> bool {
        self.state
            .current_unit_of_work
            .as_ref()
            .map(|u| u.state() != UnitOfWorkState::New)
            .unwrap_or(false)
    }

    /// `¬autocommit ∨ inTransaction`, per spec.md §3's invariant naming.
    pub fn is_in_transaction(&self) -> bool {
        !self.state.autocommit || self.state.in_transaction
    }

    fn check_mode_settable(&self) -> Result<()> {
        self.check_open()?;
        if self.state.batch_mode != BatchMode::None {
            return Err(Error::failed_precondition("cannot change mode while a batch is active"));
        }
        if self.is_transaction_started() {
            return Err(Error::failed_precondition("cannot change mode after a transaction has started"));
        }
        if self.state.transaction_begin_marked {
            return Err(Error::failed_precondition("cannot change mode while a transaction begin is pending"));
        }
        if self.state.autocommit && self.state.in_transaction {
            return Err(Error::failed_precondition("cannot change mode inside a temporary transaction"));
        }
        Ok(())
    }

    // -- mode setters / getters -----------------------------------------

    pub fn set_autocommit(&mut self, value: bool) -> Result<()> {
        self.check_mode_settable()?;
        self.state.autocommit = value;
        if !value && self.state.read_only_staleness.requires_single_use() {
            tracing::debug!("resetting read-only staleness to STRONG: MAX_STALENESS/MIN_READ_TIMESTAMP require autocommit");
            self.state.read_only_staleness = StalenessBound::Strong;
        }
        Ok(())
    }

    pub fn is_autocommit(&self) -> bool {
        self.state.autocommit
    }

    pub fn set_read_only(&mut self, value: bool) -> Result<()> {
        self.check_mode_settable()?;
        self.state.read_only = value;
        self.state.unit_of_work_type = if value {
            UnitOfWorkType::ReadOnlyTx
        } else {
            UnitOfWorkType::ReadWriteTx
        };
        Ok(())
    }

    pub fn is_read_only(&self) -> bool {
        self.state.read_only
    }

    pub fn set_autocommit_dml_mode(&mut self, mode: AutocommitDmlMode) -> Result<()> {
        self.check_open()?;
        if !(self.state.autocommit && !self.state.in_transaction && !self.state.read_only) {
            return Err(Error::failed_precondition(
                "autocommit_dml_mode can only be set when autocommit, non-transactional, and not read-only",
            ));
        }
        self.state.autocommit_dml_mode = mode;
        Ok(())
    }

    pub fn autocommit_dml_mode(&self) -> AutocommitDmlMode {
        self.state.autocommit_dml_mode
    }

    pub fn set_read_only_staleness(&mut self, staleness: StalenessBound) -> Result<()> {
        self.check_mode_settable()?;
        if staleness.requires_single_use() && !(self.state.autocommit && !self.state.in_transaction) {
            return Err(Error::failed_precondition(
                "MAX_STALENESS/MIN_READ_TIMESTAMP require autocommit with no active transaction",
            ));
        }
        self.state.read_only_staleness = staleness;
        Ok(())
    }

    pub fn read_only_staleness(&self) -> StalenessBound {
        self.state.read_only_staleness
    }

    pub fn set_optimizer_version(&mut self, version: impl Into<String>) -> Result<()> {
        self.check_open()?;
        self.state.query_options.optimizer_version = Some(version.into());
        Ok(())
    }

    pub fn query_options(&self) -> &QueryOptions {
        &self.state.query_options
    }

    pub fn set_statement_timeout(&mut self, timeout: StatementTimeout) -> Result<()> {
        self.check_mode_settable()?;
        self.state.statement_timeout = timeout;
        Ok(())
    }

    pub fn clear_statement_timeout(&mut self) -> Result<()> {
        self.set_statement_timeout(StatementTimeout::none())
    }

    pub fn statement_timeout(&self) -> StatementTimeout {
        self.state.statement_timeout
    }

    pub fn set_retry_aborts_internally(&mut self, value: bool) -> Result<()> {
        self.check_mode_settable()?;
        self.state.retry_aborts_internally = value;
        Ok(())
    }

    pub fn retry_aborts_internally(&self) -> bool {
        self.state.retry_aborts_internally
    }

    // -- transaction lifecycle -------------------------------------------

    pub fn begin_transaction(&mut self, read_only: Option<bool>) -> Result<()> {
        self.check_open()?;
        if self.state.batch_mode != BatchMode::None {
            return Err(Error::failed_precondition("cannot begin a transaction while a batch is active"));
        }
        if self.is_transaction_started() {
            return Err(Error::failed_precondition("a transaction is already in progress"));
        }
        if self.state.transaction_begin_marked {
            return Err(Error::failed_precondition("a transaction begin is already pending"));
        }
        let wants_read_only = read_only.unwrap_or(self.state.read_only);
        if !wants_read_only && self.state.read_only {
            return Err(Error::failed_precondition("connection is read-only"));
        }
        self.state.unit_of_work_type = if wants_read_only {
            UnitOfWorkType::ReadOnlyTx
        } else {
            UnitOfWorkType::ReadWriteTx
        };
        self.state.transaction_begin_marked = true;
        if self.state.autocommit {
            self.state.in_transaction = true;
        }
        self.state.last_read_timestamp = None;
        self.state.last_commit_timestamp = None;
        Ok(())
    }

    pub fn is_transaction_begin_marked(&self) -> bool {
        self.state.transaction_begin_marked
    }

    fn reset_default_transaction_options(&mut self) {
        self.state.unit_of_work_type = if self.state.read_only {
            UnitOfWorkType::ReadOnlyTx
        } else {
            UnitOfWorkType::ReadWriteTx
        };
    }

    async fn end_current_transaction(&mut self, commit: bool) -> Result<()> {
        self.check_open()?;
        if self.state.batch_mode != BatchMode::None {
            return Err(Error::failed_precondition("cannot commit/rollback while a batch is active"));
        }
        if !self.is_in_transaction() {
            return Err(Error::failed_precondition("no transaction is in progress"));
        }
        if let Some(uow) = self.state.current_unit_of_work.clone() {
            if uow.state() != UnitOfWorkState::New {
                if commit {
                    uow.commit().await?;
                    if let Some(ts) = uow.commit_timestamp() {
                        self.state.last_commit_timestamp = Some(ts);
                    }
                } else {
                    uow.rollback().await?;
                }
            }
        }
        self.state.transaction_begin_marked = false;
        if self.state.autocommit {
            self.state.in_transaction = false;
        }
        if let Some(host) = self.state.transaction_stack.take() {
            self.state.unit_of_work_type = host.unit_type();
            self.state.current_unit_of_work = Some(host);
        } else {
            self.state.current_unit_of_work = None;
            self.reset_default_transaction_options();
        }
        Ok(())
    }

    pub async fn commit(&mut self) -> Result<()> {
        self.end_current_transaction(true).await
    }

    pub async fn rollback(&mut self) -> Result<()> {
        self.end_current_transaction(false).await
    }

    pub fn read_timestamp(&self) -> Option<OffsetDateTime> {
        self.state.last_read_timestamp
    }

    pub fn commit_timestamp(&self) -> Option<OffsetDateTime> {
        self.state.last_commit_timestamp
    }

    // -- unit of work dispatch --------------------------------------------

    /// A child of `self.executor`, transparently recovering from a prior
    /// `cancel()` first: a cancelled token poisons every `child_token()`
    /// derived from it, which would otherwise leave the connection dead
    /// after cancelling a single statement (spec.md §5).
    fn child_executor(&mut self) -> StatementExecutor {
        if self.executor.is_cancelled() {
            self.executor = self.executor.fresh_sibling();
        }
        self.executor.child()
    }

    async fn ensure_unit_of_work(&mut self) -> Result<Arc<dyn UnitOfWork>> {
        self.check_open()?;
        if self.state.autocommit && !self.state.in_transaction && self.state.batch_mode == BatchMode::None {
            let executor = self.child_executor();
            return Ok(Arc::new(SingleUseTransaction::new(
                self.db.clone(),
                self.state.read_only,
                self.state.read_only_staleness,
                self.state.autocommit_dml_mode,
                executor,
                self.state.statement_timeout.as_std(),
            )));
        }

        if let Some(uow) = &self.state.current_unit_of_work {
            if uow.is_active() && uow.unit_type() == self.state.unit_of_work_type {
                return Ok(uow.clone());
            }
        }

        let uow: Arc<dyn UnitOfWork> = match self.state.unit_of_work_type {
            UnitOfWorkType::ReadOnlyTx => {
                let executor = self.child_executor();
                Arc::new(ReadOnlyTransaction::new(
                    self.db.clone(),
                    self.state.read_only_staleness,
                    executor,
                    self.state.statement_timeout.as_std(),
                ))
            }
            UnitOfWorkType::ReadWriteTx => {
                let executor = self.child_executor();
                Arc::new(
                    ReadWriteTransaction::begin(
                        self.db.clone(),
                        self.state.retry_aborts_internally,
                        self.listeners.clone(),
                        executor,
                        self.state.statement_timeout.as_std(),
                    )
                    .await?,
                )
            }
            UnitOfWorkType::DmlBatch => {
                let host = self
                    .state
                    .current_unit_of_work
                    .take()
                    .ok_or_else(|| Error::failed_precondition("no host transaction for DML batch"))?;
                self.state.transaction_stack = Some(host.clone());
                Arc::new(DmlBatch::new(host))
            }
            UnitOfWorkType::DdlBatch => {
                let executor = self.child_executor();
                Arc::new(DdlBatch::new(
                    self.ddl.clone(),
                    executor,
                    self.state.statement_timeout.as_std(),
                ))
            }
        };
        self.state.current_unit_of_work = Some(uow.clone());
        Ok(uow)
    }

    // -- batch lifecycle ---------------------------------------------------

    pub async fn start_batch_ddl(&mut self) -> Result<()> {
        self.check_open()?;
        if self.state.batch_mode != BatchMode::None {
            return Err(Error::failed_precondition("a batch is already active"));
        }
        if self.is_transaction_started() {
            return Err(Error::failed_precondition("cannot start a DDL batch with a transaction in progress"));
        }
        if self.state.autocommit && self.state.in_transaction {
            return Err(Error::failed_precondition("cannot start a DDL batch inside a transaction"));
        }
        if self.state.transaction_begin_marked {
            return Err(Error::failed_precondition("cannot start a DDL batch with a transaction begin pending"));
        }
        self.state.batch_mode = BatchMode::Ddl;
        self.state.unit_of_work_type = UnitOfWorkType::DdlBatch;
        self.ensure_unit_of_work().await?;
        Ok(())
    }

    pub async fn start_batch_dml(&mut self) -> Result<()> {
        self.check_open()?;
        if self.state.batch_mode != BatchMode::None {
            return Err(Error::failed_precondition("a batch is already active"));
        }
        if self.state.read_only {
            return Err(Error::failed_precondition("cannot batch DML on a read-only connection"));
        }
        if self.state.unit_of_work_type == UnitOfWorkType::ReadOnlyTx && self.state.current_unit_of_work.is_some() {
            return Err(Error::failed_precondition("cannot batch DML inside a read-only transaction"));
        }
        let needs_host = match &self.state.current_unit_of_work {
            Some(uow) => !uow.is_active(),
            None => true,
        };
        if needs_host {
            // Built directly rather than through `ensure_unit_of_work`: while
            // `batch_mode` is still `None`, that method's autocommit
            // shortcut would hand back an ephemeral `SingleUseTransaction`
            // instead of a persisted host.
            let executor = self.child_executor();
            let host = ReadWriteTransaction::begin(
                self.db.clone(),
                self.state.retry_aborts_internally,
                self.listeners.clone(),
                executor,
                self.state.statement_timeout.as_std(),
            )
            .await?;
            self.state.current_unit_of_work = Some(Arc::new(host));
            self.state.unit_of_work_type = UnitOfWorkType::ReadWriteTx;
        }
        self.state.batch_mode = BatchMode::Dml;
        self.state.unit_of_work_type = UnitOfWorkType::DmlBatch;
        self.ensure_unit_of_work().await?;
        Ok(())
    }

    fn end_batch(&mut self) {
        self.state.batch_mode = BatchMode::None;
        if let Some(host) = self.state.transaction_stack.take() {
            self.state.unit_of_work_type = host.unit_type();
            self.state.current_unit_of_work = Some(host);
        } else {
            self.state.current_unit_of_work = None;
            self.reset_default_transaction_options();
        }
    }

    pub async fn run_batch(&mut self) -> Result<Vec<i64>> {
        self.check_open()?;
        if self.state.batch_mode == BatchMode::None {
            return Err(Error::failed_precondition("no batch is active"));
        }
        let uow = self
            .state
            .current_unit_of_work
            .clone()
            .expect("batch mode implies a current unit of work");
        let result = uow.run_batch().await;
        self.end_batch();
        result
    }

    pub async fn abort_batch(&mut self) -> Result<()> {
        self.check_open()?;
        if self.state.batch_mode == BatchMode::None {
            return Err(Error::failed_precondition("no batch is active"));
        }
        let uow = self
            .state
            .current_unit_of_work
            .clone()
            .expect("batch mode implies a current unit of work");
        let result = uow.abort_batch().await;
        self.end_batch();
        result
    }

    pub fn is_ddl_batch_active(&self) -> bool {
        self.state.batch_mode == BatchMode::Ddl
    }

    pub fn is_dml_batch_active(&self) -> bool {
        self.state.batch_mode == BatchMode::Dml
    }

    // -- statement execution ------------------------------------------------

    pub async fn execute(&mut self, sql: &str) -> Result<StatementResult> {
        self.check_open()?;
        let parsed = self.parser.parse(sql);
        match parsed.kind {
            StatementKind::ClientSide => execute_client_side(self, &parsed).await,
            StatementKind::Query => {
                let uow = self.ensure_unit_of_work().await?;
                let opts = self.state.query_options.clone();
                let rs = uow.execute_query(&Statement::new(parsed.normalized_sql), &opts).await?;
                if let Some(ts) = uow.read_timestamp() {
                    self.state.last_read_timestamp = Some(ts);
                }
                Ok(StatementResult::Rows(rs))
            }
            StatementKind::Update => {
                let uow = self.ensure_unit_of_work().await?;
                let count = uow.execute_update(&Statement::new(parsed.normalized_sql)).await?;
                Ok(StatementResult::RowCount(count))
            }
            StatementKind::Ddl => {
                let uow = self.ensure_unit_of_work().await?;
                uow.execute_ddl(&Statement::new(parsed.normalized_sql)).await?;
                Ok(StatementResult::Empty)
            }
            StatementKind::Unknown => Err(Error::invalid_argument("unrecognized statement")),
        }
    }

    pub async fn execute_query(&mut self, sql: &str) -> Result<ResultSet> {
        self.check_open()?;
        let parsed = self.parser.parse(sql);
        if parsed.kind != StatementKind::Query {
            return Err(Error::invalid_argument("statement is not a query"));
        }
        let uow = self.ensure_unit_of_work().await?;
        let opts = self.state.query_options.clone();
        let rs = uow.execute_query(&Statement::new(parsed.normalized_sql), &opts).await?;
        if let Some(ts) = uow.read_timestamp() {
            self.state.last_read_timestamp = Some(ts);
        }
        Ok(rs)
    }

    pub async fn execute_update(&mut self, sql: &str) -> Result<i64> {
        self.check_open()?;
        let parsed = self.parser.parse(sql);
        if parsed.kind != StatementKind::Update {
            return Err(Error::invalid_argument("statement is not an update"));
        }
        let uow = self.ensure_unit_of_work().await?;
        uow.execute_update(&Statement::new(parsed.normalized_sql)).await
    }

    pub async fn execute_batch_update(&mut self, sqls: &[&str]) -> Result<Vec<i64>> {
        self.check_open()?;
        let mut stmts = Vec::with_capacity(sqls.len());
        for sql in sqls {
            let parsed = self.parser.parse(sql);
            if parsed.kind != StatementKind::Update {
                return Err(Error::invalid_argument("executeBatchUpdate only accepts UPDATE statements"));
            }
            stmts.push(Statement::new(parsed.normalized_sql));
        }
        let uow = self.ensure_unit_of_work().await?;
        uow.execute_batch_update(&stmts).await
    }

    /// Analysis is not modeled separately from execution: the
    /// `DatabaseClient` boundary (spec.md §6) has no distinct "analyze"
    /// RPC, so this runs the query and returns its plan-less result set.
    pub async fn analyze_query(&mut self, sql: &str) -> Result<ResultSet> {
        self.execute_query(sql).await
    }

    pub async fn write(&mut self, mutations: Vec<Mutation>) -> Result<()> {
        self.check_open()?;
        if self.state.read_only {
            return Err(Error::failed_precondition("connection is read-only"));
        }
        let uow = self.ensure_unit_of_work().await?;
        uow.write(mutations).await
    }

    pub async fn buffered_write(&mut self, mutations: Vec<Mutation>) -> Result<()> {
        self.check_open()?;
        if self.state.read_only {
            return Err(Error::failed_precondition("connection is read-only"));
        }
        if !self.is_in_transaction() {
            return Err(Error::failed_precondition("bufferedWrite requires an active transaction"));
        }
        let uow = self.ensure_unit_of_work().await?;
        uow.write(mutations).await
    }

    // -- cancellation & close -----------------------------------------------

    /// A cloneable handle that can cancel this connection's in-flight
    /// statement from any thread, without needing `&mut self` (spec.md §5).
    pub fn cancellation_handle(&self) -> CancellationToken {
        self.executor.handle()
    }

    pub fn cancel(&self) {
        self.executor.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.state.closed
    }

    /// Idempotent and infallible (spec.md §7: "close is infallible"). Any
    /// error from the best-effort rollback is logged and discarded.
    pub async fn close(&mut self) {
        if self.state.closed {
            return;
        }
        if self.is_in_transaction() {
            if let Some(uow) = self.state.current_unit_of_work.take() {
                if let Err(e) = uow.rollback().await {
                    tracing::warn!(error = %e, "rollback during close failed, discarding");
                }
            }
        }
        self.state.closed = true;
        self.executor.cancel();
        self.state.current_unit_of_work = None;
        self.state.transaction_stack = None;
        *self.leak_trace.lock() = None;
        if let Some((key, owner)) = self.pool_registration.take() {
            SpannerPool::release(&key, &owner).await;
        }
    }
}

impl Drop for ConnectionController {
    fn drop(&mut self) {
        if let Some(trace) = self.leak_trace.lock().take() {
            tracing::warn!(%trace, "ConnectionController dropped without calling close()");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testing::MockDatabaseClient;

    fn controller() -> ConnectionController {
        let db = Arc::new(MockDatabaseClient::default());
        ConnectionController::with_default_parser(db.clone(), db)
    }

    #[tokio::test]
    async fn autocommit_select_leaves_no_transaction_started() {
        let mut c = controller();
        c.execute_query("SELECT 1").await.unwrap();
        assert!(!c.is_transaction_started());
    }

    #[tokio::test]
    async fn begin_execute_commit_reports_commit_timestamp() {
        let mut c = controller();
        c.set_autocommit(false).unwrap();
        c.begin_transaction(None).unwrap();
        let n = c.execute_update("UPDATE t SET x = 1").await.unwrap();
        assert_eq!(n, 1);
        c.commit().await.unwrap();
        assert!(c.commit_timestamp().is_some());
    }

    #[tokio::test]
    async fn ddl_batch_runs_as_one_call() {
        let mut c = controller();
        c.start_batch_ddl().await.unwrap();
        c.execute("CREATE TABLE a (id INT64)").await.unwrap();
        c.execute("CREATE TABLE b (id INT64)").await.unwrap();
        c.run_batch().await.unwrap();
        assert!(!c.is_ddl_batch_active());
    }

    #[tokio::test]
    async fn max_staleness_requires_autocommit() {
        let mut c = controller();
        c.set_autocommit(false).unwrap();
        let err = c
            .set_read_only_staleness(StalenessBound::MaxStaleness(time::Duration::seconds(5)))
            .unwrap_err();
        assert_eq!(err.code, crate::error::Code::FailedPrecondition);
    }

    #[tokio::test]
    async fn begin_execute_rollback_round_trips_mode_flags() {
        let mut c = controller();
        let autocommit_before = c.is_autocommit();
        let read_only_before = c.is_read_only();
        c.begin_transaction(None).unwrap();
        c.execute_query("SELECT 1").await.unwrap();
        c.rollback().await.unwrap();
        assert_eq!(c.is_autocommit(), autocommit_before);
        assert_eq!(c.is_read_only(), read_only_before);
        assert!(!c.is_transaction_begin_marked());
    }

    #[tokio::test]
    async fn close_is_idempotent() {
        let mut c = controller();
        c.close().await;
        assert!(c.is_closed());
        c.close().await;
        assert!(c.is_closed());
    }

    #[tokio::test]
    async fn closed_connection_rejects_operations() {
        let mut c = controller();
        c.close().await;
        let err = c.execute_query("SELECT 1").await.unwrap_err();
        assert_eq!(err.code, crate::error::Code::FailedPrecondition);
    }

    #[tokio::test]
    async fn connect_shares_the_pooled_client_and_close_releases_it() {
        let key = crate::pool::PoolKey::new("connect_shares_the_pooled_client_and_close_releases_it", "default");
        let shared = Arc::new(MockDatabaseClient::default());
        let first_build = shared.clone();
        let mut a = ConnectionController::connect(
            key.clone(),
            shared.clone(),
            Arc::new(DefaultParser),
            Vec::new(),
            move || first_build,
        )
        .await;
        let mut b = ConnectionController::connect(
            key.clone(),
            shared.clone(),
            Arc::new(DefaultParser),
            Vec::new(),
            || Arc::new(MockDatabaseClient::default()),
        )
        .await;
        assert_eq!(crate::pool::SpannerPool::owner_count(&key).await, 2);

        a.write(vec![crate::db::Mutation::Insert {
            table: "t".into(),
            columns: vec!["a".into()],
            values: vec![crate::db::SpannerValue::Int64(1)],
        }])
        .await
        .unwrap();
        // `b` sees the row `a` wrote: both share the one client `acquire`
        // built, since `b`'s own `build` closure is only used if it had won
        // the race to populate the registry entry first.
        assert_eq!(shared.row_count(), 1);

        a.close().await;
        assert_eq!(crate::pool::SpannerPool::owner_count(&key).await, 1);
        b.close().await;
        assert_eq!(crate::pool::SpannerPool::owner_count(&key).await, 0);
    }
}
