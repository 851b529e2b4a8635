//! # gcloud-spanner-connector
//!
//! A driver-level connection state machine for Cloud Spanner, in the shape
//! JDBC/database-driver connectors take: one [`connection::ConnectionController`]
//! per logical connection, holding the mode flags (autocommit, read-only,
//! staleness, statement timeout, ...) and the currently active unit of work,
//! dispatching each incoming statement to whichever unit of work applies.
//!
//! ## Quickstart
//!
//! ```ignore
//! use gcloud_spanner_connector::connection::ConnectionController;
//!
//! async fn run(controller: &mut ConnectionController) -> gcloud_spanner_connector::error::Result<()> {
//!     controller.set_autocommit(false)?;
//!     controller.begin_transaction(None)?;
//!     controller.execute_update("UPDATE Users SET Active = true WHERE Id = 1").await?;
//!     controller.commit().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Layout
//!
//! * [`connection`] — the state machine itself (spec §4.1).
//! * [`single_use_transaction`], [`read_only_transaction`],
//!   [`read_write_transaction`], [`ddl_batch`], [`dml_batch`] — the five
//!   concrete units of work behind the [`unit_of_work::UnitOfWork`] trait.
//! * [`statement`] — classification and the client-side directive grammar.
//! * [`client_statement_executor`] — maps directives onto controller calls.
//! * [`db`] — the narrow `DatabaseClient`/`DdlAdminClient` boundary; `db::adapter`
//!   is the production implementation over `gcloud_spanner`, `db::testing` is
//!   the in-memory double used throughout this crate's own test suite.
//! * [`pool`] — the process-wide registry connections are acquired from.
//! * [`executor`] — the cancellable, timeout-aware statement runner.
//! * [`row_digest`], [`retry_listener`] — internal-retry support for
//!   [`read_write_transaction::ReadWriteTransaction`].

pub mod client_statement_executor;
pub mod connection;
pub mod db;
pub mod ddl_batch;
pub mod dml_batch;
pub mod error;
pub mod executor;
pub mod pool;
pub mod read_only_transaction;
pub mod read_write_transaction;
pub mod retry_listener;
pub mod row_digest;
pub mod single_use_transaction;
pub mod statement;
pub mod unit_of_work;
pub mod value;

pub use connection::ConnectionController;
pub use error::{Code, Error, Result};
