//! Maps recognized client-side control directives onto `ConnectionController`
//! calls (spec.md §4.8, C8). The SQL-level grammar lives in
//! [`crate::statement`]; this module only interprets the already-classified
//! [`ClientSideDirective`] and turns its raw argument text into typed values.

use crate::connection::ConnectionController;
use crate::db::{ResultSet, SpannerValue};
use crate::error::{Error, Result};
use crate::statement::{ClientSideDirective, ParsedStatement};
use crate::value::{AutocommitDmlMode, StalenessBound, StatementTimeout};

/// The outcome of one statement: a row set for `SHOW ...` and `RUN BATCH`,
/// a row count for a DML statement, or nothing for `SET`/`BEGIN`/`COMMIT`/
/// `ROLLBACK`/batch-start/-abort.
#[derive(Debug)]
pub enum StatementResult {
    Rows(ResultSet),
    RowCount(i64),
    Empty,
}

pub(crate) async fn execute_client_side(
    controller: &mut ConnectionController,
    parsed: &ParsedStatement,
) -> Result<StatementResult> {
    let directive = parsed
        .directive
        .clone()
        .expect("CLIENT_SIDE statements always carry a directive");

    match directive {
        ClientSideDirective::SetAutocommit(v) => {
            controller.set_autocommit(v)?;
            Ok(StatementResult::Empty)
        }
        ClientSideDirective::ShowAutocommit => Ok(StatementResult::Rows(bool_row(
            "autocommit",
            controller.is_autocommit(),
        ))),
        ClientSideDirective::SetReadOnly(v) => {
            controller.set_read_only(v)?;
            Ok(StatementResult::Empty)
        }
        ClientSideDirective::ShowReadOnly => Ok(StatementResult::Rows(bool_row(
            "read_only",
            controller.is_read_only(),
        ))),
        ClientSideDirective::SetAutocommitDmlMode(raw) => {
            let mode = parse_dml_mode(&raw)?;
            controller.set_autocommit_dml_mode(mode)?;
            Ok(StatementResult::Empty)
        }
        ClientSideDirective::SetReadOnlyStaleness(raw) => {
            let staleness = parse_staleness(&raw)?;
            controller.set_read_only_staleness(staleness)?;
            Ok(StatementResult::Empty)
        }
        ClientSideDirective::SetStatementTimeout(raw) => {
            let timeout = parse_timeout(&raw)?;
            controller.set_statement_timeout(timeout)?;
            Ok(StatementResult::Empty)
        }
        ClientSideDirective::ClearStatementTimeout => {
            controller.clear_statement_timeout()?;
            Ok(StatementResult::Empty)
        }
        ClientSideDirective::SetOptimizerVersion(v) => {
            controller.set_optimizer_version(v)?;
            Ok(StatementResult::Empty)
        }
        ClientSideDirective::SetRetryAbortsInternally(v) => {
            controller.set_retry_aborts_internally(v)?;
            Ok(StatementResult::Empty)
        }
        ClientSideDirective::Begin { read_only } => {
            controller.begin_transaction(read_only)?;
            Ok(StatementResult::Empty)
        }
        ClientSideDirective::Commit => {
            controller.commit().await?;
            Ok(StatementResult::Empty)
        }
        ClientSideDirective::Rollback => {
            controller.rollback().await?;
            Ok(StatementResult::Empty)
        }
        ClientSideDirective::StartBatchDdl => {
            controller.start_batch_ddl().await?;
            Ok(StatementResult::Empty)
        }
        ClientSideDirective::StartBatchDml => {
            controller.start_batch_dml().await?;
            Ok(StatementResult::Empty)
        }
        ClientSideDirective::RunBatch => {
            let counts = controller.run_batch().await?;
            Ok(StatementResult::Rows(row_counts(counts)))
        }
        ClientSideDirective::AbortBatch => {
            controller.abort_batch().await?;
            Ok(StatementResult::Empty)
        }
    }
}

fn bool_row(column: &str, value: bool) -> ResultSet {
    ResultSet {
        columns: vec![column.to_string()],
        rows: vec![vec![SpannerValue::Bool(value)]],
    }
}

fn row_counts(counts: Vec<i64>) -> ResultSet {
    ResultSet {
        columns: vec!["row_count".to_string()],
        rows: counts.into_iter().map(|c| vec![SpannerValue::Int64(c)]).collect(),
    }
}

fn parse_dml_mode(raw: &str) -> Result<AutocommitDmlMode> {
    match raw.trim().trim_matches('\'').to_ascii_uppercase().as_str() {
        "TRANSACTIONAL" => Ok(AutocommitDmlMode::Transactional),
        "TRANSACTIONAL_WITH_RETRY" => Ok(AutocommitDmlMode::TransactionalWithRetry),
        "PARTITIONED_NON_ATOMIC" => Ok(AutocommitDmlMode::PartitionedNonAtomic),
        other => Err(Error::invalid_argument(format!("unknown autocommit_dml_mode {other}"))),
    }
}

fn parse_staleness(raw: &str) -> Result<StalenessBound> {
    let raw = raw.trim().trim_matches('\'');
    let mut parts = raw.splitn(2, char::is_whitespace);
    let mode = parts.next().unwrap_or_default().to_ascii_uppercase();
    let rest = parts.next().unwrap_or_default().trim();
    match mode.as_str() {
        "STRONG" => Ok(StalenessBound::Strong),
        "EXACT_STALENESS" => Ok(StalenessBound::ExactStaleness(parse_seconds(rest)?)),
        "MAX_STALENESS" => Ok(StalenessBound::MaxStaleness(parse_seconds(rest)?)),
        "READ_TIMESTAMP" => Ok(StalenessBound::ReadTimestamp(parse_timestamp(rest)?)),
        "MIN_READ_TIMESTAMP" => Ok(StalenessBound::MinReadTimestamp(parse_timestamp(rest)?)),
        other => Err(Error::invalid_argument(format!("unknown staleness mode {other}"))),
    }
}

fn parse_seconds(raw: &str) -> Result<time::Duration> {
    let secs: f64 = raw
        .trim_end_matches('s')
        .trim()
        .parse()
        .map_err(|_| Error::invalid_argument(format!("invalid duration {raw}")))?;
    Ok(time::Duration::seconds_f64(secs))
}

fn parse_timestamp(raw: &str) -> Result<time::OffsetDateTime> {
    time::OffsetDateTime::parse(raw, &time::format_description::well_known::Rfc3339)
        .map_err(|_| Error::invalid_argument(format!("invalid timestamp {raw}")))
}

fn parse_timeout(raw: &str) -> Result<StatementTimeout> {
    parse_seconds(raw).map(StatementTimeout::of)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testing::MockDatabaseClient;
    use std::sync::Arc;

    fn controller() -> ConnectionController {
        let db = Arc::new(MockDatabaseClient::default());
        ConnectionController::with_default_parser(db.clone(), db)
    }

    #[tokio::test]
    async fn show_autocommit_returns_a_row() {
        let mut c = controller();
        match c.execute("SHOW VARIABLE AUTOCOMMIT").await.unwrap() {
            StatementResult::Rows(rs) => {
                assert_eq!(rs.rows[0][0], SpannerValue::Bool(true));
            }
            other => panic!("expected rows, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn set_read_only_staleness_exact() {
        let mut c = controller();
        c.set_autocommit(true).unwrap();
        c.execute("SET READ_ONLY_STALENESS = 'EXACT_STALENESS 5s'").await.unwrap();
        assert_eq!(c.read_only_staleness(), StalenessBound::ExactStaleness(time::Duration::seconds(5)));
    }

    #[tokio::test]
    async fn run_batch_reports_row_counts() {
        let mut c = controller();
        c.execute("START BATCH DML").await.unwrap();
        c.execute("UPDATE t SET x = 1").await.unwrap();
        match c.execute("RUN BATCH").await.unwrap() {
            StatementResult::Rows(rs) => assert_eq!(rs.rows.len(), 1),
            other => panic!("expected rows, got {other:?}"),
        }
    }
}
