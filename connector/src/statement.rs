//! Statement classification and the parser collaborator boundary (spec.md
//! §6). Full SQL parsing is explicitly out of scope (spec.md §1 Non-goals);
//! this module defines the narrow `Parser` trait the controller depends on
//! plus a keyword-based classifier, the same narrow-boundary-plus-minimal-
//! impl shape as [`crate::db::DatabaseClient`] and its test double.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatementKind {
    ClientSide,
    Query,
    Update,
    Ddl,
    Unknown,
}

/// A recognized control directive, carrying its raw argument text for
/// [`crate::client_statement_executor`] to interpret further. Mirrors
/// spec.md §4.8's directive list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClientSideDirective {
    SetAutocommit(bool),
    ShowAutocommit,
    SetReadOnly(bool),
    ShowReadOnly,
    SetAutocommitDmlMode(String),
    SetReadOnlyStaleness(String),
    SetStatementTimeout(String),
    ClearStatementTimeout,
    SetOptimizerVersion(String),
    SetRetryAbortsInternally(bool),
    Begin { read_only: Option<bool> },
    Commit,
    Rollback,
    StartBatchDdl,
    StartBatchDml,
    RunBatch,
    AbortBatch,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedStatement {
    pub kind: StatementKind,
    pub normalized_sql: String,
    pub directive: Option<ClientSideDirective>,
}

pub trait Parser: Send + Sync {
    fn parse(&self, sql: &str) -> ParsedStatement;
}

/// Keyword-prefix classifier. Good enough to drive dispatch and tests;
/// production deployments are expected to supply a real SQL-aware parser
/// behind the same [`Parser`] trait.
#[derive(Default)]
pub struct DefaultParser;

impl Parser for DefaultParser {
    fn parse(&self, sql: &str) -> ParsedStatement {
        let normalized = sql.trim().to_string();
        let upper = normalized.to_ascii_uppercase();
        let directive = client_side_directive(&upper, &normalized);

        let kind = if directive.is_some() {
            StatementKind::ClientSide
        } else if starts_with_any(&upper, &["SELECT", "WITH"]) {
            StatementKind::Query
        } else if starts_with_any(&upper, &["INSERT", "UPDATE", "DELETE"]) {
            StatementKind::Update
        } else if starts_with_any(&upper, &["CREATE", "ALTER", "DROP"]) {
            StatementKind::Ddl
        } else {
            StatementKind::Unknown
        };

        ParsedStatement {
            kind,
            normalized_sql: normalized,
            directive,
        }
    }
}

fn starts_with_any(upper: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|p| upper.starts_with(p))
}

fn client_side_directive(upper: &str, original: &str) -> Option<ClientSideDirective> {
    let words: Vec<&str> = upper.split_whitespace().collect();
    match words.as_slice() {
        ["COMMIT", ..] => Some(ClientSideDirective::Commit),
        ["ROLLBACK", ..] => Some(ClientSideDirective::Rollback),
        ["RUN", "BATCH", ..] => Some(ClientSideDirective::RunBatch),
        ["ABORT", "BATCH", ..] => Some(ClientSideDirective::AbortBatch),
        ["START", "BATCH", "DDL", ..] => Some(ClientSideDirective::StartBatchDdl),
        ["START", "BATCH", "DML", ..] => Some(ClientSideDirective::StartBatchDml),
        ["BEGIN", rest @ ..] | ["BEGIN", "TRANSACTION", rest @ ..] => {
            let read_only = match rest {
                ["READ", "ONLY", ..] => Some(true),
                ["READ", "WRITE", ..] => Some(false),
                _ => None,
            };
            Some(ClientSideDirective::Begin { read_only })
        }
        ["SHOW", "VARIABLE", "AUTOCOMMIT"] | ["SHOW", "AUTOCOMMIT"] => {
            Some(ClientSideDirective::ShowAutocommit)
        }
        ["SHOW", "VARIABLE", "READONLY"] | ["SHOW", "READ_ONLY"] => {
            Some(ClientSideDirective::ShowReadOnly)
        }
        ["SET", "AUTOCOMMIT", rest @ ..] => {
            parse_bool_assignment(rest).map(ClientSideDirective::SetAutocommit)
        }
        ["SET", "READ_ONLY", rest @ ..] => {
            parse_bool_assignment(rest).map(ClientSideDirective::SetReadOnly)
        }
        ["SET", "RETRY_ABORTS_INTERNALLY", rest @ ..] => {
            parse_bool_assignment(rest).map(ClientSideDirective::SetRetryAbortsInternally)
        }
        ["SET", "AUTOCOMMIT_DML_MODE", ..] => {
            Some(ClientSideDirective::SetAutocommitDmlMode(raw_value_after(
                original, 2,
            )))
        }
        ["SET", "READ_ONLY_STALENESS", ..] => Some(ClientSideDirective::SetReadOnlyStaleness(
            raw_value_after(original, 2),
        )),
        ["SET", "STATEMENT_TIMEOUT", ..] if words.len() > 2 && words[2] == "NULL" => {
            Some(ClientSideDirective::ClearStatementTimeout)
        }
        ["SET", "STATEMENT_TIMEOUT", ..] => Some(ClientSideDirective::SetStatementTimeout(
            raw_value_after(original, 2),
        )),
        ["SET", "OPTIMIZER_VERSION", ..] => Some(ClientSideDirective::SetOptimizerVersion(
            raw_value_after(original, 2),
        )),
        _ => None,
    }
}

fn parse_bool_assignment(rest: &[&str]) -> Option<bool> {
    let value = rest.iter().find(|w| **w != "=" && **w != "TO")?;
    match *value {
        "TRUE" => Some(true),
        "FALSE" => Some(false),
        _ => None,
    }
}

/// Re-derives the raw (non-uppercased) text following the `skip`-th
/// whitespace-delimited token, so directive arguments keep their original
/// casing (e.g. an optimizer version string).
fn raw_value_after(original: &str, skip: usize) -> String {
    original
        .split_whitespace()
        .skip(skip)
        .collect::<Vec<_>>()
        .join(" ")
        .trim_start_matches('=')
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_query() {
        let p = DefaultParser;
        assert_eq!(p.parse("SELECT 1").kind, StatementKind::Query);
        assert_eq!(p.parse("  with t as (select 1) select * from t").kind, StatementKind::Query);
    }

    #[test]
    fn classifies_update_and_ddl() {
        let p = DefaultParser;
        assert_eq!(p.parse("INSERT INTO t VALUES (1)").kind, StatementKind::Update);
        assert_eq!(p.parse("CREATE TABLE t (id INT64)").kind, StatementKind::Ddl);
    }

    #[test]
    fn recognizes_set_autocommit() {
        let p = DefaultParser;
        let parsed = p.parse("SET AUTOCOMMIT = TRUE");
        assert_eq!(parsed.kind, StatementKind::ClientSide);
        assert_eq!(parsed.directive, Some(ClientSideDirective::SetAutocommit(true)));
    }

    #[test]
    fn recognizes_begin_read_only() {
        let p = DefaultParser;
        let parsed = p.parse("BEGIN READ ONLY");
        assert_eq!(
            parsed.directive,
            Some(ClientSideDirective::Begin { read_only: Some(true) })
        );
    }

    #[test]
    fn unknown_statement() {
        let p = DefaultParser;
        assert_eq!(p.parse("FROBNICATE everything").kind, StatementKind::Unknown);
    }
}
