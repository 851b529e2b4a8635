//! Mode-flag value types held in [`crate::connection::ConnectionState`].

use time::{Duration, OffsetDateTime};

/// A read snapshot policy. Mirrors the five staleness modes named in
/// spec.md §3; `MaxStaleness`/`MinReadTimestamp` are only legal while the
/// connection is `autocommit && !in_transaction` (checked by the
/// controller, not by this type).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StalenessBound {
    Strong,
    ExactStaleness(Duration),
    ReadTimestamp(OffsetDateTime),
    MaxStaleness(Duration),
    MinReadTimestamp(OffsetDateTime),
}

impl StalenessBound {
    /// Whether this bound is only legal in a single-use (autocommit,
    /// no explicit transaction) context. See spec.md invariant:
    /// `readOnlyStaleness.mode ∈ {MAX_STALENESS, MIN_READ_TIMESTAMP} ⇒
    /// autocommit ∧ ¬inTransaction`.
    pub fn requires_single_use(&self) -> bool {
        matches!(
            self,
            StalenessBound::MaxStaleness(_) | StalenessBound::MinReadTimestamp(_)
        )
    }
}

impl Default for StalenessBound {
    fn default() -> Self {
        StalenessBound::Strong
    }
}

/// Mirrors spec.md's `autocommitDmlMode`. Only meaningful when
/// `autocommit ∧ ¬readOnly`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AutocommitDmlMode {
    #[default]
    Transactional,
    TransactionalWithRetry,
    PartitionedNonAtomic,
}

/// Optimizer hints merged from construction-time defaults, attached to
/// every query sent to the database client.
#[derive(Clone, Debug, Default)]
pub struct QueryOptions {
    pub optimizer_version: Option<String>,
    pub optimizer_statistics_package: Option<String>,
}

impl QueryOptions {
    /// Merge `overrides` on top of `self`, `Some` values in `overrides`
    /// winning. Used when a client-side `SET` statement only touches one
    /// field.
    pub fn merged_with(&self, overrides: &QueryOptions) -> QueryOptions {
        QueryOptions {
            optimizer_version: overrides
                .optimizer_version
                .clone()
                .or_else(|| self.optimizer_version.clone()),
            optimizer_statistics_package: overrides
                .optimizer_statistics_package
                .clone()
                .or_else(|| self.optimizer_statistics_package.clone()),
        }
    }
}

/// Per-statement timeout. `None` means "no timeout" (spec.md §3).
#[derive(Clone, Copy, Debug, Default)]
pub struct StatementTimeout(pub Option<Duration>);

impl StatementTimeout {
    pub fn none() -> Self {
        StatementTimeout(None)
    }

    pub fn of(duration: Duration) -> Self {
        StatementTimeout(Some(duration))
    }

    pub fn as_std(&self) -> Option<std::time::Duration> {
        self.0.map(|d| d.unsigned_abs())
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }
}
