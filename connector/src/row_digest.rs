//! Order-sensitive row digest used by [`crate::read_write_transaction`] to
//! compare a replayed statement's result against the one recorded before an
//! abort (spec.md §4.5). Hashing the logical value, not the wire encoding,
//! means two result sets compare equal even if the server re-encodes a value
//! differently on replay.

use std::hash::{Hash, Hasher};

use crate::db::{ResultSet, SpannerValue};

/// A stable digest over a [`ResultSet`]'s rows, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowDigest(u64);

impl RowDigest {
    pub fn of(result: &ResultSet) -> RowDigest {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        result.rows.len().hash(&mut hasher);
        for row in &result.rows {
            row.len().hash(&mut hasher);
            for value in row {
                hash_value(value, &mut hasher);
            }
        }
        RowDigest(hasher.finish())
    }
}

fn hash_value<H: Hasher>(value: &SpannerValue, hasher: &mut H) {
    match value {
        SpannerValue::Null => 0u8.hash(hasher),
        SpannerValue::Bool(b) => {
            1u8.hash(hasher);
            b.hash(hasher);
        }
        SpannerValue::Int64(i) => {
            2u8.hash(hasher);
            i.hash(hasher);
        }
        SpannerValue::Float64(f) => {
            3u8.hash(hasher);
            f.to_bits().hash(hasher);
        }
        SpannerValue::String(s) => {
            4u8.hash(hasher);
            s.hash(hasher);
        }
        SpannerValue::Bytes(b) => {
            5u8.hash(hasher);
            b.hash(hasher);
        }
        SpannerValue::Timestamp(t) => {
            6u8.hash(hasher);
            t.unix_timestamp_nanos().hash(hasher);
        }
    }
}

/// The recorded outcome of one statement in a read/write transaction's
/// history, used to detect divergence on replay (spec.md §4.5).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordedOutcome {
    Query(RowDigest),
    Update(i64),
}

impl RecordedOutcome {
    pub fn matches_query(&self, result: &ResultSet) -> bool {
        matches!(self, RecordedOutcome::Query(d) if *d == RowDigest::of(result))
    }

    pub fn matches_update(&self, row_count: i64) -> bool {
        matches!(self, RecordedOutcome::Update(n) if *n == row_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Row;

    fn rs(rows: Vec<Row>) -> ResultSet {
        ResultSet {
            columns: vec!["a".into()],
            rows,
        }
    }

    #[test]
    fn identical_rows_digest_equal() {
        let a = rs(vec![vec![SpannerValue::Int64(1)], vec![SpannerValue::Int64(2)]]);
        let b = rs(vec![vec![SpannerValue::Int64(1)], vec![SpannerValue::Int64(2)]]);
        assert_eq!(RowDigest::of(&a), RowDigest::of(&b));
    }

    #[test]
    fn reordered_rows_digest_differ() {
        let a = rs(vec![vec![SpannerValue::Int64(1)], vec![SpannerValue::Int64(2)]]);
        let b = rs(vec![vec![SpannerValue::Int64(2)], vec![SpannerValue::Int64(1)]]);
        assert_ne!(RowDigest::of(&a), RowDigest::of(&b));
    }

    #[test]
    fn differing_values_digest_differ() {
        let a = rs(vec![vec![SpannerValue::String("x".into())]]);
        let b = rs(vec![vec![SpannerValue::String("y".into())]]);
        assert_ne!(RowDigest::of(&a), RowDigest::of(&b));
    }
}
