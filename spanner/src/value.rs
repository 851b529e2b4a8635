use chrono::{NaiveDate, NaiveDateTime};
use google_cloud_googleapis::spanner::v1::transaction_options::read_only::TimestampBound as ProtoBound;
use google_cloud_googleapis::spanner::v1::transaction_options::ReadOnly;
use prost_types::Timestamp;
use std::ops::Deref;
use std::time::Duration;

/// TimestampBound represents a read snapshot policy: how stale a read is
/// allowed to be relative to the latest committed version.
#[derive(Clone)]
pub enum TimestampBound {
    Strong,
    ExactStaleness(Duration),
    MaxStaleness(Duration),
    ReadTimestamp(Timestamp),
    MinReadTimestamp(Timestamp),
}

impl TimestampBound {
    pub fn strong_read() -> Self {
        TimestampBound::Strong
    }

    pub fn exact_staleness(d: Duration) -> Self {
        TimestampBound::ExactStaleness(d)
    }

    pub fn max_staleness(d: Duration) -> Self {
        TimestampBound::MaxStaleness(d)
    }

    pub fn read_timestamp(ts: Timestamp) -> Self {
        TimestampBound::ReadTimestamp(ts)
    }

    pub fn min_read_timestamp(ts: Timestamp) -> Self {
        TimestampBound::MinReadTimestamp(ts)
    }
}

impl From<TimestampBound> for ReadOnly {
    fn from(tb: TimestampBound) -> Self {
        let bound = match tb {
            TimestampBound::Strong => ProtoBound::Strong(true),
            TimestampBound::ExactStaleness(d) => ProtoBound::ExactStaleness(d.into()),
            TimestampBound::MaxStaleness(d) => ProtoBound::MaxStaleness(d.into()),
            TimestampBound::ReadTimestamp(t) => ProtoBound::ReadTimestamp(t),
            TimestampBound::MinReadTimestamp(t) => ProtoBound::MinReadTimestamp(t),
        };
        ReadOnly {
            return_read_timestamp: true,
            timestamp_bound: Some(bound),
        }
    }
}

pub struct CommitTimestamp {
    pub timestamp: NaiveDateTime,
}

impl Deref for CommitTimestamp {
    type Target = NaiveDateTime;

    fn deref(&self) -> &Self::Target {
        &self.timestamp
    }
}

impl From<CommitTimestamp> for NaiveDateTime {
    fn from(s: CommitTimestamp) -> Self {
        s.timestamp
    }
}

impl From<NaiveDateTime> for CommitTimestamp {
    fn from(s: NaiveDateTime) -> Self {
        CommitTimestamp { timestamp: s }
    }
}
