//! Tagged-status error type shared by every component (C1-C9).
//!
//! The state machine core never touches `tonic::Status` directly; only the
//! production `db::adapter` module translates gRPC status codes into
//! [`Code`]. This keeps `connection.rs`, the unit-of-work implementations,
//! and the test double in `db::testing` free of any transport dependency.

use std::fmt;

/// Status codes surfaced by this crate. A deliberate subset of the gRPC
/// status space: only the codes named in spec §7 are representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Code {
    Cancelled,
    InvalidArgument,
    DeadlineExceeded,
    NotFound,
    FailedPrecondition,
    Aborted,
    Internal,
    Unavailable,
    Unknown,
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Code::Cancelled => "CANCELLED",
            Code::InvalidArgument => "INVALID_ARGUMENT",
            Code::DeadlineExceeded => "DEADLINE_EXCEEDED",
            Code::NotFound => "NOT_FOUND",
            Code::FailedPrecondition => "FAILED_PRECONDITION",
            Code::Aborted => "ABORTED",
            Code::Internal => "INTERNAL",
            Code::Unavailable => "UNAVAILABLE",
            Code::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

#[derive(thiserror::Error, Debug, Clone)]
#[error("{code}: {message}")]
pub struct Error {
    pub code: Code,
    pub message: String,
}

impl Error {
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Error {
            code,
            message: message.into(),
        }
    }

    pub fn failed_precondition(message: impl Into<String>) -> Self {
        Error::new(Code::FailedPrecondition, message)
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::new(Code::InvalidArgument, message)
    }

    pub fn aborted(message: impl Into<String>) -> Self {
        Error::new(Code::Aborted, message)
    }

    pub fn cancelled(message: impl Into<String>) -> Self {
        Error::new(Code::Cancelled, message)
    }

    pub fn deadline_exceeded(message: impl Into<String>) -> Self {
        Error::new(Code::DeadlineExceeded, message)
    }

    pub fn closed() -> Self {
        Error::failed_precondition("connection is closed")
    }

    pub fn is_aborted(&self) -> bool {
        self.code == Code::Aborted
    }

    pub fn is_cancelled(&self) -> bool {
        self.code == Code::Cancelled
    }
}

pub type Result<T> = std::result::Result<T, Error>;
