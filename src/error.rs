//! Error types.
//!
//! All errors are caller-input errors: they are raised synchronously
//! before (or instead of) a simulation and never retried. The engine has
//! no external failure sources.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Convenience alias for results carrying a [`SchedError`].
pub type SchedResult<T> = Result<T, SchedError>;

/// A scheduling error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedError {
    /// Error category.
    pub kind: ErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of scheduling errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// A process descriptor is malformed: zero or duplicate id,
    /// negative arrival time, or non-positive burst time.
    InvalidProcessSpec,
    /// A simulation parameter is out of range: non-positive quantum
    /// or negative context-switch time.
    InvalidParameter,
    /// A defined aggregate was requested over an empty collection.
    EmptyDataset,
}

impl SchedError {
    /// Creates an error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn invalid_spec(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidProcessSpec, message)
    }

    pub(crate) fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidParameter, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidProcessSpec => "invalid process spec",
            ErrorKind::InvalidParameter => "invalid parameter",
            ErrorKind::EmptyDataset => "empty dataset",
        };
        f.write_str(name)
    }
}

impl fmt::Display for SchedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for SchedError {}
