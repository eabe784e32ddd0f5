use std::str::Utf8Error;

use thiserror::Error;

/// Failures reported by editor operations and command parsing.
///
/// Every variant is raised before any state is touched, so a failed
/// command leaves the editor exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("selection {start}..={end} is out of range for a buffer of {len} chars")]
    OutOfRangeSelection { start: usize, end: usize, len: usize },

    #[error("{operation} expects {expected}, got {argument:?}")]
    MalformedNumericArgument {
        operation: &'static str,
        expected: &'static str,
        argument: String,
    },

    #[error("input line is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] Utf8Error),
}
