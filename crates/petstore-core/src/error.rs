//! # Error Types
//!
//! Structured validation errors for the domain layer, built with `thiserror`.
//! Each variant carries the offending input so callers can report actionable
//! messages without re-deriving context.

use thiserror::Error;

/// Domain primitive validation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A status string did not name one of the known pet statuses.
    #[error("unknown pet status: {0}")]
    UnknownStatus(String),

    /// A tag was empty after trimming surrounding whitespace.
    #[error("tag must not be empty")]
    EmptyTag,

    /// A tag exceeded the maximum permitted length.
    #[error("tag must not exceed {max} characters, got {actual}")]
    TagTooLong {
        /// Maximum permitted length in characters.
        max: usize,
        /// Actual length of the rejected tag.
        actual: usize,
    },
}
