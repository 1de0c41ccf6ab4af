//! Error types for parse operations.
//!
//! This module provides:
//! - `ParseError`: The two fatal failure kinds a parse can surface
//!
//! A parse call either returns a complete result or exactly one of these
//! errors; there is no accumulation mode and no partial-result recovery.

use thiserror::Error;

use crate::schema::SchemaViolation;

/// Errors produced by the parse operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The line source could not be opened or read.
    ///
    /// Surfaces before any row is produced when opening fails, or as soon
    /// as the underlying reader fails mid-stream.
    #[error("source '{target}' unavailable: {source}")]
    SourceUnavailable {
        /// Identifier of the source ("-" for stdin, file path for files).
        target: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A row was rejected by the schema.
    ///
    /// Fatal to the whole call: records accumulated before this row are
    /// discarded and no further lines are read.
    #[error("source '{target}' line {line}: row {fields:?} rejected: {violation}")]
    Validation {
        /// Identifier of the source
        target: String,
        /// 1-based line number in the source, blank lines included
        line: usize,
        /// The trimmed fields of the offending row
        fields: Vec<String>,
        /// The schema's failure reason
        #[source]
        violation: SchemaViolation,
    },
}

impl ParseError {
    /// Identifier of the source this error originated from.
    pub fn target(&self) -> &str {
        match self {
            ParseError::SourceUnavailable { target, .. } => target,
            ParseError::Validation { target, .. } => target,
        }
    }
}
