//! Schema abstraction for validating and transforming rows.
//!
//! This module provides:
//! - `RowSchema`: Trait for row validators/transformers
//! - `SchemaViolation`: Structured failure reason returned by schemas
//! - `SerdeSchema`: serde-backed schema deserializing rows positionally
//!
//! The parser itself never re-types fields; any coercion (string to
//! number, range checks, arity checks) happens inside a schema.

mod de;

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Reason a schema rejected a row.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaViolation {
    /// The row has a different number of fields than the schema expects.
    #[error("expected {expected} field(s), got {actual}")]
    Arity {
        /// Number of fields the schema consumed or requires
        expected: usize,
        /// Number of fields the row actually carried
        actual: usize,
    },

    /// A single field failed coercion or a format check.
    #[error("field {index} ('{value}'): expected {expected}")]
    Field {
        /// 0-based position of the field within the row
        index: usize,
        /// The offending field value, after trimming
        value: String,
        /// What the schema expected at this position
        expected: String,
    },

    /// Any other schema-specific failure.
    #[error("{0}")]
    Other(String),
}

impl serde::de::Error for SchemaViolation {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        SchemaViolation::Other(msg.to_string())
    }
}

/// Trait for row validators.
///
/// A schema receives the trimmed fields of one non-blank row and either
/// produces a typed record or rejects the row. Schemas are invoked once
/// per row in source order; the first rejection aborts the whole parse.
///
/// Any `Fn(&[String]) -> Result<R, SchemaViolation>` closure is a schema,
/// so ad-hoc validators need no newtype:
///
/// ```rust,ignore
/// let pair = |fields: &[String]| match fields {
///     [a, b] => Ok((a.clone(), b.clone())),
///     _ => Err(SchemaViolation::Arity { expected: 2, actual: fields.len() }),
/// };
/// let pairs = read_records(&source, &pair)?;
/// ```
pub trait RowSchema {
    /// The typed record produced on success.
    type Record;

    /// Validate and transform one row.
    fn validate(&self, fields: &[String]) -> Result<Self::Record, SchemaViolation>;
}

impl<R, F> RowSchema for F
where
    F: Fn(&[String]) -> Result<R, SchemaViolation>,
{
    type Record = R;

    fn validate(&self, fields: &[String]) -> Result<R, SchemaViolation> {
        self(fields)
    }
}

/// Schema that deserializes each row positionally into `T` via serde.
///
/// Fields are matched to `T` in order: tuples, tuple structs, and field
/// structs all work, as does `Vec<String>` for width-agnostic capture.
/// Numeric, bool, and char targets are parsed from the field text; an
/// empty field deserializes to `None` for `Option` targets. A row wider
/// than what `T` consumed is rejected with [`SchemaViolation::Arity`].
pub struct SerdeSchema<T> {
    _record: PhantomData<fn() -> T>,
}

impl<T> SerdeSchema<T> {
    /// Create a schema producing records of type `T`.
    pub fn new() -> Self {
        Self {
            _record: PhantomData,
        }
    }
}

impl<T> Default for SerdeSchema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SerdeSchema<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for SerdeSchema<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerdeSchema").finish()
    }
}

impl<T: DeserializeOwned> RowSchema for SerdeSchema<T> {
    type Record = T;

    fn validate(&self, fields: &[String]) -> Result<T, SchemaViolation> {
        let mut deserializer = de::RowDeserializer::new(fields);
        let record = T::deserialize(&mut deserializer)?;
        deserializer.end()?;
        Ok(record)
    }
}
