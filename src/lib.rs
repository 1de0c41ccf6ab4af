//! # rowio
//!
//! Line-oriented ingestion of delimited text into rows or typed records.
//!
//! ## Overview
//!
//! rowio provides:
//! - **Line sources**: Read lines from files, stdin, or in-memory text
//! - **Row parsing**: Split each non-blank line on `,` into trimmed fields
//! - **Schema validation**: Optionally transform each row into a typed
//!   record through a caller-supplied [`RowSchema`]
//! - **Sync and Async**: Both synchronous and asynchronous parsing
//! - **Fail-fast errors**: A parse either returns a complete result or one
//!   descriptive failure, never a mix
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rowio::{FileSource, SerdeSchema, read_records, read_rows};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! fn main() -> Result<(), rowio::ParseError> {
//!     let source = FileSource::new("people.csv".into());
//!
//!     // Untyped: every non-blank line becomes a Vec<String>.
//!     let rows = read_rows(&source)?;
//!
//!     // Typed: each row is validated into a Person; the first bad row
//!     // fails the whole call.
//!     let people: Vec<Person> = read_records(&source, &SerdeSchema::new())?;
//!
//!     println!("{} rows, {} people", rows.len(), people.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `async` - Async parsing with Tokio (enabled by default)
//!
//! ## Splitting semantics
//!
//! Splitting is a plain `,` split with no quote awareness: quoted fields,
//! escaped delimiters, and multi-character delimiters are not handled.
//! Each field is trimmed of surrounding whitespace. Lines that are empty
//! after trimming are skipped and never appear in the result. Rows of
//! differing width are accepted verbatim when no schema is involved; any
//! width or type constraint is the schema's job.

// Core modules
pub mod error;
pub mod parser;
pub mod row;
pub mod schema;
pub mod source;

// Async modules (feature-gated)
#[cfg(feature = "async")]
pub mod parser_async;

// Re-exports for convenience
pub use error::ParseError;
pub use parser::{read_records, read_rows};
pub use row::Row;
pub use schema::{RowSchema, SchemaViolation, SerdeSchema};
pub use source::{FileSource, InMemorySource, LineSource, StdinSource};

// Async re-exports
#[cfg(feature = "async")]
pub use parser_async::{read_records_async, read_rows_async};
#[cfg(feature = "async")]
pub use source::{AsyncFileSource, AsyncInMemorySource, AsyncLineSource, AsyncStdinSource};

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;
