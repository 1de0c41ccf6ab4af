//! Line source trait definition.

use std::fmt::Debug;
use std::io::BufRead;

/// Trait for synchronous line sources.
///
/// Implementors provide a way to open a buffered reader over some
/// underlying resource such as a file, stdin, or an in-memory buffer. The
/// parser consumes the reader line by line; how lines are framed (LF or
/// CRLF) is the reader's concern.
pub trait LineSource: Send + Sync + Debug {
    /// Returns a unique identifier for this source.
    ///
    /// This is used for error messages.
    /// Convention: "-" for stdin, file path for files.
    fn id(&self) -> &str;

    /// Open and return a new buffered reader.
    ///
    /// Each call should return a fresh reader positioned at the beginning.
    /// A single reader must not be consumed by two callers.
    fn open(&self) -> std::io::Result<Box<dyn BufRead + Send>>;
}
