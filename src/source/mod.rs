//! Line sources over files, stdin, and in-memory text.
//!
//! This module provides:
//! - `LineSource`: Trait for synchronous line sources
//! - Standard implementations for files and stdin
//! - In-memory implementations for testing and embedding

mod input;
mod memory;
mod std_io;

pub use input::LineSource;
#[cfg(feature = "async")]
pub use memory::AsyncInMemorySource;
pub use memory::InMemorySource;
pub use std_io::{FileSource, StdinSource};

// Async support
#[cfg(feature = "async")]
mod async_input;
#[cfg(feature = "async")]
mod async_std_io;

#[cfg(feature = "async")]
pub use async_input::AsyncLineSource;
#[cfg(feature = "async")]
pub use async_std_io::{AsyncFileSource, AsyncStdinSource};
