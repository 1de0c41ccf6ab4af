//! In-memory line sources for testing and embedding.

use std::io::{self, BufRead, Cursor};
use std::sync::Arc;

use super::LineSource;

/// In-memory line source backed by a string.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    id: String,
    data: Arc<String>,
}

impl InMemorySource {
    /// Create a new in-memory source with the given text.
    pub fn new(id: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: Arc::new(data.into()),
        }
    }

    /// Create a new in-memory source from a sequence of lines.
    pub fn from_lines<I, S>(id: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut data = String::new();
        for line in lines {
            data.push_str(line.as_ref());
            data.push('\n');
        }
        Self {
            id: id.into(),
            data: Arc::new(data),
        }
    }
}

impl LineSource for InMemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn BufRead + Send>> {
        Ok(Box::new(Cursor::new(self.data.as_ref().clone())))
    }
}

/// In-memory async line source backed by a string.
#[cfg(feature = "async")]
#[derive(Debug, Clone)]
pub struct AsyncInMemorySource {
    id: String,
    data: Arc<String>,
}

#[cfg(feature = "async")]
impl AsyncInMemorySource {
    /// Create a new async in-memory source with the given text.
    pub fn new(id: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: Arc::new(data.into()),
        }
    }

    /// Create a new async in-memory source from a sequence of lines.
    pub fn from_lines<I, S>(id: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut data = String::new();
        for line in lines {
            data.push_str(line.as_ref());
            data.push('\n');
        }
        Self {
            id: id.into(),
            data: Arc::new(data),
        }
    }
}

#[cfg(feature = "async")]
#[async_trait::async_trait]
impl super::AsyncLineSource for AsyncInMemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    async fn open(&self) -> io::Result<Box<dyn tokio::io::AsyncRead + Unpin + Send>> {
        Ok(Box::new(Cursor::new(self.data.as_ref().clone().into_bytes())))
    }
}
