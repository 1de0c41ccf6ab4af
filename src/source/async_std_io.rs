//! Async line sources for files and stdin.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncRead;

use super::AsyncLineSource;

/// Async line source reading from stdin.
#[derive(Debug, Clone)]
pub struct AsyncStdinSource {
    id: String,
}

impl AsyncStdinSource {
    /// Create a new async stdin line source.
    pub fn new() -> Self {
        Self { id: "-".into() }
    }
}

impl Default for AsyncStdinSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AsyncLineSource for AsyncStdinSource {
    fn id(&self) -> &str {
        &self.id
    }

    async fn open(&self) -> std::io::Result<Box<dyn AsyncRead + Unpin + Send>> {
        Ok(Box::new(tokio::io::stdin()))
    }
}

/// Async line source reading from a file.
#[derive(Debug, Clone)]
pub struct AsyncFileSource {
    id: String,
    path: PathBuf,
}

impl AsyncFileSource {
    /// Create a new async file line source.
    pub fn new(path: PathBuf) -> Self {
        let id = path.to_string_lossy().into_owned();
        Self { id, path }
    }

    /// Get the file path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl AsyncLineSource for AsyncFileSource {
    fn id(&self) -> &str {
        &self.id
    }

    async fn open(&self) -> std::io::Result<Box<dyn AsyncRead + Unpin + Send>> {
        let file = tokio::fs::File::open(&self.path).await?;
        Ok(Box::new(file))
    }
}
