//! Async line source trait definition.

use std::fmt::Debug;

use async_trait::async_trait;
use tokio::io::AsyncRead;

/// Trait for asynchronous line sources.
#[async_trait]
pub trait AsyncLineSource: Send + Sync + Debug {
    /// Returns a unique identifier for this source.
    fn id(&self) -> &str;

    /// Open and return a new async readable stream.
    ///
    /// Each call should return a fresh stream positioned at the beginning.
    async fn open(&self) -> std::io::Result<Box<dyn AsyncRead + Unpin + Send>>;
}
