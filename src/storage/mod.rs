pub mod s3;

use async_trait::async_trait;
use thiserror::Error;

// Re-exports for convenience
pub use s3::S3Lister;

/// Parameters of a single "list objects" call against the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchRequest {
    /// Upper bound on keys returned; `None` lets the provider pick its own page size.
    pub max_keys: Option<u32>,
    pub continuation_token: Option<String>,
}

/// One batch of keys as returned by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyBatch {
    pub keys: Vec<String>,
    pub is_truncated: bool,
    pub next_continuation_token: Option<String>,
}

/// Failure reported by the object-storage provider.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct StorageError {
    message: String,
}

impl StorageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Key enumeration over a single bucket.
///
/// Implementations are shared by every request handler, so they must be
/// stateless per call.
#[async_trait]
pub trait ObjectLister: Send + Sync {
    async fn list_batch(&self, request: BatchRequest) -> Result<KeyBatch, StorageError>;
}
