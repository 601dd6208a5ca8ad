//! Blob storage abstraction trait
//!
//! This module defines the BlobStore trait that blob storage backends must
//! implement.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Container create failed: {0}")]
    ContainerCreateFailed(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Blob storage abstraction
///
/// Request handlers depend on this trait instead of a concrete client so
/// tests can substitute a recording double.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Create the backing container if it does not exist yet. An
    /// already-existing container, including one created concurrently,
    /// is not an error.
    async fn ensure_container(&self) -> StorageResult<()>;

    /// Upload a blob and return its publicly accessible URL.
    async fn upload_blob(
        &self,
        blob_name: &str,
        content_type: &str,
        data: Bytes,
    ) -> StorageResult<String>;
}
