//! Azure Blob Storage backend.

use async_trait::async_trait;
use azure_storage::ConnectionString;
use azure_storage_blobs::container::PublicAccess;
use azure_storage_blobs::prelude::*;
use bytes::Bytes;

use crate::traits::{BlobStore, StorageError, StorageResult};

/// Blob store backed by an Azure Storage account.
pub struct AzureBlobStore {
    container: ContainerClient,
    container_name: String,
}

impl AzureBlobStore {
    /// Build a client from an Azure storage connection string. No network
    /// traffic happens here; a bad account only surfaces on first use.
    pub fn from_connection_string(conn_str: &str, container_name: &str) -> StorageResult<Self> {
        let parsed = ConnectionString::new(conn_str).map_err(|e| {
            StorageError::BackendError(format!("invalid connection string: {}", e))
        })?;
        let account = parsed.account_name.ok_or_else(|| {
            StorageError::BackendError("connection string has no account name".to_string())
        })?;
        let credentials = parsed.storage_credentials().map_err(|e| {
            StorageError::BackendError(format!("invalid storage credentials: {}", e))
        })?;

        let container =
            ClientBuilder::new(account.to_string(), credentials).container_client(container_name);

        Ok(Self {
            container,
            container_name: container_name.to_string(),
        })
    }
}

#[async_trait]
impl BlobStore for AzureBlobStore {
    async fn ensure_container(&self) -> StorageResult<()> {
        let exists = self
            .container
            .exists()
            .await
            .map_err(|e| StorageError::BackendError(e.to_string()))?;
        if exists {
            return Ok(());
        }

        // Blob-level public access so returned URLs are playable without
        // credentials. A concurrent creator winning the race yields a 409,
        // which counts as success.
        match self
            .container
            .create()
            .public_access(PublicAccess::Blob)
            .await
        {
            Ok(_) => {
                tracing::info!(container = %self.container_name, "Blob container created");
                Ok(())
            }
            Err(e)
                if e.as_http_error()
                    .map(|http| http.status() == azure_core::StatusCode::Conflict)
                    .unwrap_or(false) =>
            {
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    container = %self.container_name,
                    "Blob container create failed"
                );
                Err(StorageError::ContainerCreateFailed(e.to_string()))
            }
        }
    }

    async fn upload_blob(
        &self,
        blob_name: &str,
        content_type: &str,
        data: Bytes,
    ) -> StorageResult<String> {
        let blob = self.container.blob_client(blob_name);
        let size = data.len() as u64;
        let start = std::time::Instant::now();

        blob.put_block_blob(data)
            .content_type(content_type.to_string())
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    container = %self.container_name,
                    blob = %blob_name,
                    size_bytes = size,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "Blob upload failed"
                );
                StorageError::UploadFailed(e.to_string())
            })?;

        let url = blob
            .url()
            .map_err(|e| StorageError::BackendError(e.to_string()))?;

        tracing::info!(
            container = %self.container_name,
            blob = %blob_name,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Blob upload successful"
        );

        Ok(url.to_string())
    }
}
