//! Lazily-initialized blob store holder.

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::azure::AzureBlobStore;
use crate::traits::{BlobStore, StorageError, StorageResult};

/// Holds the blob store for the stream service, built on first use.
///
/// When the connection string is absent, `get` fails before any client is
/// constructed, so no request ever reaches the network unconfigured. A failed
/// attempt leaves the cell empty and the next request retries. Tests inject a
/// pre-built store with `with_store`.
pub struct BlobStoreHandle {
    conn_string: Option<String>,
    container_name: String,
    store: OnceCell<Arc<dyn BlobStore>>,
}

impl BlobStoreHandle {
    pub fn new(conn_string: Option<String>, container_name: &str) -> Self {
        Self {
            conn_string,
            container_name: container_name.to_string(),
            store: OnceCell::new(),
        }
    }

    /// Build a handle around an existing store, bypassing the connection
    /// string entirely.
    pub fn with_store(store: Arc<dyn BlobStore>) -> Self {
        Self {
            conn_string: None,
            container_name: String::new(),
            store: OnceCell::new_with(Some(store)),
        }
    }

    /// Get the store, building the Azure client on first call.
    pub async fn get(&self) -> StorageResult<&Arc<dyn BlobStore>> {
        self.store
            .get_or_try_init(|| async {
                let conn = self.conn_string.as_deref().ok_or_else(|| {
                    StorageError::ConfigError(
                        "Storage connection string not configured".to_string(),
                    )
                })?;
                let store = AzureBlobStore::from_connection_string(conn, &self.container_name)?;
                Ok(Arc::new(store) as Arc<dyn BlobStore>)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::RecordingBlobStore;

    #[tokio::test]
    async fn test_get_without_connection_string_is_config_error() {
        let handle = BlobStoreHandle::new(None, "music-files");
        match handle.get().await {
            Err(StorageError::ConfigError(msg)) => {
                assert_eq!(msg, "Storage connection string not configured");
            }
            other => panic!("expected ConfigError, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_missing_connection_string_fails_on_every_call() {
        let handle = BlobStoreHandle::new(None, "music-files");
        assert!(handle.get().await.is_err());
        assert!(handle.get().await.is_err());
    }

    #[tokio::test]
    async fn test_with_store_returns_injected_store() {
        let store = Arc::new(RecordingBlobStore::new("https://test.blob/music-files"));
        let handle = BlobStoreHandle::with_store(store.clone());

        let resolved = handle.get().await.unwrap();
        resolved.ensure_container().await.unwrap();
        assert_eq!(store.ensure_calls(), 1);
    }
}
