//! Test helpers for storage tests
//!
//! Recording blob store that captures uploads in memory so handler tests
//! can assert exactly what reached storage without any network.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;

use crate::traits::{BlobStore, StorageError, StorageResult};

/// A single captured upload.
#[derive(Debug, Clone)]
pub struct RecordedUpload {
    pub blob_name: String,
    pub content_type: String,
    pub data: Bytes,
}

/// Blob store that records uploads instead of sending them anywhere.
/// Returned URLs are `{base_url}/{blob_name}`.
pub struct RecordingBlobStore {
    base_url: String,
    uploads: Mutex<Vec<RecordedUpload>>,
    ensure_calls: AtomicUsize,
    upload_calls: AtomicUsize,
    fail_uploads: AtomicBool,
}

impl RecordingBlobStore {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            uploads: Mutex::new(Vec::new()),
            ensure_calls: AtomicUsize::new(0),
            upload_calls: AtomicUsize::new(0),
            fail_uploads: AtomicBool::new(false),
        }
    }

    /// Make subsequent uploads fail, simulating an unreachable account.
    pub fn set_fail_uploads(&self, fail: bool) {
        self.fail_uploads.store(fail, Ordering::SeqCst);
    }

    pub fn uploads(&self) -> Vec<RecordedUpload> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn ensure_calls(&self) -> usize {
        self.ensure_calls.load(Ordering::SeqCst)
    }

    pub fn upload_calls(&self) -> usize {
        self.upload_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BlobStore for RecordingBlobStore {
    async fn ensure_container(&self) -> StorageResult<()> {
        self.ensure_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn upload_blob(
        &self,
        blob_name: &str,
        content_type: &str,
        data: Bytes,
    ) -> StorageResult<String> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_uploads.load(Ordering::SeqCst) {
            return Err(StorageError::UploadFailed("injected failure".to_string()));
        }
        self.uploads.lock().unwrap().push(RecordedUpload {
            blob_name: blob_name.to_string(),
            content_type: content_type.to_string(),
            data,
        });
        Ok(format!("{}/{}", self.base_url, blob_name))
    }
}
