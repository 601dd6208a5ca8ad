//! CloudTunes Storage Library
//!
//! Blob storage abstraction for the stream service: the `BlobStore` trait,
//! its Azure Blob Storage implementation, and the lazily-initialized handle
//! the API holds. A recording double for tests lives in `test_helpers`.

pub mod azure;
pub mod handle;
pub mod test_helpers;
pub mod traits;

// Re-export commonly used types
pub use azure::AzureBlobStore;
pub use handle::BlobStoreHandle;
pub use traits::{BlobStore, StorageError, StorageResult};
