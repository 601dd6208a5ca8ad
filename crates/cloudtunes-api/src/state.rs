//! Application state and sub-state extractors.
//!
//! AppState is split into domain sub-states so handlers can extract only what they need
//! via Axum's `FromRef`: catalog handlers take the song repository, upload handlers take
//! the blob store handle, and neither sees the other's dependencies.

use std::sync::Arc;

use cloudtunes_core::Config;
use cloudtunes_db::SongRepository;
use cloudtunes_storage::BlobStoreHandle;

/// Song catalog dependencies. The repository sits behind a trait so tests can
/// substitute an in-memory double.
#[derive(Clone)]
pub struct CatalogState {
    pub songs: Arc<dyn SongRepository>,
}

/// Streaming dependencies: the lazily connected blob store for uploaded music files.
#[derive(Clone)]
pub struct StreamState {
    pub blob_store: Arc<BlobStoreHandle>,
}

/// Main application state: aggregates sub-states for dependency injection.
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogState,
    pub stream: StreamState,
    pub config: Config,
}

// ----- FromRef for sub-state extraction -----

impl axum::extract::FromRef<Arc<AppState>> for CatalogState {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.catalog.clone()
    }
}

impl axum::extract::FromRef<Arc<AppState>> for StreamState {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.stream.clone()
    }
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
