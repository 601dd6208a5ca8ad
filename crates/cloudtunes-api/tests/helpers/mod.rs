//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p cloudtunes-api --test songs_test` or
//! `cargo test -p cloudtunes-api`. Both backends are in-memory doubles, so no
//! Postgres instance or Azure account is needed.

#![allow(dead_code)]

pub mod fixtures;

use axum_test::TestServer;
use cloudtunes_api::setup::routes;
use cloudtunes_api::state::{AppState, CatalogState, StreamState};
use cloudtunes_core::Config;
use cloudtunes_db::test_helpers::InMemorySongRepository;
use cloudtunes_storage::test_helpers::RecordingBlobStore;
use cloudtunes_storage::BlobStoreHandle;
use std::sync::Arc;

/// Test application: server plus handles on the backend doubles.
pub struct TestApp {
    pub server: TestServer,
    pub songs: Arc<InMemorySongRepository>,
    pub blobs: Arc<RecordingBlobStore>,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

/// Setup test app with an in-memory catalog and a recording blob store.
pub fn setup_test_app() -> TestApp {
    let blobs = Arc::new(RecordingBlobStore::new(
        "https://testaccount.blob.core.windows.net/music-files",
    ));
    let blob_handle = BlobStoreHandle::with_store(blobs.clone());
    build_test_app(blob_handle, blobs)
}

/// Setup test app whose blob store has no connection string.
///
/// The recording double is returned but never wired in; upload requests must
/// fail on configuration before any storage call could happen.
pub fn setup_test_app_unconfigured_storage() -> TestApp {
    let blobs = Arc::new(RecordingBlobStore::new("https://unused.invalid"));
    let blob_handle = BlobStoreHandle::new(None, "music-files");
    build_test_app(blob_handle, blobs)
}

fn build_test_app(blob_handle: BlobStoreHandle, blobs: Arc<RecordingBlobStore>) -> TestApp {
    let config = test_config();
    let songs = Arc::new(InMemorySongRepository::new());

    let state = Arc::new(AppState {
        catalog: CatalogState {
            songs: songs.clone(),
        },
        stream: StreamState {
            blob_store: Arc::new(blob_handle),
        },
        config: config.clone(),
    });

    let app = routes::setup_routes(&config, state).expect("Failed to setup routes");
    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        songs,
        blobs,
    }
}

fn test_config() -> Config {
    Config {
        server_port: 0,
        environment: "test".to_string(),
        cors_origins: vec!["*".to_string()],
        db_max_connections: 5,
        db_timeout_seconds: 5,
        max_upload_size_bytes: 10 * 1024 * 1024,
        cosmos_db_connection_string: None,
        storage_connection_string: None,
    }
}
