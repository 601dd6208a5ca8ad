//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from main.rs
//! for better organization and testability.

pub mod routes;
pub mod server;

use crate::state::{AppState, CatalogState, StreamState};
use anyhow::Result;
use cloudtunes_core::constants::MUSIC_CONTAINER;
use cloudtunes_core::Config;
use cloudtunes_db::{CatalogDb, PgSongRepository, SongRepository};
use cloudtunes_storage::BlobStoreHandle;
use std::sync::Arc;

/// Initialize the entire application
///
/// Neither backend is contacted here. The database pool and the blob store both
/// connect on first use, so the server boots whether or not their connection
/// strings are set and each request reports missing configuration on its own.
pub fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Initialize telemetry first
    crate::telemetry::init_telemetry();

    tracing::info!(environment = %config.environment, "Configuration loaded");

    let catalog_db = Arc::new(CatalogDb::new(
        config.cosmos_db_connection_string.clone(),
        config.db_max_connections,
        config.db_timeout_seconds,
    ));
    let songs: Arc<dyn SongRepository> = Arc::new(PgSongRepository::new(catalog_db));

    let blob_store = Arc::new(BlobStoreHandle::new(
        config.storage_connection_string.clone(),
        MUSIC_CONTAINER,
    ));

    let state = Arc::new(AppState {
        catalog: CatalogState { songs },
        stream: StreamState { blob_store },
        config: config.clone(),
    });

    // Setup routes
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
