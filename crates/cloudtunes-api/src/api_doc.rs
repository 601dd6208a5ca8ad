//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers;
use cloudtunes_core::models;

/// Returns the OpenAPI spec served at /api/openapi.json.
pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CloudTunes API",
        version = "0.1.0",
        description = "Song catalog and music streaming API. Catalog entries live in Postgres; uploaded music files go to Azure Blob Storage and are served from public blob URLs."
    ),
    paths(
        // Catalog
        handlers::songs_get::get_songs,
        handlers::songs_create::add_song,
        // Stream
        handlers::file_upload::upload_file,
        // Health
        handlers::health::liveness_check,
    ),
    components(
        schemas(
            models::song::NewSongRequest,
            models::song::SongResponse,
            models::upload::UploadResponse,
        )
    ),
    tags(
        (name = "songs", description = "Song catalog listing and creation"),
        (name = "stream", description = "Music file upload to blob storage"),
        (name = "health", description = "Service health checks")
    )
)]
pub struct ApiDoc;
