use crate::error::HttpAppError;
use crate::state::CatalogState;
use axum::{extract::State, response::IntoResponse, Json};
use cloudtunes_core::models::song::SongResponse;

#[utoipa::path(
    get,
    path = "/getSongs",
    tag = "songs",
    responses(
        (status = 200, description = "All songs in the catalog, newest first", body = Vec<SongResponse>),
        (status = 500, description = "Database error", body = String)
    )
)]
#[tracing::instrument(skip(catalog), fields(operation = "get_songs"))]
pub async fn get_songs(
    State(catalog): State<CatalogState>,
) -> Result<impl IntoResponse, HttpAppError> {
    let songs = catalog
        .songs
        .list_songs()
        .await
        .map_err(HttpAppError::from)?;

    let response: Vec<SongResponse> = songs.into_iter().map(SongResponse::from).collect();
    Ok(Json(response))
}
