use crate::error::{HttpAppError, ValidatedJson};
use crate::state::CatalogState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use cloudtunes_core::models::song::{NewSongRequest, SongResponse};
use cloudtunes_core::AppError;

#[utoipa::path(
    post,
    path = "/addSong",
    tag = "songs",
    request_body = NewSongRequest,
    responses(
        (status = 201, description = "Song added to the catalog", body = SongResponse),
        (status = 400, description = "Missing title or url", body = String),
        (status = 500, description = "Error saving data", body = String)
    )
)]
#[tracing::instrument(skip(catalog, request), fields(operation = "add_song"))]
pub async fn add_song(
    State(catalog): State<CatalogState>,
    ValidatedJson(request): ValidatedJson<NewSongRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let new_song = request.validate()?;

    let song = catalog
        .songs
        .create_song(new_song)
        .await
        // Failed writes report "Error saving data" rather than the read-path message.
        .map_err(|e| match e {
            AppError::Database(source) => AppError::SaveFailed(source),
            other => other,
        })?;

    Ok((StatusCode::CREATED, Json(SongResponse::from(song))))
}
