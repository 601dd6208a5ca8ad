use crate::error::HttpAppError;
use crate::state::StreamState;
use crate::utils::upload::extract_first_file;
use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    Json,
};
use cloudtunes_core::models::upload::UploadResponse;

#[utoipa::path(
    post,
    path = "/uploadFile",
    tag = "stream",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File stored and publicly reachable", body = UploadResponse),
        (status = 400, description = "No file uploaded", body = String),
        (status = 500, description = "Upload failed", body = String)
    )
)]
#[tracing::instrument(skip(stream, multipart), fields(operation = "upload_file"))]
pub async fn upload_file(
    State(stream): State<StreamState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    // Resolve storage configuration before reading the body, so a missing
    // connection string reports the same way whatever the payload looks like.
    let store = stream.blob_store.get().await.map_err(HttpAppError::from)?;

    let file = extract_first_file(multipart).await?;

    store.ensure_container().await.map_err(HttpAppError::from)?;

    let url = store
        .upload_blob(&file.blob_name, &file.content_type, file.data)
        .await
        .map_err(HttpAppError::from)?;

    Ok(Json(UploadResponse {
        filename: file.blob_name,
        url,
    }))
}
