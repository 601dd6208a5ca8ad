use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response returned after a successful file upload. `url` is the public
/// blob URL, playable without authentication.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    pub filename: String,
    pub url: String,
}
