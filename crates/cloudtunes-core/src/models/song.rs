use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::AppError;

/// A song in the catalog. Rows are immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    pub id: Uuid,
    pub title: String,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

/// Incoming payload for song creation. Every field is optional at the wire
/// level; `validate` decides what is actually required.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewSongRequest {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub url: Option<String>,
}

impl NewSongRequest {
    /// Validate the payload. `title` and `url` must be present and non-empty.
    /// Values are stored exactly as sent, whitespace included, so a
    /// whitespace-only title passes.
    pub fn validate(self) -> Result<NewSong, AppError> {
        let title = self.title.filter(|t| !t.is_empty());
        let url = self.url.filter(|u| !u.is_empty());
        match (title, url) {
            (Some(title), Some(url)) => Ok(NewSong {
                title,
                artist: self.artist,
                album: self.album,
                url,
            }),
            _ => Err(AppError::InvalidInput("Missing title or url".to_string())),
        }
    }
}

/// A validated song creation request, ready to persist.
#[derive(Debug, Clone)]
pub struct NewSong {
    pub title: String,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SongResponse {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    pub url: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<Song> for SongResponse {
    fn from(song: Song) -> Self {
        SongResponse {
            id: song.id,
            title: song.title,
            artist: song.artist,
            album: song.album,
            url: song.url,
            created_at: song.created_at,
        }
    }
}
