//! Data models for the application
//!
//! Song catalog types plus the wire-level request/response shapes used by
//! the catalog and stream services.

pub mod song;
pub mod upload;

// Re-export all models for convenient imports
pub use song::{NewSong, NewSongRequest, Song, SongResponse};
pub use upload::UploadResponse;
