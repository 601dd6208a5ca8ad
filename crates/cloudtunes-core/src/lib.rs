//! CloudTunes Core Library
//!
//! This crate provides the core domain models, error types, configuration, and
//! shared constants used by the CloudTunes catalog and stream services.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::song::{NewSong, NewSongRequest, Song, SongResponse};
pub use models::upload::UploadResponse;
