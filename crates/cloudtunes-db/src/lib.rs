//! CloudTunes Database Library
//!
//! Song catalog repositories plus the lazily-connected Postgres handle they
//! share. Nothing here connects at startup; the first catalog request pays
//! the connection cost.

pub mod catalog;
pub mod songs;
pub mod test_helpers;

// Re-export commonly used types
pub use catalog::CatalogDb;
pub use songs::{PgSongRepository, SongRepository};
