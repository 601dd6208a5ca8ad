//! Shared constants for the catalog and stream services.

/// Name of the catalog database. Fixed regardless of what database the
/// connection string points at.
pub const CATALOG_DATABASE: &str = "cloudtunes-db";

/// Blob container that holds uploaded music files. Created on first upload
/// with blob-level public read access so returned URLs are directly playable.
pub const MUSIC_CONTAINER: &str = "music-files";
