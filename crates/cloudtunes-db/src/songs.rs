//! Song catalog repository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Postgres;
use uuid::Uuid;

use cloudtunes_core::models::song::{NewSong, Song};
use cloudtunes_core::AppError;

use crate::catalog::CatalogDb;

/// Data access for the song catalog. Implementations must be shareable
/// across request handlers.
#[async_trait]
pub trait SongRepository: Send + Sync {
    /// List every song, newest first.
    async fn list_songs(&self) -> Result<Vec<Song>, AppError>;

    /// Persist a new song and return the stored row, timestamp included.
    async fn create_song(&self, song: NewSong) -> Result<Song, AppError>;
}

#[derive(sqlx::FromRow)]
struct SongRow {
    id: Uuid,
    title: String,
    artist: Option<String>,
    album: Option<String>,
    url: String,
    created_at: DateTime<Utc>,
}

impl From<SongRow> for Song {
    fn from(row: SongRow) -> Self {
        Song {
            id: row.id,
            title: row.title,
            artist: row.artist,
            album: row.album,
            url: row.url,
            created_at: row.created_at,
        }
    }
}

/// Postgres-backed song repository.
#[derive(Clone)]
pub struct PgSongRepository {
    db: Arc<CatalogDb>,
}

impl PgSongRepository {
    pub fn new(db: Arc<CatalogDb>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SongRepository for PgSongRepository {
    #[tracing::instrument(skip(self), fields(db.table = "songs", db.operation = "select"))]
    async fn list_songs(&self) -> Result<Vec<Song>, AppError> {
        let pool = self.db.pool().await?;
        let rows: Vec<SongRow> = sqlx::query_as::<Postgres, SongRow>(
            r#"
            SELECT id, title, artist, album, url, created_at
            FROM songs
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(Song::from).collect())
    }

    #[tracing::instrument(skip(self, song), fields(db.table = "songs", db.operation = "insert"))]
    async fn create_song(&self, song: NewSong) -> Result<Song, AppError> {
        let pool = self.db.pool().await?;
        // created_at comes from the column default so ordering follows
        // insertion order as observed by the database.
        let row: SongRow = sqlx::query_as::<Postgres, SongRow>(
            r#"
            INSERT INTO songs (id, title, artist, album, url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, artist, album, url, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&song.title)
        .bind(&song.artist)
        .bind(&song.album)
        .bind(&song.url)
        .fetch_one(pool)
        .await?;

        Ok(row.into())
    }
}
