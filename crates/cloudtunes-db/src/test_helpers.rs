//! Test helpers for catalog tests
//!
//! In-memory repository for exercising request handlers without a database.
//! Call counters let tests assert which operations actually ran.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use cloudtunes_core::models::song::{NewSong, Song};
use cloudtunes_core::AppError;

use crate::songs::SongRepository;

/// In-memory song repository. Share it between the test and the app state
/// through an `Arc` to observe calls from both sides.
#[derive(Default)]
pub struct InMemorySongRepository {
    songs: Mutex<Vec<Song>>,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
    fail: AtomicBool,
}

impl InMemorySongRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a song directly, bypassing the repository interface.
    pub fn push_song(&self, song: Song) {
        self.songs.lock().unwrap().push(song);
    }

    /// Make every subsequent call fail, simulating a lost database.
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SongRepository for InMemorySongRepository {
    async fn list_songs(&self) -> Result<Vec<Song>, AppError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::PoolClosed));
        }
        let mut songs = self.songs.lock().unwrap().clone();
        songs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(songs)
    }

    async fn create_song(&self, song: NewSong) -> Result<Song, AppError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::PoolClosed));
        }
        let song = Song {
            id: Uuid::new_v4(),
            title: song.title,
            artist: song.artist,
            album: song.album,
            url: song.url,
            created_at: Utc::now(),
        };
        self.songs.lock().unwrap().push(song.clone());
        Ok(song)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn new_song(title: &str) -> NewSong {
        NewSong {
            title: title.to_string(),
            artist: None,
            album: None,
            url: format!("https://x/{}.mp3", title),
        }
    }

    #[tokio::test]
    async fn test_create_then_list_roundtrip() {
        let repo = InMemorySongRepository::new();
        let created = repo.create_song(new_song("a")).await.unwrap();

        let songs = repo.list_songs().await.unwrap();
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].id, created.id);
        assert_eq!(repo.create_calls(), 1);
        assert_eq!(repo.list_calls(), 1);
    }

    #[tokio::test]
    async fn test_list_orders_newest_first() {
        let repo = InMemorySongRepository::new();
        for (title, ts) in [("old", 1_000), ("newest", 3_000), ("mid", 2_000)] {
            repo.push_song(Song {
                id: Uuid::new_v4(),
                title: title.to_string(),
                artist: None,
                album: None,
                url: format!("https://x/{}.mp3", title),
                created_at: Utc.timestamp_opt(ts, 0).unwrap(),
            });
        }

        let songs = repo.list_songs().await.unwrap();
        let titles: Vec<&str> = songs.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["newest", "mid", "old"]);
    }

    #[tokio::test]
    async fn test_fail_flag_breaks_both_operations() {
        let repo = InMemorySongRepository::new();
        repo.set_fail(true);

        assert!(repo.list_songs().await.is_err());
        assert!(repo.create_song(new_song("a")).await.is_err());
        assert_eq!(repo.list_calls(), 1);
        assert_eq!(repo.create_calls(), 1);
    }
}
