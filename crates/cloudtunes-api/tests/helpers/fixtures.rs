//! Shared fixtures for integration tests.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use cloudtunes_core::models::song::Song;
use uuid::Uuid;

/// Song row with a fixed creation time, for seeding the in-memory repository.
pub fn song_at(title: &str, created_at: DateTime<Utc>) -> Song {
    Song {
        id: Uuid::new_v4(),
        title: title.to_string(),
        artist: None,
        album: None,
        url: format!("https://cdn.example/{}.mp3", title),
        created_at,
    }
}

/// A few bytes that look like an MP3 file (ID3v2 header plus one frame sync).
/// The service never inspects file content.
pub fn fake_mp3_bytes() -> Vec<u8> {
    let mut data = b"ID3\x04\x00\x00\x00\x00\x00\x00".to_vec();
    data.extend_from_slice(&[0xFF, 0xFB, 0x90, 0x00]);
    data.resize(data.len() + 64, 0);
    data
}
