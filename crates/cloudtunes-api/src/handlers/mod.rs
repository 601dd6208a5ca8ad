pub mod file_upload;
pub mod health;
pub mod songs_create;
pub mod songs_get;
