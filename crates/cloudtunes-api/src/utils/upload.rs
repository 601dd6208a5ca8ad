//! Common utilities for file upload handlers

use axum::extract::Multipart;
use bytes::Bytes;
use chrono::Utc;
use cloudtunes_core::AppError;

/// One file pulled out of a multipart form.
#[derive(Debug)]
pub struct UploadedFile {
    pub blob_name: String,
    pub content_type: String,
    pub data: Bytes,
}

/// Extract the first file from a multipart form, whatever its field name.
///
/// Later parts are read and discarded so the connection drains cleanly.
/// A form with no parts at all is rejected as "No file uploaded".
pub async fn extract_first_file(mut multipart: Multipart) -> Result<UploadedFile, AppError> {
    let mut uploaded: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        if uploaded.is_some() {
            // Drain remaining parts without buffering them.
            continue;
        }

        let blob_name = field
            .file_name()
            .map(|s: &str| s.to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(fallback_song_name);
        let content_type = field
            .content_type()
            .map(|s: &str| s.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::InvalidInput(format!("Failed to read file data: {}", e)))?;

        uploaded = Some(UploadedFile {
            blob_name,
            content_type,
            data,
        });
    }

    uploaded.ok_or_else(|| AppError::InvalidInput("No file uploaded".to_string()))
}

/// Blob name for parts that arrive without a filename.
fn fallback_song_name() -> String {
    format!("song-{}.mp3", Utc::now().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::extract::FromRequest;
    use axum::http::Request;
    use cloudtunes_core::ErrorMetadata;

    const BOUNDARY: &str = "------------------------test-boundary";

    fn multipart_request(body: Vec<u8>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/uploadFile")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn part(field_name: &str, filename: Option<&str>, content_type: &str, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match filename {
            Some(name) => out.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                    field_name, name
                )
                .as_bytes(),
            ),
            None => out.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{}\"\r\n", field_name).as_bytes(),
            ),
        }
        out.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
        out.extend_from_slice(data);
        out.extend_from_slice(b"\r\n");
        out
    }

    fn closing() -> Vec<u8> {
        format!("--{}--\r\n", BOUNDARY).into_bytes()
    }

    async fn multipart_from(body: Vec<u8>) -> Multipart {
        Multipart::from_request(multipart_request(body), &())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_extract_first_file_returns_name_type_and_data() {
        let mut body = part("file", Some("track.mp3"), "audio/mpeg", b"ID3 payload");
        body.extend_from_slice(&closing());

        let file = extract_first_file(multipart_from(body).await)
            .await
            .unwrap();

        assert_eq!(file.blob_name, "track.mp3");
        assert_eq!(file.content_type, "audio/mpeg");
        assert_eq!(file.data.as_ref(), b"ID3 payload");
    }

    #[tokio::test]
    async fn test_extract_first_file_keeps_first_of_many_parts() {
        let mut body = part("file", Some("first.mp3"), "audio/mpeg", b"first");
        body.extend_from_slice(&part("extra", Some("second.mp3"), "audio/mpeg", b"second"));
        body.extend_from_slice(&closing());

        let file = extract_first_file(multipart_from(body).await)
            .await
            .unwrap();

        assert_eq!(file.blob_name, "first.mp3");
        assert_eq!(file.data.as_ref(), b"first");
    }

    #[tokio::test]
    async fn test_extract_first_file_rejects_empty_form() {
        let err = extract_first_file(multipart_from(closing()).await)
            .await
            .unwrap_err();

        assert_eq!(err.client_message(), "No file uploaded");
        assert_eq!(err.http_status_code(), 400);
    }

    #[tokio::test]
    async fn test_extract_first_file_generates_fallback_name() {
        let mut body = part("file", None, "audio/mpeg", b"nameless");
        body.extend_from_slice(&closing());

        let file = extract_first_file(multipart_from(body).await)
            .await
            .unwrap();

        assert!(file.blob_name.starts_with("song-"));
        assert!(file.blob_name.ends_with(".mp3"));
    }

    #[tokio::test]
    async fn test_extract_first_file_accepts_empty_data() {
        let mut body = part("file", Some("empty.mp3"), "audio/mpeg", b"");
        body.extend_from_slice(&closing());

        let file = extract_first_file(multipart_from(body).await)
            .await
            .unwrap();

        assert_eq!(file.blob_name, "empty.mp3");
        assert!(file.data.is_empty());
    }
}
