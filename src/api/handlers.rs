//! API Handlers
//!
//! HTTP request handlers for each file cache endpoint.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{
        multipart::{Multipart, MultipartRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use tokio::sync::Mutex;
use tracing::info;

use crate::cache::LruCache;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{DataResponse, DownloadQuery};

/// Multipart form field that carries the uploaded file
pub const FILE_FIELD: &str = "file";

/// Application state shared across all handlers.
///
/// The cache sits behind one mutex: every set and get reorders the recency
/// list, so even lookups need exclusive access.
#[derive(Clone)]
pub struct AppState {
    /// Shared file cache
    pub cache: Arc<Mutex<LruCache>>,
    /// Directory served for every path without a dedicated route
    pub static_dir: PathBuf,
    /// Largest accepted upload request body in bytes
    pub max_upload_bytes: usize,
}

impl AppState {
    /// Creates a new AppState around the given cache with default settings.
    pub fn new(cache: LruCache) -> Self {
        let defaults = Config::default();
        Self {
            cache: Arc::new(Mutex::new(cache)),
            static_dir: defaults.static_dir,
            max_upload_bytes: defaults.max_upload_bytes,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            static_dir: config.static_dir.clone(),
            max_upload_bytes: config.max_upload_bytes,
            ..Self::new(LruCache::new(config.cache_capacity))
        }
    }

    /// Overrides the static file directory.
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }

    /// Overrides the upload body limit.
    pub fn with_max_upload_bytes(mut self, limit: usize) -> Self {
        self.max_upload_bytes = limit;
        self
    }
}

/// A file pulled out of an upload form
#[derive(Debug)]
struct UploadedFile {
    filename: String,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

/// Finds the `file` field and reads it to the end.
///
/// Fields before it are skipped. A part without a filename is stored under
/// the empty key.
async fn read_file_field(multipart: &mut Multipart) -> Result<UploadedFile> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(ApiError::UploadTooLarge)?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map_err(ApiError::from_field_read)?;

        return Ok(UploadedFile {
            filename,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    Err(ApiError::FileMissing)
}

/// Handler for /ping
///
/// Liveness probe, answers any method.
pub async fn ping_handler() -> &'static str {
    "pong!\n"
}

/// Handler for POST /upload
///
/// Caches the uploaded file under its filename and echoes the contents back.
pub async fn upload_handler(
    State(state): State<AppState>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<DataResponse>)> {
    let mut multipart = multipart?;
    let upload = read_file_field(&mut multipart).await?;

    info!(
        filename = %upload.filename,
        size = upload.bytes.len(),
        content_type = ?upload.content_type,
        "Uploaded file"
    );

    let response = DataResponse::new(&upload.bytes);
    state.cache.lock().await.set(upload.filename, upload.bytes);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for GET /download?key=...
///
/// Returns the cached file for `key` and marks it most recently used.
/// The query is taken as raw pairs so a repeated `key` resolves to its first
/// value instead of failing extraction.
pub async fn download_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<DataResponse>> {
    let key = DownloadQuery::from_pairs(pairs)
        .key
        .ok_or(ApiError::MissingKey)?;

    let mut cache = state.cache.lock().await;
    match cache.get(&key) {
        Some(bytes) => Ok(Json(DataResponse::new(bytes))),
        None => Err(ApiError::NotFound(key)),
    }
}

/// Fallback for unsupported methods on the upload and download routes
pub async fn request_not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "request not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_query(key: &str) -> Query<Vec<(String, String)>> {
        Query(vec![("key".to_string(), key.to_string())])
    }

    #[tokio::test]
    async fn test_ping_handler() {
        assert_eq!(ping_handler().await, "pong!\n");
    }

    #[tokio::test]
    async fn test_download_handler_hit() {
        let state = AppState::new(LruCache::new(3));
        state.cache.lock().await.set("hello.txt", b"hello".to_vec());

        let Json(response) = download_handler(State(state), key_query("hello.txt"))
            .await
            .unwrap();

        assert_eq!(response.data, "aGVsbG8=");
    }

    #[tokio::test]
    async fn test_download_handler_miss() {
        let state = AppState::new(LruCache::new(3));

        let result = download_handler(State(state), key_query("absent.txt")).await;

        assert!(matches!(result, Err(ApiError::NotFound(key)) if key == "absent.txt"));
    }

    #[tokio::test]
    async fn test_download_handler_missing_key() {
        let state = AppState::new(LruCache::new(3));

        let query = Query(vec![("other".to_string(), "x".to_string())]);
        let result = download_handler(State(state), query).await;

        assert!(matches!(result, Err(ApiError::MissingKey)));
    }

    #[tokio::test]
    async fn test_download_handler_promotes_entry() {
        let state = AppState::new(LruCache::new(2));
        {
            let mut cache = state.cache.lock().await;
            cache.set("a", b"1".to_vec());
            cache.set("b", b"2".to_vec());
        }

        download_handler(State(state.clone()), key_query("a"))
            .await
            .unwrap();
        state.cache.lock().await.set("c", b"3".to_vec());

        let mut cache = state.cache.lock().await;
        assert!(cache.get("a").is_some());
        assert!(cache.get("b").is_none());
    }

    #[tokio::test]
    async fn test_download_handler_repeated_key_uses_first() {
        let state = AppState::new(LruCache::new(3));
        {
            let mut cache = state.cache.lock().await;
            cache.set("a", b"first".to_vec());
            cache.set("b", b"second".to_vec());
        }

        let query = Query(vec![
            ("key".to_string(), "a".to_string()),
            ("key".to_string(), "b".to_string()),
        ]);
        let Json(response) = download_handler(State(state), query).await.unwrap();

        assert_eq!(response, DataResponse::new(b"first"));
    }

    #[test]
    fn test_app_state_from_config() {
        let config = Config {
            cache_capacity: 7,
            static_dir: PathBuf::from("/srv/www"),
            max_upload_bytes: 512,
            ..Config::default()
        };

        let state = AppState::from_config(&config);

        assert_eq!(state.static_dir, PathBuf::from("/srv/www"));
        assert_eq!(state.max_upload_bytes, 512);
        assert_eq!(state.cache.try_lock().unwrap().capacity(), 7);
    }
}
