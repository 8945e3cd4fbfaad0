//! Error types for the file cache server
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::multipart::{MultipartError, MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::warn;

use crate::models::ErrorResponse;

// == API Error Enum ==
/// Every way an upload or download request can fail.
///
/// The display text is what clients see in the `error` field.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request was not a readable multipart form, or exceeded the body limit
    #[error("file size too large")]
    InvalidForm(#[from] MultipartRejection),

    /// Multipart stream broke or exceeded the body limit while parsing
    #[error("file size too large")]
    UploadTooLarge(#[source] MultipartError),

    /// Form had no `file` field
    #[error("file lost")]
    FileMissing,

    /// The `file` field could not be read to the end
    #[error("file lost")]
    FileRead(#[source] MultipartError),

    /// Download request without a `key` query parameter
    #[error("key is missing")]
    MissingKey,

    /// Nothing cached under the requested key
    #[error("no file found for key")]
    NotFound(String),
}

impl ApiError {
    /// Maps a failure while reading field bytes, keeping body-limit hits
    /// reported as size errors.
    pub fn from_field_read(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::UploadTooLarge(err)
        } else {
            ApiError::FileRead(err)
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::InvalidForm(err) => warn!(error = %err, "Rejected upload form"),
            ApiError::UploadTooLarge(err) | ApiError::FileRead(err) => {
                warn!(error = %err, "Failed to read multipart upload")
            }
            ApiError::FileMissing => warn!("Error retrieving file from form-data"),
            ApiError::MissingKey => warn!("Download request without key"),
            ApiError::NotFound(key) => warn!(key = %key, "No cached file for key"),
        }

        let body = Json(ErrorResponse::new(self.to_string()));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for request handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_envelope() {
        let (status, json) = body_json(ApiError::NotFound("a.txt".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "no file found for key");
    }

    #[tokio::test]
    async fn test_missing_key_envelope() {
        let (status, json) = body_json(ApiError::MissingKey).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "key is missing");
    }

    #[tokio::test]
    async fn test_file_missing_envelope() {
        let (_, json) = body_json(ApiError::FileMissing).await;
        assert_eq!(json["error"], "file lost");
    }
}
