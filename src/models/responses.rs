//! Response DTOs for the file cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;

/// Response body for upload and download (`{"data": "<base64>"}`)
///
/// File bytes are carried as padded standard-alphabet base64.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataResponse {
    /// Base64-encoded file contents
    pub data: String,
}

impl DataResponse {
    /// Creates a new DataResponse by encoding the raw file bytes
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            data: STANDARD.encode(bytes),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
