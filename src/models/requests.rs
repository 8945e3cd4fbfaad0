//! Request DTOs for the file cache API
//!
//! Defines the structure of incoming query parameters.

/// Query string of the download operation (GET /download?key=...)
///
/// An empty `key` is a valid lookup; only a missing parameter is rejected.
/// When `key` is repeated, the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadQuery {
    /// Filename the file was uploaded under
    pub key: Option<String>,
}

impl DownloadQuery {
    /// Builds the query from decoded `name=value` pairs in request order.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let key = pairs
            .into_iter()
            .find(|(name, _)| name == "key")
            .map(|(_, value)| value);
        Self { key }
    }
}
