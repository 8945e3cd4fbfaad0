//! filecache - A small file upload/download server
//!
//! Uploaded files are kept in a fixed-capacity in-memory LRU cache keyed by
//! filename.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::LruCache;
pub use config::Config;
