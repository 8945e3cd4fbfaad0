//! API Module
//!
//! HTTP handlers and routing for the file cache server.
//!
//! # Endpoints
//! - `/ping` - Liveness probe
//! - `POST /upload` - Cache an uploaded file under its filename
//! - `GET /download?key=` - Retrieve a cached file
//! - `/` - Static files

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
