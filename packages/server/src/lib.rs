//! HTTP server for the property query service.
//!
//! Exposes the retrieval pipeline over two routes:
//! - `POST /query` - answer one free-text property query
//! - `GET /health` - liveness plus catalog size

pub mod config;
pub mod server;

pub use config::Config;
pub use server::app::{build_app, AppState};
