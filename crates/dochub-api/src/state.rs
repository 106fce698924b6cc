//! Application state shared across all handlers.

use std::sync::Arc;

use dochub_auth::jwt::decoder::JwtDecoder;
use dochub_core::config::AppConfig;
use dochub_service::file::FileService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// File service.
    pub file_service: Arc<FileService>,
}
