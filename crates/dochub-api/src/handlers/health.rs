//! Health check endpoint.

use axum::Json;
use serde_json::{Value, json};

/// GET /api/health
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "status": "healthy",
            "service": "dochub",
            "version": env!("CARGO_PKG_VERSION"),
        }
    }))
}
