//! Request DTOs for the file endpoints.

use serde::{Deserialize, Serialize};

/// Body for `POST /api/files`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFileRequest {
    /// Display name of the new file.
    pub name: String,
    /// Initial content body.
    pub content: String,
}

/// Body for `PUT /api/files/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveFileRequest {
    /// The new content body.
    pub content: String,
    /// Optional new display name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Body for `PUT /api/files/{id}/force`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForceUpdateRequest {
    /// The new content body.
    pub content: String,
}
