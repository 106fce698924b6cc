//! Edit entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A record of one save applied to a file.
///
/// Holds only a weak reference (`file_id`) to its file. Edits never
/// outlive the file they reference; the cascade coordinator removes them
/// when the file is deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Edit {
    /// Unique edit identifier.
    pub id: Uuid,
    /// The file this edit was applied to.
    pub file_id: Uuid,
    /// The user who performed the save.
    pub edited_by: Uuid,
    /// The content that was written in.
    pub content: String,
    /// When the save happened.
    pub created_at: DateTime<Utc>,
}

impl Edit {
    /// Record a save of `content` to `file_id` by `edited_by`.
    pub fn new(file_id: Uuid, edited_by: Uuid, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            file_id,
            edited_by,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}
