//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A notification delivered to a user about activity on a file.
///
/// Holds only a weak reference (`file_id`) to its file and is removed by
/// the cascade coordinator when the file is deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// The recipient user.
    pub user_id: Uuid,
    /// The file this notification is about.
    pub file_id: Uuid,
    /// Human-readable message.
    pub message: String,
    /// Whether the recipient has read it.
    pub is_read: bool,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Create an unread notification for `user_id` about `file_id`.
    pub fn new(user_id: Uuid, file_id: Uuid, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            file_id,
            message: message.into(),
            is_read: false,
            created_at: Utc::now(),
        }
    }
}
