//! File version snapshot: one entry of the embedded ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A historical snapshot of a file's content.
///
/// Every entry except the first holds the *pre-image*: the content as it
/// existed immediately before the mutation that created the entry. The
/// first (founding) entry records the initial content at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileVersion {
    /// The content body captured by this snapshot.
    pub content: String,
    /// User who performed the mutation that triggered the snapshot.
    pub updated_by: Uuid,
    /// When the snapshot was captured.
    pub captured_at: DateTime<Utc>,
}

impl FileVersion {
    /// Capture a snapshot of the given content.
    pub fn capture(content: impl Into<String>, updated_by: Uuid) -> Self {
        Self {
            content: content.into(),
            updated_by,
            captured_at: Utc::now(),
        }
    }
}
