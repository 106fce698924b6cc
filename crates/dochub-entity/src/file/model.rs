//! File entity model with its embedded, append-only version ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::status::FileStatus;
use super::version::FileVersion;

/// A shared text document stored in DocHub.
///
/// The `versions` sequence is owned exclusively by this entity: it is
/// seeded with a founding snapshot at creation, grows by exactly one
/// pre-image per content-mutating save, and is never truncated or
/// reordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct File {
    /// Unique file identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Current ("live") text body.
    pub content: String,
    /// The user who created the file. Immutable after creation.
    pub author_id: Uuid,
    /// Publication status.
    pub status: FileStatus,
    /// Append-only snapshot history, oldest first.
    pub versions: Vec<FileVersion>,
    /// When the file was created.
    pub created_at: DateTime<Utc>,
    /// When the file was last mutated. Sort key for listings.
    pub updated_at: DateTime<Utc>,
}

impl File {
    /// Create a new approved file with its founding snapshot.
    ///
    /// The founding entry records the initial content and the author as
    /// its creator (provenance, not a pre-edit state).
    pub fn new(name: impl Into<String>, content: impl Into<String>, author_id: Uuid) -> Self {
        let content = content.into();
        let now = Utc::now();
        let founding = FileVersion::capture(content.clone(), author_id);
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            content,
            author_id,
            status: FileStatus::Approved,
            versions: vec![founding],
            created_at: now,
            updated_at: now,
        }
    }

    /// Append the current content to the ledger as a pre-image.
    ///
    /// Must be called exactly once per content-mutating save, *before*
    /// the new content is written in.
    pub fn snapshot(&mut self, actor: Uuid) {
        self.versions
            .push(FileVersion::capture(self.content.clone(), actor));
    }

    /// Whether the file is visible in the general listing.
    pub fn is_approved(&self) -> bool {
        matches!(self.status, FileStatus::Approved)
    }

    /// Whether the given user is the file's author.
    pub fn is_authored_by(&self, user_id: Uuid) -> bool {
        self.author_id == user_id
    }
}

/// A file together with its resolved author identity, as returned by
/// listing and read operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileWithAuthor {
    /// The file record.
    #[serde(flatten)]
    pub file: File,
    /// Display name of the author, or `"unknown"` if the user record
    /// is gone.
    pub author_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_file_seeds_founding_snapshot() {
        let author = Uuid::new_v4();
        let file = File::new("a.txt", "hello", author);

        assert_eq!(file.status, FileStatus::Approved);
        assert_eq!(file.versions.len(), 1);
        assert_eq!(file.versions[0].content, "hello");
        assert_eq!(file.versions[0].updated_by, author);
        assert_eq!(file.content, "hello");
    }

    #[test]
    fn test_snapshot_captures_pre_image() {
        let author = Uuid::new_v4();
        let editor = Uuid::new_v4();
        let mut file = File::new("a.txt", "v0", author);

        file.snapshot(editor);
        file.content = "v1".to_string();

        assert_eq!(file.versions.len(), 2);
        assert_eq!(file.versions[1].content, "v0");
        assert_eq!(file.versions[1].updated_by, editor);
        assert_eq!(file.content, "v1");
    }

    #[test]
    fn test_ledger_grows_one_entry_per_save() {
        let author = Uuid::new_v4();
        let mut file = File::new("a.txt", "c0", author);

        for i in 1..=5 {
            file.snapshot(author);
            file.content = format!("c{i}");
        }

        // 1 founding entry + 5 pre-images
        assert_eq!(file.versions.len(), 6);
        for (k, version) in file.versions.iter().enumerate().skip(1) {
            assert_eq!(version.content, format!("c{}", k - 1));
        }
        assert_eq!(file.content, "c5");
    }
}
