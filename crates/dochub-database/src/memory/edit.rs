//! In-memory edit repository.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use dochub_core::result::AppResult;
use dochub_entity::edit::Edit;

use crate::repositories::edit::EditRepository;

/// In-memory edit repository for single-node deployments and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryEditRepository {
    edits: Arc<DashMap<Uuid, Edit>>,
}

impl MemoryEditRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EditRepository for MemoryEditRepository {
    async fn create(&self, edit: &Edit) -> AppResult<Edit> {
        self.edits.insert(edit.id, edit.clone());
        Ok(edit.clone())
    }

    async fn find_by_file(&self, file_id: Uuid) -> AppResult<Vec<Edit>> {
        let mut edits: Vec<Edit> = self
            .edits
            .iter()
            .filter(|entry| entry.file_id == file_id)
            .map(|entry| entry.value().clone())
            .collect();
        edits.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(edits)
    }

    async fn delete_by_file(&self, file_id: Uuid) -> AppResult<u64> {
        let ids: Vec<Uuid> = self
            .edits
            .iter()
            .filter(|entry| entry.file_id == file_id)
            .map(|entry| entry.id)
            .collect();
        let removed = ids
            .iter()
            .filter(|id| self.edits.remove(id).is_some())
            .count();
        Ok(removed as u64)
    }
}
